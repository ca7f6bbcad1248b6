#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::string::String;

use rand::rngs::SmallRng;

use super::Combatant;
use crate::{
    board::Board,
    common::{BoardError, ShotOutcome},
    coordinate::Coordinate,
};

/// Rejected console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Not exactly two tokens.
    WrongArity,
    /// A token is not a non-negative integer.
    NotANumber,
    /// Coordinates are one-based; zero has no cell.
    Zero,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::WrongArity => write!(f, " Input 2 coordinates! "),
            InputError::NotANumber => write!(f, " Input numbers! "),
            InputError::Zero => write!(f, " Coordinates start at 1! "),
        }
    }
}

impl std::error::Error for InputError {}

/// Parse `"row col"`, one-based, into a zero-based coordinate.
///
/// Only the shape of the input is checked here; whether the cell lies on the
/// board is left to [`Board::shot`].
pub fn parse_coord(input: &str) -> Result<Coordinate, InputError> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let [row, col] = parts.as_slice() else {
        return Err(InputError::WrongArity);
    };
    let row: usize = row.parse().map_err(|_| InputError::NotANumber)?;
    let col: usize = col.parse().map_err(|_| InputError::NotANumber)?;
    if row == 0 || col == 0 {
        return Err(InputError::Zero);
    }
    Ok(Coordinate::new(row - 1, col - 1))
}

/// Console player reading moves from `input` and talking back on `output`.
pub struct HumanCombatant<R, W> {
    input: R,
    output: W,
}

impl HumanCombatant<StdinLock<'static>, Stdout> {
    /// Player on the process's stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanCombatant<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Recover the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Combatant for HumanCombatant<R, W> {
    fn name(&self) -> &str {
        "Player"
    }

    fn select_target(&mut self, _rng: &mut SmallRng, _enemy: &Board) -> anyhow::Result<Coordinate> {
        loop {
            write!(self.output, "Your move: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(anyhow::anyhow!("input closed"));
            }
            match parse_coord(&line) {
                Ok(coord) => return Ok(coord),
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
    }

    // The turn is retried either way, so a failed write only loses the message.
    fn report_violation(&mut self, _target: Coordinate, err: &BoardError) {
        if let Err(io_err) = writeln!(self.output, "{}", err) {
            log::warn!("could not tell the player \"{}\": {}", err, io_err);
        }
    }

    fn handle_outcome(&mut self, target: Coordinate, outcome: ShotOutcome) {
        log::debug!("player fired at {:?}: {:?}", target, outcome);
    }
}
