use alloc::boxed::Box;
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::ShotOutcome,
    coordinate::Coordinate,
    player::Combatant,
};

/// One of the two sides of a game. `First` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won(Side),
}

/// What happened during one call to [`Game::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub side: Side,
    pub target: Coordinate,
    pub outcome: ShotOutcome,
}

/// Turn loop holding both boards and both combatants.
///
/// Each side fires at the other side's board. A hit keeps the turn; a miss
/// hands it over.
pub struct Game {
    boards: [Board; 2],
    combatants: [Box<dyn Combatant>; 2],
    current: Side,
    shots: usize,
}

impl Game {
    /// Boards still in setup are started here; until then their ship cells
    /// are reserved and could never be hit.
    pub fn new(
        first: Box<dyn Combatant>,
        mut first_board: Board,
        second: Box<dyn Combatant>,
        mut second_board: Board,
    ) -> Self {
        for board in [&mut first_board, &mut second_board] {
            if !board.started() {
                board.begin();
            }
        }
        Self {
            boards: [first_board, second_board],
            combatants: [first, second],
            current: Side::First,
            shots: 0,
        }
    }

    /// Side about to move.
    pub fn current(&self) -> Side {
        self.current
    }

    /// The board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    pub fn combatant(&self, side: Side) -> &dyn Combatant {
        self.combatants[side.index()].as_ref()
    }

    /// Resolved shots so far, both sides.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.board(Side::Second).all_destroyed() {
            GameStatus::Won(Side::First)
        } else if self.board(Side::First).all_destroyed() {
            GameStatus::Won(Side::Second)
        } else {
            GameStatus::InProgress
        }
    }

    /// Let the current side fire one resolved shot, then pass the turn on a miss.
    pub fn step(&mut self, rng: &mut SmallRng) -> anyhow::Result<TurnReport> {
        if let GameStatus::Won(side) = self.status() {
            return Err(anyhow::anyhow!("game is over, {:?} side won", side));
        }
        let side = self.current;
        let attacker = &mut self.combatants[side.index()];
        let enemy = &mut self.boards[side.opponent().index()];
        let (target, outcome) = attacker.take_turn(rng, enemy)?;
        self.shots += 1;
        log::debug!("{:?} fired at {:?}: {:?}", side, target, outcome);
        if !outcome.grants_extra_turn() {
            self.current = side.opponent();
        }
        Ok(TurnReport {
            side,
            target,
            outcome,
        })
    }

    /// Play to the end without any presentation. Returns the winner.
    pub fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<Side> {
        loop {
            if let GameStatus::Won(side) = self.status() {
                log::info!("{:?} side won after {} shots", side, self.shots);
                return Ok(side);
            }
            self.step(rng)?;
        }
    }
}
