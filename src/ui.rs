//! Text rendering of boards.

use core::fmt;

use crate::board::{Board, Cell};
#[cfg(feature = "std")]
use crate::game::{Game, Side};

impl Cell {
    /// Symbol for this cell; `hidden` masks ships on the opponent's board.
    pub fn symbol(self, hidden: bool) -> char {
        match self {
            Cell::Empty => '0',
            Cell::Occupied if hidden => '0',
            Cell::Occupied => '■',
            Cell::Hit => 'X',
            Cell::Miss | Cell::Excluded => '.',
        }
    }
}

/// Grid with one-based row and column labels, honouring [`Board::hidden`].
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        write!(f, "      | ")?;
        for c in 0..size {
            write!(f, "{} | ", c + 1)?;
        }
        writeln!(f)?;
        write!(f, "      |")?;
        for _ in 0..size {
            write!(f, "   |")?;
        }
        writeln!(f)?;
        separator(f, size)?;
        for (r, row) in self.rows().enumerate().take(size) {
            write!(f, "  {:<3} | ", r + 1)?;
            for cell in row {
                write!(f, "{} | ", cell.symbol(self.hidden()))?;
            }
            writeln!(f)?;
            separator(f, size)?;
        }
        Ok(())
    }
}

fn separator(f: &mut fmt::Formatter<'_>, size: usize) -> fmt::Result {
    write!(f, "------")?;
    for _ in 0..size {
        write!(f, " ---")?;
    }
    writeln!(f)
}

/// Print both sides' boards with their ship counts, first side on top.
#[cfg(feature = "std")]
pub fn print_boards(game: &Game) {
    for side in [Side::First, Side::Second] {
        let board = game.board(side);
        let name = game.combatant(side).name();
        std::println!(
            "\n{}\n{}'s board:\n{}\n {}'s ships quantity: {}",
            "-".repeat(8 + 4 * board.size()),
            name,
            board,
            name,
            board.ships_remaining()
        );
    }
}
