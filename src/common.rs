//! Common types for Sea Battle: board errors and shot outcomes.

use crate::bitboard::BitBoardError;
use core::fmt;

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot missed all ships.
    Miss,
    /// Shot hit a ship that still has intact cells.
    ShipWounded,
    /// Shot hit the last intact cell of a ship.
    ShipDestroyed,
}

impl ShotOutcome {
    /// Hits keep the turn with the shooter; a miss passes it on.
    pub fn grants_extra_turn(self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotOutcome::Miss => write!(f, "Miss!"),
            ShotOutcome::ShipWounded => write!(f, "Ship wounded!"),
            ShotOutcome::ShipDestroyed => write!(f, "Ship destroyed!"),
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., board too large for the busy mask).
    BitBoardError(BitBoardError),
    /// Shot coordinate lies outside the grid.
    OutOfBounds,
    /// Coordinate was already shot at or lies in a revealed exclusion ring.
    AlreadyTargeted,
    /// Ship leaves the grid or touches an occupied or reserved cell.
    ShipPlacementError,
    /// Hit applied to a ship that is already destroyed.
    InvalidState,
    /// Ships can no longer be added once the game has begun.
    PlacementClosed,
    /// Random placement gave up after exhausting every restart.
    UnableToPlaceFleet,
    /// Fleet contains a ship that can never fit on the board.
    InvalidFleet { length: usize, size: usize },
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::OutOfBounds => write!(f, "Shooting out of range!"),
            BoardError::AlreadyTargeted => write!(f, "You already shot at this point"),
            BoardError::ShipPlacementError => write!(f, "Ship cannot be placed here"),
            BoardError::InvalidState => write!(f, "Hit applied to a destroyed ship"),
            BoardError::PlacementClosed => write!(f, "Ships cannot be placed after the game began"),
            BoardError::UnableToPlaceFleet => write!(f, "Unable to place fleet"),
            BoardError::InvalidFleet { length, size } => {
                write!(f, "Ship of length {} does not fit on a {}x{} board", length, size, size)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
