use alloc::vec::Vec;

use crate::bitboard::BitBoard;

/// Default grid dimension.
pub const BOARD_SIZE: usize = 6;
/// Default fleet: one 3-cell, two 2-cell and four 1-cell ships.
pub const FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];
/// Placement attempts allowed per board before it is abandoned.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;
/// Abandoned boards tolerated before generation gives up.
pub const MAX_BOARD_RESTARTS: usize = 10_000;

/// Storage for the busy mask; bounds the largest supported board.
pub type BusyBits = u128;

/// Largest board whose busy set fits in [`BusyBits`].
pub fn max_board_size() -> usize {
    BitBoard::<BusyBits>::max_dimension()
}

/// Tunables for board generation and the turn loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub fleet: Vec<usize>,
    pub max_placement_attempts: usize,
    pub max_board_restarts: usize,
    /// Pause between turns, for the console front end.
    pub delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: BOARD_SIZE,
            fleet: FLEET.to_vec(),
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            max_board_restarts: MAX_BOARD_RESTARTS,
            delay_ms: 0,
        }
    }
}

impl GameConfig {
    /// Total number of ship cells in the fleet.
    pub fn total_ship_cells(&self) -> usize {
        self.fleet.iter().sum()
    }
}
