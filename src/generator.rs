//! Random fleet placement with bounded retries.

use alloc::vec::Vec;
use rand::Rng;

use crate::board::Board;
use crate::common::BoardError;
use crate::config::GameConfig;
use crate::coordinate::Coordinate;
use crate::ship::{Orientation, Ship};

/// Builds fully populated boards for a fixed fleet.
///
/// Placement attempts are counted per board, across the whole fleet. Once a
/// board exceeds `max_attempts` it is thrown away and generation restarts
/// from an empty board, up to `max_restarts` times.
#[derive(Debug, Clone)]
pub struct BoardGenerator {
    size: usize,
    fleet: Vec<usize>,
    max_attempts: usize,
    max_restarts: usize,
}

impl BoardGenerator {
    /// Validate `config` and build a generator for it.
    pub fn new(config: &GameConfig) -> Result<Self, BoardError> {
        // Fails early if the busy mask cannot hold the grid.
        Board::new(config.size)?;
        if let Some(&length) = config
            .fleet
            .iter()
            .find(|&&length| length == 0 || length > config.size)
        {
            return Err(BoardError::InvalidFleet {
                length,
                size: config.size,
            });
        }
        Ok(Self {
            size: config.size,
            fleet: config.fleet.clone(),
            max_attempts: config.max_placement_attempts,
            max_restarts: config.max_board_restarts,
        })
    }

    pub fn fleet(&self) -> &[usize] {
        &self.fleet
    }

    /// Produce a board with the whole fleet placed and placement frozen.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Board, BoardError> {
        self.generate_counted(rng).map(|(board, _)| board)
    }

    /// Like [`generate`](Self::generate), also returning how many boards
    /// were abandoned on the way.
    pub fn generate_counted<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(Board, usize), BoardError> {
        for restart in 0..=self.max_restarts {
            if let Some(board) = self.try_place(rng)? {
                log::info!(
                    "generated {}x{} board with {} ships after {} restart(s)",
                    self.size,
                    self.size,
                    board.ships().len(),
                    restart
                );
                return Ok((board, restart));
            }
            log::debug!(
                "board abandoned after {} attempts (restart {})",
                self.max_attempts,
                restart + 1
            );
        }
        Err(BoardError::UnableToPlaceFleet)
    }

    /// One pass over the fleet. `Ok(None)` means the attempt budget ran out.
    fn try_place<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Option<Board>, BoardError> {
        let mut board = Board::new(self.size)?;
        let mut attempts = 0;
        for &length in &self.fleet {
            loop {
                attempts += 1;
                if attempts > self.max_attempts {
                    return Ok(None);
                }
                let ship = self.random_ship(rng, length);
                match board.add_ship(ship) {
                    Ok(()) => break,
                    Err(BoardError::ShipPlacementError) => continue,
                    Err(err) => return Err(err),
                }
            }
        }
        board.begin();
        Ok(Some(board))
    }

    fn random_ship<R: Rng + ?Sized>(&self, rng: &mut R, length: usize) -> Ship {
        let bow = Coordinate::new(
            rng.random_range(0..self.size),
            rng.random_range(0..self.size),
        );
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        Ship::new(bow, length, orientation)
    }
}
