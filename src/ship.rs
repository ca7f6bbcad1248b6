//! Ship definitions: placement geometry and damage tracking.

use core::fmt;

use crate::common::BoardError;
use crate::coordinate::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Cells advance along the row (column index grows).
    Horizontal,
    /// Cells advance down the column (row index grows).
    Vertical,
}

/// A straight run of `length` cells starting at the bow.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    bow: Coordinate,
    length: usize,
    orientation: Orientation,
    integrity: usize,
}

impl Ship {
    /// Build a ship at `bow`. Bounds are checked by the board on placement.
    pub fn new(bow: Coordinate, length: usize, orientation: Orientation) -> Self {
        Ship {
            bow,
            length,
            orientation,
            integrity: length,
        }
    }

    /// Cells covered by the ship, in order from the bow.
    ///
    /// Stops short rather than wrapping when a cell would lie past
    /// `usize::MAX`; the first cell of such a ship is already off any board.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.length).map_while(move |i| match self.orientation {
            Orientation::Horizontal => self
                .bow
                .col
                .checked_add(i)
                .map(|col| Coordinate::new(self.bow.row, col)),
            Orientation::Vertical => self
                .bow
                .row
                .checked_add(i)
                .map(|row| Coordinate::new(row, self.bow.col)),
        })
    }

    /// Whether `coord` is one of the ship's cells.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.occupied_cells().any(|cell| cell == coord)
    }

    /// Remove one point of integrity.
    pub fn apply_hit(&mut self) -> Result<(), BoardError> {
        if self.integrity == 0 {
            return Err(BoardError::InvalidState);
        }
        self.integrity -= 1;
        Ok(())
    }

    pub fn is_destroyed(&self) -> bool {
        self.integrity == 0
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells not yet hit.
    pub fn integrity(&self) -> usize {
        self.integrity
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ bow: ({}, {}), length: {}, orientation: {:?}, integrity: {} }}",
            self.bow.row, self.bow.col, self.length, self.orientation, self.integrity,
        )
    }
}
