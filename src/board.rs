//! Game board state: grid cells, placed ships and the busy mask.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, ShotOutcome};
use crate::config::BusyBits;
use crate::coordinate::Coordinate;
use crate::ship::Ship;

type BB = BitBoard<BusyBits>;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Empty,
    Occupied,
    Hit,
    Miss,
    /// Revealed dead zone around a destroyed ship.
    Excluded,
}

/// One side's board.
///
/// During setup the busy mask holds every cell taken by a ship or its
/// one-cell ring, so ships never touch, not even diagonally. [`Board::begin`]
/// clears it; from then on it holds shot cells and the rings revealed around
/// destroyed ships.
#[derive(Clone)]
pub struct Board {
    size: usize,
    hidden: bool,
    grid: Vec<Cell>,
    ships: Vec<Ship>,
    busy: BB,
    ships_remaining: usize,
    started: bool,
}

impl Board {
    /// Create an empty `size`×`size` board.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Ok(Board {
            size,
            hidden: false,
            grid: vec![Cell::Empty; size * size],
            ships: Vec::new(),
            busy: BB::try_new(size)?,
            ships_remaining: 0,
            started: false,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether occupied cells are masked when rendered.
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Placed ships, destroyed ones included.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Ships with integrity left.
    pub fn ships_remaining(&self) -> usize {
        self.ships_remaining
    }

    pub fn all_destroyed(&self) -> bool {
        self.ships_remaining == 0
    }

    /// Whether placement is frozen.
    pub fn started(&self) -> bool {
        self.started
    }

    pub fn is_out_of_bounds(&self, coord: Coordinate) -> bool {
        coord.row >= self.size || coord.col >= self.size
    }

    /// Whether `coord` is reserved. Out-of-bounds cells are never busy.
    pub fn is_busy(&self, coord: Coordinate) -> bool {
        self.busy.get(coord.row, coord.col).unwrap_or(false)
    }

    /// Busy cells in row-major order.
    pub fn busy_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.busy.iter_set_bits().map(Coordinate::from)
    }

    /// State of the cell at `coord`, or `None` outside the grid.
    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        if self.is_out_of_bounds(coord) {
            return None;
        }
        Some(self.grid[coord.row * self.size + coord.col])
    }

    /// Grid rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // `max(1)` keeps `chunks` happy on a zero-sized board.
        self.grid.chunks(self.size.max(1))
    }

    /// Place `ship`, reserving its cells and the ring around them.
    ///
    /// Rejected with [`BoardError::ShipPlacementError`] if any cell is off
    /// the grid or already busy; the board is left untouched in that case.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        if self.started {
            return Err(BoardError::PlacementClosed);
        }
        for cell in ship.occupied_cells() {
            if self.is_out_of_bounds(cell) || self.is_busy(cell) {
                return Err(BoardError::ShipPlacementError);
            }
        }
        for cell in ship.occupied_cells() {
            self.paint(cell, Cell::Occupied);
            self.busy.set(cell.row, cell.col)?;
        }
        self.ships.push(ship);
        self.contour(&ship, false)?;
        self.ships_remaining += 1;
        Ok(())
    }

    /// Reserve every free in-bounds neighbour of `ship`'s cells. With
    /// `visible` the reserved cells are also painted as excluded.
    pub fn contour(&mut self, ship: &Ship, visible: bool) -> Result<(), BoardError> {
        for cell in ship.occupied_cells() {
            for around in cell.neighbours() {
                if self.is_out_of_bounds(around) || self.is_busy(around) {
                    continue;
                }
                if visible {
                    self.paint(around, Cell::Excluded);
                }
                self.busy.set(around.row, around.col)?;
            }
        }
        Ok(())
    }

    /// Reveal the dead zone around a destroyed ship.
    pub fn mark_adjacency_visible(&mut self, ship: &Ship) -> Result<(), BoardError> {
        self.contour(ship, true)
    }

    /// Drop the placement reservations and freeze the fleet.
    pub fn begin(&mut self) {
        self.busy.clear_all();
        self.started = true;
    }

    /// Resolve a shot at `coord`.
    pub fn shot(&mut self, coord: Coordinate) -> Result<ShotOutcome, BoardError> {
        if self.is_out_of_bounds(coord) {
            return Err(BoardError::OutOfBounds);
        }
        if self.is_busy(coord) {
            return Err(BoardError::AlreadyTargeted);
        }
        self.busy.set(coord.row, coord.col)?;

        let struck = self
            .ships
            .iter()
            .position(|ship| !ship.is_destroyed() && ship.contains(coord));
        let Some(index) = struck else {
            self.paint(coord, Cell::Miss);
            return Ok(ShotOutcome::Miss);
        };

        self.ships[index].apply_hit()?;
        self.paint(coord, Cell::Hit);
        let ship = self.ships[index];
        if ship.is_destroyed() {
            self.ships_remaining -= 1;
            self.mark_adjacency_visible(&ship)?;
            log::debug!("ship {:?} destroyed, {} left", ship, self.ships_remaining);
            Ok(ShotOutcome::ShipDestroyed)
        } else {
            Ok(ShotOutcome::ShipWounded)
        }
    }

    fn paint(&mut self, coord: Coordinate, cell: Cell) {
        self.grid[coord.row * self.size + coord.col] = cell;
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  hidden: {},\n  ships_remaining: {},\n  busy: {:?},\n  ships: {:?}\n}}",
            self.size, self.hidden, self.ships_remaining, self.busy, self.ships
        )
    }
}
