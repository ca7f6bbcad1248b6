#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod common;
mod config;
mod coordinate;
mod game;
mod generator;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod prelude;
mod ship;
mod ui;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coordinate::Coordinate;
pub use game::*;
pub use generator::BoardGenerator;
#[cfg(feature = "std")]
pub use logging::{format_record, init_logging, log_level, LOG_ENV};
pub use player::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use ui::print_boards;
