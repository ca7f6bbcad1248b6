//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiCombatant, Board, BoardError, BoardGenerator, Combatant, Coordinate, Game, GameConfig,
    GameStatus, Orientation, Ship, ShotOutcome, Side,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, print_boards, HumanCombatant};
