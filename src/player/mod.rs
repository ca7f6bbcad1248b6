//! Combatant trait and implementations
//!
//! This module defines the Combatant trait and provides concrete implementations:
//! - AiCombatant: uniform random targeting
//! - HumanCombatant: interactive console player

use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{BoardError, ShotOutcome},
    coordinate::Coordinate,
};

/// Interface implemented by the two sides of a game.
///
/// A Combatant is responsible for:
/// - Choosing a target on the opposing board
/// - Reacting to rejected targets and resolved shots
pub trait Combatant {
    /// Label used in turn announcements.
    fn name(&self) -> &str;

    /// Choose the next coordinate to fire at. `enemy` is the board being
    /// targeted; implementations only read its size.
    fn select_target(&mut self, rng: &mut SmallRng, enemy: &Board) -> anyhow::Result<Coordinate>;

    /// Inform the combatant that its target was rejected.
    fn report_violation(&mut self, _target: Coordinate, _err: &BoardError) {}

    /// Inform the combatant of the result of its shot.
    fn handle_outcome(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}

    /// Fire at `enemy` until a shot resolves.
    ///
    /// Out-of-range and repeated targets are reported and a new target is
    /// selected within the same turn. Any other board error is returned.
    fn take_turn(
        &mut self,
        rng: &mut SmallRng,
        enemy: &mut Board,
    ) -> anyhow::Result<(Coordinate, ShotOutcome)> {
        loop {
            let target = self.select_target(rng, enemy)?;
            match enemy.shot(target) {
                Ok(outcome) => {
                    self.handle_outcome(target, outcome);
                    return Ok((target, outcome));
                }
                Err(err @ (BoardError::OutOfBounds | BoardError::AlreadyTargeted)) => {
                    log::debug!("{} retargets after {:?} at {:?}", self.name(), err, target);
                    self.report_violation(target, &err);
                }
                Err(err) => return Err(anyhow::anyhow!(err)),
            }
        }
    }
}

pub mod ai;
pub use ai::AiCombatant;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::{parse_coord, HumanCombatant, InputError};
