use rand::rngs::SmallRng;
use rand::Rng;

use super::Combatant;
use crate::{board::Board, coordinate::Coordinate};

/// Automated opponent firing uniformly at random over the whole grid.
pub struct AiCombatant {
    name: &'static str,
}

impl AiCombatant {
    pub fn new() -> Self {
        Self { name: "AI" }
    }

    /// AI with a custom label, for AI-vs-AI games.
    pub fn named(name: &'static str) -> Self {
        Self { name }
    }
}

impl Default for AiCombatant {
    fn default() -> Self {
        Self::new()
    }
}

impl Combatant for AiCombatant {
    fn name(&self) -> &str {
        self.name
    }

    fn select_target(&mut self, rng: &mut SmallRng, enemy: &Board) -> anyhow::Result<Coordinate> {
        let size = enemy.size();
        if size == 0 {
            return Err(anyhow::anyhow!("cannot target an empty grid"));
        }
        Ok(Coordinate::new(
            rng.random_range(0..size),
            rng.random_range(0..size),
        ))
    }
}
