//! Player actions and the flee formula

use crate::config::FleeConstants;
use serde::{Deserialize, Serialize};

/// What the player chose to do this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PlayerAction {
    Attack,
    /// Raise defense against the next incoming hit
    Defend,
    /// Ask the pet at this loadout index to use its skill
    Skill { pet: usize },
    Flee,
}

impl PlayerAction {
    pub fn name(&self) -> &'static str {
        match self {
            PlayerAction::Attack => "attack",
            PlayerAction::Defend => "defend",
            PlayerAction::Skill { .. } => "skill",
            PlayerAction::Flee => "flee",
        }
    }
}

/// clamp(base + per_speed × (actor − opponent), floor, cap)
pub fn flee_chance(actor_speed: i64, opponent_speed: i64, flee: &FleeConstants) -> f64 {
    let diff = (actor_speed - opponent_speed) as f64;
    (flee.base + flee.per_speed * diff).clamp(flee.floor, flee.cap)
}
