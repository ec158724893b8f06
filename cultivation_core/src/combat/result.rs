//! TurnReport - What happened during one combat turn

use super::CombatRewards;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatState {
    Active,
    Victory,
    Defeat,
    Fled,
}

impl CombatState {
    pub fn is_over(&self) -> bool {
        !matches!(self, CombatState::Active)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Actor {
    Player,
    Monster,
}

/// Record of one turn, returned for display and persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnReport {
    /// 1-based turn number
    pub turn: u32,
    /// Who acted first (the second side may not have acted at all)
    pub order: [Actor; 2],
    /// Damage dealt to the monster this turn
    pub damage_dealt: i64,
    /// Damage taken by the character this turn
    pub damage_taken: i64,
    pub character_hp: i64,
    pub monster_hp: i64,
    pub state: CombatState,
    /// Set when a monster fell this turn
    pub rewards: Option<CombatRewards>,
    /// A dungeon moved on to its next monster
    pub wave_advanced: bool,
    pub log: Vec<String>,
}

impl TurnReport {
    pub(crate) fn new(turn: u32, order: [Actor; 2]) -> Self {
        TurnReport {
            turn,
            order,
            damage_dealt: 0,
            damage_taken: 0,
            character_hp: 0,
            monster_hp: 0,
            state: CombatState::Active,
            rewards: None,
            wave_advanced: false,
            log: Vec::new(),
        }
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("turn {}", self.turn)];
        if self.damage_dealt > 0 {
            parts.push(format!("{} dealt", self.damage_dealt));
        }
        if self.damage_taken > 0 {
            parts.push(format!("{} taken", self.damage_taken));
        }
        if self.wave_advanced {
            parts.push("next wave".to_string());
        }
        match self.state {
            CombatState::Active => {}
            CombatState::Victory => parts.push("VICTORY".to_string()),
            CombatState::Defeat => parts.push("DEFEAT".to_string()),
            CombatState::Fled => parts.push("fled".to_string()),
        }
        parts.join(", ")
    }
}
