//! CombatStats - Effective stats for one combat step

use crate::tables::ElementTag;
use serde::{Deserialize, Serialize};

/// A derived, read-only snapshot; recomputed rather than mutated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatStats {
    pub total_attack: i64,
    pub total_defense: i64,
    pub total_hp: i64,
    pub total_speed: i64,
    pub crit_rate: f64,
    pub dodge_rate: f64,
    pub hit_rate: f64,
    pub crit_damage: f64,
    pub penetration_rate: f64,
    pub element: ElementTag,
}

impl CombatStats {
    /// floor(attack + 0.6 × defense + 0.2 × hp)
    pub fn battle_power(&self) -> i64 {
        let power = self.total_attack as f64
            + self.total_defense as f64 * 0.6
            + self.total_hp as f64 * 0.2;
        power.floor() as i64
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        format!(
            "ATK {} DEF {} HP {} SPD {} | crit {:.1}% x{:.2} dodge {:.1}% hit {:.1}%",
            self.total_attack,
            self.total_defense,
            self.total_hp,
            self.total_speed,
            self.crit_rate * 100.0,
            self.crit_damage,
            self.dodge_rate * 100.0,
            self.hit_rate * 100.0,
        )
    }
}
