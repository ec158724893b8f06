//! BonusSource - Trait and implementations for stat providers

mod equipment;
mod loadout;
mod mantra;
mod meridian;
mod pet;
mod treasure;

pub use equipment::Equipment;
pub use loadout::Loadout;
pub use mantra::Mantra;
pub use meridian::{Acupoint, Meridian, MeridianKind, MeridianStat};
pub use pet::Pet;
pub use treasure::Treasure;

use crate::stats::BonusAccumulator;
use crate::types::SourceKind;
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Additive stat contribution carried by one source
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bonus {
    pub attack: i64,
    pub defense: i64,
    pub hp: i64,
    pub speed: i64,
    pub crit_rate: f64,
    pub dodge_rate: f64,
    pub hit_rate: f64,
    /// Added to 1.0 when folded into the crit multiplier
    pub crit_damage: f64,
    pub penetration_rate: f64,
}

impl Bonus {
    pub fn flat(attack: i64, defense: i64, hp: i64, speed: i64) -> Self {
        Bonus {
            attack,
            defense,
            hp,
            speed,
            ..Default::default()
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Bonus::default()
    }
}

impl AddAssign for Bonus {
    fn add_assign(&mut self, other: Bonus) {
        self.attack += other.attack;
        self.defense += other.defense;
        self.hp += other.hp;
        self.speed += other.speed;
        self.crit_rate += other.crit_rate;
        self.dodge_rate += other.dodge_rate;
        self.hit_rate += other.hit_rate;
        self.crit_damage += other.crit_damage;
        self.penetration_rate += other.penetration_rate;
    }
}

/// Trait for anything that contributes stats to a character
pub trait BonusSource: Send + Sync {
    /// Unique identifier for this source
    fn id(&self) -> &str;

    /// Which family the bonus belongs to; decides its weather factor
    fn kind(&self) -> SourceKind;

    /// Whether the source counts right now (equipped, open, ...)
    fn contributes(&self) -> bool {
        true
    }

    /// The source's current contribution
    fn bonus(&self) -> Bonus;

    /// Apply this source's bonus to the accumulator
    fn apply(&self, stats: &mut BonusAccumulator) {
        if self.contributes() {
            stats.add(self.kind(), self.bonus());
        }
    }
}
