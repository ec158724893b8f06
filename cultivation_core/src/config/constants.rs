//! Game constants configuration

use serde::{Deserialize, Serialize};

/// Tunable game constants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameConstants {
    #[serde(default)]
    pub combat: CombatConstants,
    #[serde(default)]
    pub upgrade: UpgradeConstants,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatConstants {
    /// Upper bound on aggregated dodge rate so every attack keeps a hit chance
    #[serde(default = "default_dodge_cap")]
    pub dodge_cap: f64,
    /// Smallest damage a connecting hit can deal
    #[serde(default = "default_min_hit_damage")]
    pub min_hit_damage: i64,
    /// Rates every monster fights with
    #[serde(default)]
    pub monster_rates: MonsterRates,
    /// Probability a monster uses a plain attack rather than its special action
    #[serde(default = "default_monster_attack_weight")]
    pub monster_attack_weight: f64,
    /// Damage multiplier of a monster's special action when it has no ability of its own
    #[serde(default = "default_monster_special_multiplier")]
    pub monster_special_multiplier: f64,
    #[serde(default)]
    pub flee: FleeConstants,
    /// Share of total defense added by the defend action
    #[serde(default = "default_defend_ratio")]
    pub defend_ratio: f64,
    /// Share of total attack dealt by a triggered pet skill
    #[serde(default = "default_pet_skill_ratio")]
    pub pet_skill_ratio: f64,
}

impl Default for CombatConstants {
    fn default() -> Self {
        CombatConstants {
            dodge_cap: default_dodge_cap(),
            min_hit_damage: default_min_hit_damage(),
            monster_rates: MonsterRates::default(),
            monster_attack_weight: default_monster_attack_weight(),
            monster_special_multiplier: default_monster_special_multiplier(),
            flee: FleeConstants::default(),
            defend_ratio: default_defend_ratio(),
            pet_skill_ratio: default_pet_skill_ratio(),
        }
    }
}

fn default_dodge_cap() -> f64 {
    0.8
}
fn default_min_hit_damage() -> i64 {
    1
}
fn default_monster_attack_weight() -> f64 {
    0.8
}
fn default_monster_special_multiplier() -> f64 {
    1.5
}
fn default_defend_ratio() -> f64 {
    0.5
}
fn default_pet_skill_ratio() -> f64 {
    0.8
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonsterRates {
    pub crit_rate: f64,
    pub dodge_rate: f64,
    pub hit_rate: f64,
    pub crit_damage: f64,
    pub penetration_rate: f64,
}

impl Default for MonsterRates {
    fn default() -> Self {
        MonsterRates {
            crit_rate: 0.05,
            dodge_rate: 0.05,
            hit_rate: 0.9,
            crit_damage: 1.5,
            penetration_rate: 0.0,
        }
    }
}

/// chance = clamp(base + per_speed × (actor_speed − opponent_speed), floor, cap)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleeConstants {
    pub base: f64,
    pub per_speed: f64,
    pub floor: f64,
    pub cap: f64,
}

impl Default for FleeConstants {
    fn default() -> Self {
        FleeConstants {
            base: 0.5,
            per_speed: 0.01,
            floor: 0.1,
            cap: 0.8,
        }
    }
}

/// rate = clamp(base × decay^times × factors, floor, cap)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateCurve {
    pub base: f64,
    #[serde(default = "default_decay")]
    pub decay: f64,
    pub floor: f64,
    pub cap: f64,
}

fn default_decay() -> f64 {
    1.0
}

impl RateCurve {
    pub const fn new(base: f64, decay: f64, floor: f64, cap: f64) -> Self {
        RateCurve {
            base,
            decay,
            floor,
            cap,
        }
    }

    pub fn evaluate(&self, times: u32, factor: f64) -> f64 {
        let raw = self.base * self.decay.powi(times as i32) * factor;
        raw.clamp(self.floor, self.cap)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeConstants {
    #[serde(default = "default_strengthen_curve")]
    pub strengthen: RateCurve,
    #[serde(default = "default_forge_curve")]
    pub forge: RateCurve,
    #[serde(default = "default_awaken_curve")]
    pub awaken: RateCurve,
    /// Strengthen attempts allowed per item, successful or not
    #[serde(default = "default_strengthen_cap")]
    pub strengthen_cap: u32,
}

impl Default for UpgradeConstants {
    fn default() -> Self {
        UpgradeConstants {
            strengthen: default_strengthen_curve(),
            forge: default_forge_curve(),
            awaken: default_awaken_curve(),
            strengthen_cap: default_strengthen_cap(),
        }
    }
}

fn default_strengthen_curve() -> RateCurve {
    RateCurve::new(0.9, 0.9, 0.05, 0.95)
}
fn default_forge_curve() -> RateCurve {
    RateCurve::new(0.6, 1.0, 0.01, 0.95)
}
fn default_awaken_curve() -> RateCurve {
    RateCurve::new(0.25, 1.0, 0.01, 0.95)
}
fn default_strengthen_cap() -> u32 {
    20
}
