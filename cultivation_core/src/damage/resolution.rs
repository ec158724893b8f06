//! Damage resolution - One attack from one snapshot against another

use super::restraint::restraint_multiplier;
use super::SpecialAbility;
use crate::config::Ruleset;
use crate::rng::RollSource;
use crate::stats::CombatStats;
use crate::tables::WeatherCondition;
use serde::{Deserialize, Serialize};

/// Result of resolving a single attack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageOutcome {
    /// Final damage dealt; 0 only on a miss
    pub damage: i64,
    pub hit: bool,
    pub critical: bool,
    pub ability_triggered: bool,
    /// Restraint multiplier used (1.0 on a miss)
    pub element_multiplier: f64,
    /// Damage before defense was subtracted
    pub raw_damage: f64,
    /// Defense subtracted after penetration
    pub mitigated: f64,
}

impl DamageOutcome {
    fn miss() -> Self {
        DamageOutcome {
            damage: 0,
            hit: false,
            critical: false,
            ability_triggered: false,
            element_multiplier: 1.0,
            raw_damage: 0.0,
            mitigated: 0.0,
        }
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        if !self.hit {
            return "Missed".to_string();
        }

        let mut parts = vec![format!("{} damage", self.damage)];
        if self.critical {
            parts.push("critical".to_string());
        }
        if self.ability_triggered {
            parts.push("ability".to_string());
        }
        if (self.element_multiplier - 1.0).abs() > f64::EPSILON {
            parts.push(format!("element x{:.2}", self.element_multiplier));
        }
        parts.join(", ")
    }
}

/// Resolve an attack using the thread-local generator
pub fn resolve_damage(
    attacker: &CombatStats,
    defender: &CombatStats,
    weather: WeatherCondition,
    ability: Option<&SpecialAbility>,
    rules: &Ruleset,
) -> DamageOutcome {
    let mut rng = rand::thread_rng();
    resolve_damage_with_rng(attacker, defender, weather, ability, rules, &mut rng)
}

/// Resolve an attack with a provided roll source (for deterministic testing)
///
/// Draws happen in a fixed order: crit, then hit, then the ability roll
/// (only on a hit and only when an ability is supplied). A miss returns
/// immediately without further draws.
pub fn resolve_damage_with_rng(
    attacker: &CombatStats,
    defender: &CombatStats,
    weather: WeatherCondition,
    ability: Option<&SpecialAbility>,
    rules: &Ruleset,
    rng: &mut impl RollSource,
) -> DamageOutcome {
    let mut damage = attacker.total_attack as f64;

    let critical = rng.chance(attacker.crit_rate);
    if critical {
        damage *= attacker.crit_damage;
    }

    let hit_chance = attacker.hit_rate * (1.0 - defender.dodge_rate);
    if !rng.chance(hit_chance) {
        tracing::debug!(hit_chance, "attack missed");
        return DamageOutcome::miss();
    }

    let mut ability_triggered = false;
    if let Some(ability) = ability {
        if rng.chance(ability.trigger_rate) {
            ability_triggered = true;
            damage *= ability.damage_multiplier;
        }
    }

    let element_multiplier =
        restraint_multiplier(attacker.element, defender.element, weather, &rules.tables);
    damage *= element_multiplier;

    let mitigated = defender.total_defense as f64 * (1.0 - attacker.penetration_rate);
    let dealt = ((damage - mitigated).trunc() as i64).max(rules.constants.combat.min_hit_damage);

    tracing::debug!(
        damage = dealt,
        critical,
        ability_triggered,
        element_multiplier,
        "attack resolved"
    );

    DamageOutcome {
        damage: dealt,
        hit: true,
        critical,
        ability_triggered,
        element_multiplier,
        raw_damage: damage,
        mitigated,
    }
}
