//! Equipment level upgrades and strengthening

use super::attempt::{attempt, ResourcePool, UpgradeAttempt};
use super::rate::{validate_material_quality, SuccessFormula};
use crate::config::Ruleset;
use crate::error::{CoreError, CoreResult};
use crate::rng::RollSource;
use crate::source::{Bonus, Equipment};
use crate::types::EquipmentKind;
use serde::{Deserialize, Serialize};

/// Result of a deterministic level upgrade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentLevelUp {
    pub new_level: u32,
    pub experience_cost: u64,
    pub spirit_stone_cost: u64,
    pub bonus_gained: Bonus,
}

/// Raise an item one level for spirit stones
///
/// Experience cost floor(100 × level × m) is invested into the item; the
/// pool pays half of it. Gains depend on the slot family.
pub fn upgrade_equipment_level(
    equipment: &mut Equipment,
    pool: &mut ResourcePool,
    rules: &Ruleset,
) -> CoreResult<EquipmentLevelUp> {
    if equipment.level >= equipment.max_level {
        return Err(CoreError::refused(
            "upgrade_equipment",
            format!("{} is already at max level {}", equipment.name, equipment.max_level),
        ));
    }

    let m = rules.tables.grade_multiplier(equipment.grade);
    let experience_cost = (100.0 * equipment.level as f64 * m).floor() as u64;
    let spirit_stone_cost = (experience_cost as f64 * 0.5).floor() as u64;

    let mut gained = Bonus::default();
    match equipment.kind {
        EquipmentKind::Weapon => gained.attack = (5.0 * m).floor() as i64,
        kind if kind.is_body() => {
            gained.defense = (3.0 * m).floor() as i64;
            gained.hp = (10.0 * m).floor() as i64;
        }
        kind if kind.is_accessory() => {
            gained.crit_rate = 0.005 * m;
            gained.dodge_rate = 0.005 * m;
        }
        _ => gained.attack = (2.0 * m).floor() as i64,
    }

    pool.spend(spirit_stone_cost);
    equipment.level += 1;
    equipment.experience += experience_cost;
    equipment.bonus += gained;

    tracing::debug!(item = %equipment.id, level = equipment.level, "equipment level upgrade");

    Ok(EquipmentLevelUp {
        new_level: equipment.level,
        experience_cost,
        spirit_stone_cost,
        bonus_gained: gained,
    })
}

/// floor(100 × (level + 1) × m × (1 + times × 0.1))
pub fn strengthen_cost(equipment: &Equipment, rules: &Ruleset) -> u64 {
    let m = rules.tables.grade_multiplier(equipment.grade);
    (100.0
        * (equipment.level + 1) as f64
        * m
        * (1.0 + equipment.strengthen_times as f64 * 0.1))
        .floor() as u64
}

/// Attempt to strengthen an item
///
/// The attempt counter advances on success and failure alike, so each
/// try costs more and succeeds less often.
pub fn strengthen_equipment(
    equipment: &mut Equipment,
    material_quality: f64,
    pool: &mut ResourcePool,
    rules: &Ruleset,
    rng: &mut impl RollSource,
) -> CoreResult<UpgradeAttempt> {
    validate_material_quality(material_quality)?;
    let cap = rules.constants.upgrade.strengthen_cap;
    if equipment.strengthen_times >= cap {
        return Err(CoreError::refused(
            "strengthen",
            format!("{} has reached the strengthen limit of {}", equipment.name, cap),
        ));
    }

    let times = equipment.strengthen_times;
    let cost = strengthen_cost(equipment, rules);
    let result = attempt(
        SuccessFormula::Strengthen { times },
        times,
        material_quality,
        cost,
        pool,
        rules,
        rng,
    );

    if result.succeeded() {
        let m = rules.tables.grade_multiplier(equipment.grade);
        let s = ((5 + equipment.level) as f64 * m * material_quality).floor() as i64;
        match equipment.kind {
            EquipmentKind::Weapon => equipment.bonus.attack += s,
            kind if kind.is_body() => {
                equipment.bonus.defense += s / 2;
                equipment.bonus.hp += s;
            }
            _ => equipment.bonus.attack += s / 2,
        }
    }
    equipment.strengthen_times += 1;

    Ok(result)
}
