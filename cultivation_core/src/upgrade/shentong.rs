//! Shentong (special ability) upgrades and cultivation

use super::attempt::ResourcePool;
use crate::damage::{Shentong, SHENTONG_MAX_PROFICIENCY};
use crate::error::{CoreError, CoreResult};
use crate::progression::ProgressionState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShentongUpgrade {
    pub new_level: u32,
    pub experience_cost: u64,
    pub spirit_stone_cost: u64,
    pub damage_multiplier: f64,
    pub trigger_rate: f64,
}

/// Raise a shentong one level: 200 × level² experience and 80 % of that in stones
pub fn upgrade_shentong(
    shentong: &mut Shentong,
    progression: &mut ProgressionState,
    pool: &mut ResourcePool,
) -> CoreResult<ShentongUpgrade> {
    if shentong.level >= shentong.max_level {
        return Err(CoreError::refused(
            "upgrade_shentong",
            format!("{} is already at max level {}", shentong.name, shentong.max_level),
        ));
    }

    let experience_cost = shentong.exp_to_next_level();
    if progression.experience < experience_cost {
        return Err(CoreError::refused_needing(
            "upgrade_shentong",
            "not enough experience",
            experience_cost,
        ));
    }
    let spirit_stone_cost = (experience_cost as f64 * 0.8).floor() as u64;

    progression.experience -= experience_cost;
    pool.spend(spirit_stone_cost);
    shentong.level += 1;
    shentong.experience += experience_cost;

    tracing::debug!(shentong = %shentong.id, level = shentong.level, "shentong upgraded");

    Ok(ShentongUpgrade {
        new_level: shentong.level,
        experience_cost,
        spirit_stone_cost,
        damage_multiplier: shentong.damage_multiplier(),
        trigger_rate: shentong.trigger_rate(),
    })
}

/// Practise a shentong; returns the proficiency actually gained
///
/// floor(5 × clamp(comprehension / 50, 0.3, 2.5) × environment × material × time),
/// capped so proficiency never passes 100.
pub fn cultivate_shentong(
    shentong: &mut Shentong,
    comprehension: u32,
    environment: f64,
    material_quality: f64,
    time_spent: u32,
) -> u32 {
    let factor = (comprehension as f64 / 50.0).clamp(0.3, 2.5);
    let total = (5.0 * factor * environment.max(0.0) * material_quality.max(0.0) * time_spent as f64)
        .floor() as u32;
    let before = shentong.proficiency;
    shentong.proficiency = before.saturating_add(total).min(SHENTONG_MAX_PROFICIENCY);
    shentong.proficiency - before
}
