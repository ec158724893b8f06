//! Rune forging

use super::attempt::{attempt, ResourcePool, UpgradeAttempt};
use super::rate::{validate_material_quality, SuccessFormula};
use crate::config::Ruleset;
use crate::error::{CoreError, CoreResult};
use crate::rng::RollSource;
use crate::types::TreasureQuality;
use serde::{Deserialize, Serialize};

/// Flat spirit-stone price of a rune forge
pub const RUNE_FORGE_COST: u64 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuneStat {
    Attack,
    Defense,
    Hp,
    Speed,
}

/// An inscribed rune, socketed into a rune slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rune {
    pub name: String,
    pub quality: TreasureQuality,
    pub stat: RuneStat,
    pub value: i64,
}

impl Rune {
    pub fn new(name: impl Into<String>, quality: TreasureQuality, stat: RuneStat, value: i64) -> Self {
        Rune {
            name: name.into(),
            quality,
            stat,
            value,
        }
    }
}

/// Forge the requested rune; uses the forge success curve
pub fn forge_rune(
    requested: Rune,
    material_quality: f64,
    pool: &mut ResourcePool,
    rules: &Ruleset,
    rng: &mut impl RollSource,
) -> CoreResult<(UpgradeAttempt, Option<Rune>)> {
    validate_material_quality(material_quality)?;
    if requested.value < 0 {
        return Err(CoreError::invalid("rune value must not be negative"));
    }

    let result = attempt(
        SuccessFormula::forge(),
        0,
        material_quality,
        RUNE_FORGE_COST,
        pool,
        rules,
        rng,
    );
    let rune = result.succeeded().then_some(requested);
    Ok((result, rune))
}
