//! Realm breakthroughs
//!
//! A character at the last level of a stage must break through to reach the
//! next realm. The attempt always costs spirit stones: the full cost on
//! success, half of it on failure. A success resets the level ladder and
//! grants a one-time attribute bonus scaled by the new realm's coefficient.

use super::ProgressionState;
use crate::config::Ruleset;
use crate::error::{CoreError, CoreResult};
use crate::rng::RollSource;
use crate::stats::BaseAttributes;
use crate::tables::RuleTables;
use crate::types::PillGrade;
use crate::upgrade::ResourcePool;
use serde::{Deserialize, Serialize};

/// Lowest level from which a breakthrough may be attempted
pub const BREAKTHROUGH_MIN_LEVEL: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum BreakthroughMethod {
    Basic,
    /// Assisted by a pill and a compatible mantra
    Enhanced { pill: PillGrade, mantra_compat: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakthroughRequest {
    /// Spiritual purity in [0, 1]
    pub purity: f64,
    pub method: BreakthroughMethod,
}

impl BreakthroughRequest {
    pub fn basic(purity: f64) -> Self {
        BreakthroughRequest {
            purity,
            method: BreakthroughMethod::Basic,
        }
    }

    pub fn enhanced(purity: f64, pill: PillGrade, mantra_compat: f64) -> Self {
        BreakthroughRequest {
            purity,
            method: BreakthroughMethod::Enhanced {
                pill,
                mantra_compat,
            },
        }
    }

    fn validate(&self) -> CoreResult<()> {
        if !(0.0..=1.0).contains(&self.purity) {
            return Err(CoreError::invalid(format!(
                "purity must be within [0, 1], got {}",
                self.purity
            )));
        }
        if let BreakthroughMethod::Enhanced { mantra_compat, .. } = self.method {
            if !mantra_compat.is_finite() || mantra_compat < 0.0 {
                return Err(CoreError::invalid(format!(
                    "mantra compatibility must be a non-negative number, got {mantra_compat}"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakthroughOutcome {
    pub success: bool,
    pub success_rate: f64,
    /// Full price of the attempt
    pub cost: u64,
    /// What was actually taken from the pool
    pub spirit_stones_spent: u64,
    pub from_stage: u32,
    /// Equal to `from_stage` on failure
    pub to_stage: u32,
    /// One-time bonus unit `b`: hp += 10b, attack/defense += 2b, speed += b
    pub attribute_bonus: i64,
    pub comprehension_gain: u32,
}

/// Chance that a breakthrough from `stage` succeeds
pub fn breakthrough_success_rate(
    stage: u32,
    request: &BreakthroughRequest,
    tables: &RuleTables,
) -> f64 {
    match request.method {
        BreakthroughMethod::Basic => (request.purity * 0.9 + 0.1).clamp(0.1, 0.8),
        BreakthroughMethod::Enhanced {
            pill,
            mantra_compat,
        } => {
            let pill = tables.pill_multiplier(pill);
            let rate = request.purity * pill * mantra_compat * (1.0 - stage as f64 * 0.05);
            rate.clamp(0.0, 0.95)
        }
    }
}

/// Spirit stones a breakthrough from `stage` costs
pub fn breakthrough_cost(stage: u32, request: &BreakthroughRequest) -> u64 {
    let base = 1000 * (stage as u64 + 1);
    match request.method {
        BreakthroughMethod::Basic => base,
        BreakthroughMethod::Enhanced { .. } => {
            (base as f64 * (2.0 - request.purity)).floor() as u64
        }
    }
}

/// Attempt to advance to the next realm
pub fn breakthrough(
    state: &mut ProgressionState,
    base: &mut BaseAttributes,
    pool: &mut ResourcePool,
    request: &BreakthroughRequest,
    rules: &Ruleset,
    rng: &mut impl RollSource,
) -> CoreResult<BreakthroughOutcome> {
    if state.level < BREAKTHROUGH_MIN_LEVEL {
        return Err(CoreError::refused_needing(
            "breakthrough",
            format!("level {} is below the breakthrough level", state.level),
            BREAKTHROUGH_MIN_LEVEL as u64,
        ));
    }
    request.validate()?;
    let next = rules
        .realms
        .next(state.stage)
        .ok_or_else(|| CoreError::refused("breakthrough", "highest realm reached"))?;
    let (next_stage, next_coefficient) = (next.stage, next.coefficient);

    let from_stage = state.stage;
    let success_rate = breakthrough_success_rate(from_stage, request, &rules.tables);
    let cost = breakthrough_cost(from_stage, request);
    let success = rng.chance(success_rate);

    if !success {
        let spirit_stones_spent = pool.spend(cost / 2);
        tracing::debug!(from_stage, success_rate, spirit_stones_spent, "breakthrough failed");
        return Ok(BreakthroughOutcome {
            success,
            success_rate,
            cost,
            spirit_stones_spent,
            from_stage,
            to_stage: from_stage,
            attribute_bonus: 0,
            comprehension_gain: 0,
        });
    }

    let spirit_stones_spent = pool.spend(cost);
    let (bonus, comprehension_gain) = match request.method {
        BreakthroughMethod::Basic => ((next_coefficient * 50.0).floor() as i64, 0),
        BreakthroughMethod::Enhanced { pill, .. } => (
            (next_coefficient * 50.0 * request.purity * rules.tables.pill_multiplier(pill)).floor()
                as i64,
            (request.purity * 10.0).floor() as u32,
        ),
    };

    state.stage = next_stage;
    state.level = 1;
    state.experience = 0;
    state.comprehension += comprehension_gain;
    base.hp += 10 * bonus;
    base.attack += 2 * bonus;
    base.defense += 2 * bonus;
    base.speed += bonus;

    tracing::debug!(
        from_stage,
        to_stage = next_stage,
        success_rate,
        bonus,
        "breakthrough succeeded"
    );

    Ok(BreakthroughOutcome {
        success,
        success_rate,
        cost,
        spirit_stones_spent,
        from_stage,
        to_stage: next_stage,
        attribute_bonus: bonus,
        comprehension_gain,
    })
}
