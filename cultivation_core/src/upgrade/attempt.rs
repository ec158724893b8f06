//! The shared attempt shape: rate, cost, one draw

use super::rate::{success_rate, SuccessFormula};
use crate::config::Ruleset;
use crate::rng::RollSource;
use serde::{Deserialize, Serialize};

/// Spendable currency held by a character
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePool {
    pub spirit_stones: u64,
}

impl ResourcePool {
    pub fn new(spirit_stones: u64) -> Self {
        ResourcePool { spirit_stones }
    }

    pub fn can_afford(&self, amount: u64) -> bool {
        self.spirit_stones >= amount
    }

    /// Deduct `amount`, stopping at zero; returns what was actually taken
    ///
    /// Payability is the caller's check; an overdraft is logged, not refused.
    pub fn spend(&mut self, amount: u64) -> u64 {
        if !self.can_afford(amount) {
            tracing::warn!(
                requested = amount,
                available = self.spirit_stones,
                "spirit stone pool would go negative, clamping at zero"
            );
        }
        let taken = amount.min(self.spirit_stones);
        self.spirit_stones -= taken;
        taken
    }

    pub fn earn(&mut self, amount: u64) {
        self.spirit_stones = self.spirit_stones.saturating_add(amount);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeOutcome {
    Success,
    Failure,
}

/// Record of one probabilistic upgrade, returned for persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeAttempt {
    pub formula: SuccessFormula,
    /// Prior attempts on the same counter (strengthens, recasts)
    pub attempts_so_far: u32,
    pub material_quality_factor: f64,
    pub computed_success_rate: f64,
    pub outcome: UpgradeOutcome,
    /// Spirit stones taken from the pool
    pub cost: u64,
}

impl UpgradeAttempt {
    pub fn succeeded(&self) -> bool {
        self.outcome == UpgradeOutcome::Success
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        format!(
            "{} {} ({:.1}% chance, {} spirit stones)",
            self.formula.name(),
            if self.succeeded() { "succeeded" } else { "failed" },
            self.computed_success_rate * 100.0,
            self.cost,
        )
    }
}

/// Deduct `cost`, then draw once against the formula's rate
pub fn attempt(
    formula: SuccessFormula,
    attempts_so_far: u32,
    material_quality: f64,
    cost: u64,
    pool: &mut ResourcePool,
    rules: &Ruleset,
    rng: &mut impl RollSource,
) -> UpgradeAttempt {
    let rate = success_rate(formula, material_quality, rules);
    let spent = pool.spend(cost);
    let outcome = if rng.chance(rate) {
        UpgradeOutcome::Success
    } else {
        UpgradeOutcome::Failure
    };

    tracing::debug!(
        formula = formula.name(),
        rate,
        cost = spent,
        ?outcome,
        "upgrade attempt"
    );

    UpgradeAttempt {
        formula,
        attempts_so_far,
        material_quality_factor: material_quality,
        computed_success_rate: rate,
        outcome,
        cost: spent,
    }
}
