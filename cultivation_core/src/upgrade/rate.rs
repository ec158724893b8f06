//! Success-rate formulas shared by every probabilistic upgrade

use crate::config::Ruleset;
use crate::error::{CoreError, CoreResult};
use crate::rng::RollSource;
use crate::tables::FORGE_QUALITY_WEIGHTS;
use crate::types::TreasureQuality;
use serde::{Deserialize, Serialize};

/// Which rate curve an attempt uses, with its per-formula state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "formula", rename_all = "snake_case")]
pub enum SuccessFormula {
    /// Decays with every previous strengthen
    Strengthen { times: u32 },
    Forge { luck: f64 },
    Recast { luck: f64 },
    /// Rarer treasures awaken less often
    Awaken { quality: TreasureQuality },
}

impl SuccessFormula {
    pub fn forge() -> Self {
        SuccessFormula::Forge { luck: 1.0 }
    }

    pub fn recast() -> Self {
        SuccessFormula::Recast { luck: 1.0 }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SuccessFormula::Strengthen { .. } => "strengthen",
            SuccessFormula::Forge { .. } => "forge",
            SuccessFormula::Recast { .. } => "recast",
            SuccessFormula::Awaken { .. } => "awaken",
        }
    }
}

/// Material quality scales every rate and cost; it must be a positive number
pub fn validate_material_quality(material_quality: f64) -> CoreResult<()> {
    if material_quality.is_finite() && material_quality > 0.0 {
        Ok(())
    } else {
        Err(CoreError::invalid(format!(
            "material quality factor must be positive, got {material_quality}"
        )))
    }
}

/// Probability of success for one attempt
///
/// - strengthen: base × decay^times × mq
/// - forge / recast: base × mq × luck
/// - awaken: base × mq × tier factor
///
/// each clamped to its curve's floor and cap.
pub fn success_rate(formula: SuccessFormula, material_quality: f64, rules: &Ruleset) -> f64 {
    let curves = &rules.constants.upgrade;
    match formula {
        SuccessFormula::Strengthen { times } => curves.strengthen.evaluate(times, material_quality),
        SuccessFormula::Forge { luck } | SuccessFormula::Recast { luck } => {
            curves.forge.evaluate(0, material_quality * luck)
        }
        SuccessFormula::Awaken { quality } => {
            let tier = rules.tables.awaken_tier_factor(quality);
            curves.awaken.evaluate(0, material_quality * tier)
        }
    }
}

/// Forge quality weights after material adjustment, normalised to sum to 1
///
/// The two rarest tiers scale by `mq`, the middle tier by half the excess.
pub fn forge_quality_weights(material_quality: f64) -> [f64; 5] {
    let mut weights = FORGE_QUALITY_WEIGHTS;
    weights[2] *= 1.0 + (material_quality - 1.0) * 0.5;
    weights[3] *= material_quality;
    weights[4] *= material_quality;
    for w in weights.iter_mut() {
        *w = w.max(0.0);
    }

    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return FORGE_QUALITY_WEIGHTS;
    }
    weights.map(|w| w / total)
}

/// Draw a treasure quality with one roll over the cumulative weights
pub fn roll_forge_quality(material_quality: f64, rng: &mut impl RollSource) -> TreasureQuality {
    let weights = forge_quality_weights(material_quality);
    let roll = rng.roll();
    let mut cumulative = 0.0;
    for (quality, weight) in TreasureQuality::all().iter().zip(weights) {
        cumulative += weight;
        if roll < cumulative {
            return *quality;
        }
    }
    TreasureQuality::Legendary
}
