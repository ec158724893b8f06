//! Upgrades - Probabilistic and deterministic improvement actions
//!
//! Every probabilistic action goes through [`attempt`]: compute the rate,
//! deduct the cost, draw once. The per-item modules only decide the cost,
//! the guard and what success changes.

mod attempt;
mod equipment;
mod mantra;
mod meridian;
mod rate;
mod rune;
mod shentong;
mod treasure;

pub use attempt::{attempt, ResourcePool, UpgradeAttempt, UpgradeOutcome};
pub use equipment::{
    strengthen_cost, strengthen_equipment, upgrade_equipment_level, EquipmentLevelUp,
};
pub use mantra::{
    comprehension_factor, cultivate_mantra, mantra_upgrade_cost, upgrade_mantra, MantraCost,
    MantraCultivation,
};
pub use meridian::{open_meridian, train_acupoint, AcupointTraining, MERIDIAN_MIN_STAGE};
pub use rate::{
    forge_quality_weights, roll_forge_quality, success_rate, validate_material_quality,
    SuccessFormula,
};
pub use rune::{forge_rune, Rune, RuneStat, RUNE_FORGE_COST};
pub use shentong::{cultivate_shentong, upgrade_shentong, ShentongUpgrade};
pub use treasure::{
    awaken_treasure, estimate_treasure, forge_treasure, recast_treasure, roll_treasure_stats,
    upgrade_treasure_level, ForgeResult, TreasureEstimate, AWAKEN_SKILLS,
};
