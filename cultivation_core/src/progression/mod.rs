//! Progression - Experience curve, level-ups and realm breakthroughs

mod breakthrough;
mod experience;
mod realm;

pub use breakthrough::{
    breakthrough, breakthrough_cost, breakthrough_success_rate, BreakthroughMethod,
    BreakthroughOutcome, BreakthroughRequest, BREAKTHROUGH_MIN_LEVEL,
};
pub use experience::{exp_required, gain_experience, LevelIncrements, ProgressionState, LEVELS_PER_STAGE};
pub use realm::{Realm, RealmTable};
