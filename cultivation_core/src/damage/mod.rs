//! Damage - Special abilities, elemental restraint and hit resolution

mod ability;
mod resolution;
mod restraint;

pub use ability::{Shentong, SpecialAbility, SHENTONG_MAX_PROFICIENCY};
pub use resolution::{resolve_damage, resolve_damage_with_rng, DamageOutcome};
pub use restraint::restraint_multiplier;
