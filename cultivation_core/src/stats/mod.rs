//! Stats - Base attributes, bonus aggregation and combat snapshots

mod aggregator;
mod base;
mod combat_stats;
mod sheet;

pub use aggregator::{aggregate, BonusAccumulator};
pub use base::BaseAttributes;
pub use combat_stats::CombatStats;
pub use sheet::CharacterSheet;
