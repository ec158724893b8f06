//! cultivation_core - Combat and progression rules engine for a cultivation RPG
//!
//! This library provides:
//! - RuleTables: Elemental restraint, weather and quality lookup data
//! - Aggregation: Base attributes + bonus sources into a CombatStats snapshot
//! - Damage Resolution: Hit, crit, ability and restraint rolls between two snapshots
//! - Progression: Experience curve, level-ups and realm breakthroughs
//! - Upgrades: Strengthening, forging, recasting and awakening
//! - Combat Sessions: Turn-by-turn exchanges between a character and monsters
//!
//! Every probabilistic call takes an injected [`RollSource`] so outcomes are
//! reproducible under a seeded generator or a scripted sequence of draws.

pub mod combat;
pub mod config;
pub mod damage;
pub mod error;
pub mod prelude;
pub mod progression;
pub mod rng;
pub mod source;
pub mod stats;
pub mod tables;
pub mod types;
pub mod upgrade;

// Re-export core types for convenience
pub use combat::{CombatSession, CombatState, MonsterProfile, PlayerAction, TurnReport};
pub use config::{default_realms, GameConstants, Ruleset};
pub use damage::{resolve_damage, resolve_damage_with_rng, DamageOutcome, SpecialAbility};
pub use error::{CoreError, CoreResult};
pub use progression::{exp_required, ProgressionState, RealmTable};
pub use rng::{RollSource, ScriptedRolls};
pub use source::{BonusSource, Equipment, Loadout, Mantra, Meridian, Pet, Treasure};
pub use stats::{aggregate, BaseAttributes, CharacterSheet, CombatStats};
pub use tables::{ElementTag, RestraintRule, RuleTables, WeatherCondition, WeatherFactors};
pub use types::{EquipmentGrade, EquipmentKind, PillGrade, SourceKind, TreasureQuality};
pub use upgrade::{ResourcePool, SuccessFormula, UpgradeAttempt, UpgradeOutcome};
