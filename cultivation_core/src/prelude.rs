//! Prelude module for convenient imports
//!
//! ```rust
//! use cultivation_core::prelude::*;
//! ```

// Records and snapshots
pub use crate::stats::{aggregate, BaseAttributes, CharacterSheet, CombatStats};
pub use crate::types::{EquipmentGrade, EquipmentKind, PillGrade, SourceKind, TreasureQuality};

// Sources
pub use crate::source::{
    Acupoint, Bonus, BonusSource, Equipment, Loadout, Mantra, Meridian, MeridianKind, Pet, Treasure,
};

// Damage
pub use crate::damage::{
    resolve_damage, resolve_damage_with_rng, DamageOutcome, Shentong, SpecialAbility,
};

// Combat
pub use crate::combat::{
    CombatRewards, CombatSession, CombatState, MonsterProfile, PlayerAction, TurnReport,
};

// Progression
pub use crate::progression::{breakthrough, exp_required, BreakthroughRequest, ProgressionState, RealmTable};

// Upgrades
pub use crate::upgrade::{ResourcePool, SuccessFormula, UpgradeAttempt, UpgradeOutcome};

// Rules and randomness
pub use crate::config::{default_realms, GameConstants, Ruleset};
pub use crate::error::{CoreError, CoreResult};
pub use crate::rng::{RollSource, ScriptedRolls};
pub use crate::tables::{ElementTag, RuleTables, WeatherCondition, WeatherFactors};
