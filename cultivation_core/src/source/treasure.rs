//! Treasure - Stats from forged treasures

use super::{Bonus, BonusSource};
use crate::tables::ElementTag;
use crate::types::{SourceKind, TreasureQuality};
use serde::{Deserialize, Serialize};

/// A forged treasure; always contributes while owned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Treasure {
    pub id: String,
    pub name: String,
    pub quality: TreasureQuality,
    pub level: u32,
    #[serde(default)]
    pub element: ElementTag,
    pub bonus: Bonus,
    pub rune_slots: u32,
    pub awakened: bool,
    pub special_skill: Option<String>,
    /// Recast attempts made, successful or not
    pub recast_times: u32,
}

impl Treasure {
    pub fn new(id: impl Into<String>, name: impl Into<String>, quality: TreasureQuality) -> Self {
        Treasure {
            id: id.into(),
            name: name.into(),
            quality,
            level: 1,
            element: ElementTag::None,
            bonus: Bonus::default(),
            rune_slots: quality.rune_slots(),
            awakened: false,
            special_skill: None,
            recast_times: 0,
        }
    }

    pub fn with_bonus(mut self, bonus: Bonus) -> Self {
        self.bonus = bonus;
        self
    }
}

impl BonusSource for Treasure {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Treasure
    }

    fn bonus(&self) -> Bonus {
        self.bonus
    }
}
