//! Equipment - Stats from worn gear

use super::{Bonus, BonusSource};
use crate::types::{EquipmentGrade, EquipmentKind, SourceKind};
use serde::{Deserialize, Serialize};

/// A piece of gear; only counts while equipped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: String,
    pub name: String,
    pub kind: EquipmentKind,
    pub grade: EquipmentGrade,
    pub level: u32,
    pub max_level: u32,
    /// Experience invested through level upgrades
    pub experience: u64,
    /// Strengthen attempts made, successful or not
    pub strengthen_times: u32,
    pub equipped: bool,
    pub bonus: Bonus,
}

impl Equipment {
    /// Create a level 1 piece, equipped, with the grade's level cap
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: EquipmentKind,
        grade: EquipmentGrade,
    ) -> Self {
        Equipment {
            id: id.into(),
            name: name.into(),
            kind,
            grade,
            level: 1,
            max_level: max_level_for(grade),
            experience: 0,
            strengthen_times: 0,
            equipped: true,
            bonus: Bonus::default(),
        }
    }

    pub fn with_bonus(mut self, bonus: Bonus) -> Self {
        self.bonus = bonus;
        self
    }

    pub fn unequipped(mut self) -> Self {
        self.equipped = false;
        self
    }
}

/// Level cap by grade: 10 / 20 / 30 / 40
pub fn max_level_for(grade: EquipmentGrade) -> u32 {
    match grade {
        EquipmentGrade::Yellow => 10,
        EquipmentGrade::Mystic => 20,
        EquipmentGrade::Earth => 30,
        EquipmentGrade::Heaven => 40,
    }
}

impl BonusSource for Equipment {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Equipment
    }

    fn contributes(&self) -> bool {
        self.equipped
    }

    fn bonus(&self) -> Bonus {
        self.bonus
    }
}
