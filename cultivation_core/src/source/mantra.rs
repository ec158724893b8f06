//! Mantra - Stats from cultivation techniques

use super::{Bonus, BonusSource};
use crate::types::{EquipmentGrade, SourceKind};
use serde::{Deserialize, Serialize};

/// A cultivation technique; only counts while equipped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mantra {
    pub id: String,
    pub name: String,
    pub grade: EquipmentGrade,
    pub level: u32,
    pub max_level: u32,
    /// Experience invested through upgrades
    pub experience: u64,
    /// Mastery, 0..=100
    pub proficiency: u32,
    pub proficiency_exp: u64,
    /// Proficiency experience needed for the next mastery step
    pub proficiency_max: u64,
    pub equipped: bool,
    pub bonus: Bonus,
}

impl Mantra {
    pub fn new(id: impl Into<String>, name: impl Into<String>, grade: EquipmentGrade) -> Self {
        Mantra {
            id: id.into(),
            name: name.into(),
            grade,
            level: 1,
            max_level: super::equipment::max_level_for(grade),
            experience: 0,
            proficiency: 0,
            proficiency_exp: 0,
            proficiency_max: 100,
            equipped: false,
            bonus: Bonus::default(),
        }
    }

    pub fn equipped(mut self) -> Self {
        self.equipped = true;
        self
    }

    pub fn with_bonus(mut self, bonus: Bonus) -> Self {
        self.bonus = bonus;
        self
    }
}

impl BonusSource for Mantra {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Mantra
    }

    fn contributes(&self) -> bool {
        self.equipped
    }

    fn bonus(&self) -> Bonus {
        self.bonus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_mantra_is_unequipped() {
        let mantra = Mantra::new("m1", "Azure Cloud Sutra", EquipmentGrade::Mystic);
        assert!(!mantra.contributes());
        assert_eq!(mantra.max_level, 20);
        assert!(mantra.equipped().contributes());
    }
}
