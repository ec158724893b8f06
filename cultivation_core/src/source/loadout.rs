//! Loadout - Everything a character carries into aggregation

use super::{BonusSource, Equipment, Mantra, Meridian, Pet, Treasure};
use serde::{Deserialize, Serialize};

/// All bonus sources owned by one character
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Loadout {
    pub equipment: Vec<Equipment>,
    pub treasures: Vec<Treasure>,
    pub mantras: Vec<Mantra>,
    pub meridians: Vec<Meridian>,
    pub pets: Vec<Pet>,
}

impl Loadout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every source as a trait object, contributing or not
    pub fn sources(&self) -> Vec<&dyn BonusSource> {
        let mut sources: Vec<&dyn BonusSource> = Vec::new();
        sources.extend(self.equipment.iter().map(|s| s as &dyn BonusSource));
        sources.extend(self.treasures.iter().map(|s| s as &dyn BonusSource));
        sources.extend(self.mantras.iter().map(|s| s as &dyn BonusSource));
        sources.extend(self.meridians.iter().map(|s| s as &dyn BonusSource));
        sources.extend(self.pets.iter().map(|s| s as &dyn BonusSource));
        sources
    }

    pub fn pet(&self, index: usize) -> Option<&Pet> {
        self.pets.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.equipment.is_empty()
            && self.treasures.is_empty()
            && self.mantras.is_empty()
            && self.meridians.is_empty()
            && self.pets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EquipmentGrade, EquipmentKind, TreasureQuality};

    #[test]
    fn test_sources_include_everything() {
        let mut loadout = Loadout::new();
        assert!(loadout.is_empty());

        loadout.equipment.push(Equipment::new(
            "w",
            "Sword",
            EquipmentKind::Weapon,
            EquipmentGrade::Yellow,
        ));
        loadout
            .treasures
            .push(Treasure::new("t", "Mirror", TreasureQuality::Common));
        loadout.pets.push(Pet::new("p", "Crane"));

        let ids: Vec<&str> = loadout.sources().iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["w", "t", "p"]);
    }
}
