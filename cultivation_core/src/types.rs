//! Core types shared across the rules engine

use serde::{Deserialize, Serialize};

/// Which family of bonus source a contribution came from
///
/// The aggregator routes attack/defense through a different weather factor
/// depending on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Equipment,
    Treasure,
    Mantra,
    Meridian,
    Pet,
}

impl SourceKind {
    pub fn all() -> &'static [SourceKind] {
        &[
            SourceKind::Equipment,
            SourceKind::Treasure,
            SourceKind::Mantra,
            SourceKind::Meridian,
            SourceKind::Pet,
        ]
    }
}

/// Equipment slot family, decides which stats an upgrade raises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentKind {
    Weapon,
    Helmet,
    Armor,
    Necklace,
    Ring,
    Earring,
    Bracelet,
    Amulet,
    Boots,
    Belt,
}

impl EquipmentKind {
    pub fn is_accessory(&self) -> bool {
        matches!(
            self,
            EquipmentKind::Necklace
                | EquipmentKind::Ring
                | EquipmentKind::Earring
                | EquipmentKind::Bracelet
                | EquipmentKind::Amulet
        )
    }

    pub fn is_body(&self) -> bool {
        matches!(self, EquipmentKind::Helmet | EquipmentKind::Armor)
    }
}

/// Four-tier grade used by equipment and mantras (yellow < mystic < earth < heaven)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentGrade {
    Yellow,
    Mystic,
    Earth,
    Heaven,
}

impl EquipmentGrade {
    pub fn all() -> &'static [EquipmentGrade] {
        &[
            EquipmentGrade::Yellow,
            EquipmentGrade::Mystic,
            EquipmentGrade::Earth,
            EquipmentGrade::Heaven,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            EquipmentGrade::Yellow => "yellow",
            EquipmentGrade::Mystic => "mystic",
            EquipmentGrade::Earth => "earth",
            EquipmentGrade::Heaven => "heaven",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|g| g.name() == name)
    }
}

/// Five-tier treasure quality, from most to least common
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreasureQuality {
    Common,
    Fine,
    Rare,
    Epic,
    Legendary,
}

impl TreasureQuality {
    /// In ascending rarity, the order the forge distribution is listed in
    pub fn all() -> &'static [TreasureQuality] {
        &[
            TreasureQuality::Common,
            TreasureQuality::Fine,
            TreasureQuality::Rare,
            TreasureQuality::Epic,
            TreasureQuality::Legendary,
        ]
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Rune slots granted at this quality
    pub fn rune_slots(&self) -> u32 {
        self.index() as u32 + 1
    }
}

/// Grade of the pill consumed for an enhanced breakthrough
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PillGrade {
    #[default]
    Common,
    Superior,
    Supreme,
    Legendary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_names_roundtrip() {
        for grade in EquipmentGrade::all() {
            assert_eq!(EquipmentGrade::from_name(grade.name()), Some(*grade));
        }
        assert_eq!(EquipmentGrade::from_name("diamond"), None);
    }

    #[test]
    fn test_rune_slots_follow_quality() {
        assert_eq!(TreasureQuality::Common.rune_slots(), 1);
        assert_eq!(TreasureQuality::Legendary.rune_slots(), 5);
    }

    #[test]
    fn test_equipment_kind_families() {
        assert!(EquipmentKind::Ring.is_accessory());
        assert!(!EquipmentKind::Weapon.is_accessory());
        assert!(EquipmentKind::Helmet.is_body());
        assert!(!EquipmentKind::Boots.is_body());
    }

    #[test]
    fn test_wire_names_are_snake_case() {
        let json = serde_json::to_string(&TreasureQuality::Legendary).unwrap();
        assert_eq!(json, "\"legendary\"");
        let kind: EquipmentKind = serde_json::from_str("\"bracelet\"").unwrap();
        assert_eq!(kind, EquipmentKind::Bracelet);
    }
}
