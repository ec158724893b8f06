//! Quality schedules for equipment grades, treasure tiers and pills

use crate::types::{EquipmentGrade, PillGrade, TreasureQuality};
use serde::{Deserialize, Serialize};

/// Cost/bonus multiplier per equipment or mantra grade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradeMultipliers {
    pub yellow: f64,
    pub mystic: f64,
    pub earth: f64,
    pub heaven: f64,
}

impl Default for GradeMultipliers {
    fn default() -> Self {
        GradeMultipliers {
            yellow: 1.0,
            mystic: 1.5,
            earth: 2.0,
            heaven: 3.0,
        }
    }
}

impl GradeMultipliers {
    pub fn get(&self, grade: EquipmentGrade) -> f64 {
        match grade {
            EquipmentGrade::Yellow => self.yellow,
            EquipmentGrade::Mystic => self.mystic,
            EquipmentGrade::Earth => self.earth,
            EquipmentGrade::Heaven => self.heaven,
        }
    }
}

/// Awakening difficulty per treasure tier (rarer is harder)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierFactors {
    pub common: f64,
    pub fine: f64,
    pub rare: f64,
    pub epic: f64,
    pub legendary: f64,
}

impl Default for TierFactors {
    fn default() -> Self {
        TierFactors {
            common: 1.0,
            fine: 0.9,
            rare: 0.8,
            epic: 0.6,
            legendary: 0.4,
        }
    }
}

impl TierFactors {
    pub fn get(&self, quality: TreasureQuality) -> f64 {
        match quality {
            TreasureQuality::Common => self.common,
            TreasureQuality::Fine => self.fine,
            TreasureQuality::Rare => self.rare,
            TreasureQuality::Epic => self.epic,
            TreasureQuality::Legendary => self.legendary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PillMultipliers {
    pub common: f64,
    pub superior: f64,
    pub supreme: f64,
    pub legendary: f64,
}

impl Default for PillMultipliers {
    fn default() -> Self {
        PillMultipliers {
            common: 1.0,
            superior: 1.2,
            supreme: 1.5,
            legendary: 2.0,
        }
    }
}

impl PillMultipliers {
    pub fn get(&self, grade: PillGrade) -> f64 {
        match grade {
            PillGrade::Common => self.common,
            PillGrade::Superior => self.superior,
            PillGrade::Supreme => self.supreme,
            PillGrade::Legendary => self.legendary,
        }
    }
}

/// Base weights of the forge quality roll, in ascending rarity
pub const FORGE_QUALITY_WEIGHTS: [f64; 5] = [0.60, 0.25, 0.10, 0.04, 0.01];
