//! Static rule tables: elemental restraint, weather and quality schedules
//!
//! A [`RuleTables`] value is built once (default or loaded from TOML) and
//! handed to the aggregator and resolvers. Lookups never fail: anything
//! unrecognised resolves to a neutral value so bad data cannot abort a
//! combat resolution.

mod element;
mod quality;
mod weather;

pub use element::{ElementTag, RestraintRule, RestraintTable, RestraintWeights};
pub use quality::{GradeMultipliers, PillMultipliers, TierFactors, FORGE_QUALITY_WEIGHTS};
pub use weather::{WeatherCondition, WeatherFactors, WeatherTable};

use crate::types::{EquipmentGrade, PillGrade, TreasureQuality};
use serde::{Deserialize, Serialize};

/// Every lookup table the engine consults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleTables {
    pub restraints: RestraintTable,
    pub restraint_weights: RestraintWeights,
    pub weather: WeatherTable,
    pub grades: GradeMultipliers,
    pub awaken_tiers: TierFactors,
    pub pills: PillMultipliers,
}

impl RuleTables {
    pub fn restraint_rule(&self, tag: ElementTag) -> RestraintRule {
        self.restraints.rule(tag)
    }

    pub fn weather_factors(&self, condition: WeatherCondition) -> WeatherFactors {
        self.weather.factors(condition)
    }

    /// Multiplier for a grade given by name; unknown names are neutral
    pub fn quality_multiplier(&self, name: &str) -> f64 {
        match EquipmentGrade::from_name(name) {
            Some(grade) => self.grades.get(grade),
            None => {
                tracing::warn!(quality = name, "unknown quality grade, using neutral multiplier");
                1.0
            }
        }
    }

    pub fn grade_multiplier(&self, grade: EquipmentGrade) -> f64 {
        self.grades.get(grade)
    }

    pub fn awaken_tier_factor(&self, quality: TreasureQuality) -> f64 {
        self.awaken_tiers.get(quality)
    }

    pub fn pill_multiplier(&self, grade: PillGrade) -> f64 {
        self.pills.get(grade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_multiplier_by_name() {
        let tables = RuleTables::default();
        assert!((tables.quality_multiplier("heaven") - 3.0).abs() < f64::EPSILON);
        assert!((tables.quality_multiplier("mystic") - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_quality_fails_closed() {
        let tables = RuleTables::default();
        assert!((tables.quality_multiplier("celestial") - 1.0).abs() < f64::EPSILON);
        assert!((tables.quality_multiplier("") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let toml = r#"
[weather.rain]
base = 0.5
treasure = 0.5
technique = 2.0
restraint = 1.0
"#;
        let tables: RuleTables = toml::from_str(toml).unwrap();
        let rain = tables.weather_factors(WeatherCondition::Rain);
        assert!((rain.technique - 2.0).abs() < f64::EPSILON);
        // Untouched rows keep their defaults
        let storm = tables.weather_factors(WeatherCondition::Storm);
        assert!((storm.base - 1.1).abs() < f64::EPSILON);
        assert_eq!(tables.restraints, RestraintTable::default());
    }
}
