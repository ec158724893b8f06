//! Configuration loading from TOML files

mod constants;
mod realms;

pub use constants::{
    CombatConstants, FleeConstants, GameConstants, MonsterRates, RateCurve, UpgradeConstants,
};
pub use realms::{default_realms, load_realm_table, parse_realm_table};

use crate::progression::RealmTable;
use crate::tables::RuleTables;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_toml(&content)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Everything the engine reads but never writes: lookup tables, tunable
/// constants and the realm ladder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ruleset {
    #[serde(default)]
    pub tables: RuleTables,
    #[serde(default)]
    pub constants: GameConstants,
    #[serde(default = "default_realms")]
    pub realms: RealmTable,
}

impl Default for Ruleset {
    fn default() -> Self {
        Ruleset {
            tables: RuleTables::default(),
            constants: GameConstants::default(),
            realms: default_realms(),
        }
    }
}

impl Ruleset {
    /// Parse a ruleset; omitted sections keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let ruleset: Ruleset = parse_toml(content)?;
        ruleset.validate()?;
        Ok(ruleset)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.realms.validate().map_err(ConfigError::ValidationError)?;
        let weights = &self.tables.restraint_weights;
        if weights.min > weights.max {
            return Err(ConfigError::ValidationError(format!(
                "restraint clamp min {} exceeds max {}",
                weights.min, weights.max
            )));
        }
        let combat = &self.constants.combat;
        if !(0.0..=1.0).contains(&combat.dodge_cap) {
            return Err(ConfigError::ValidationError(format!(
                "dodge cap {} outside [0, 1]",
                combat.dodge_cap
            )));
        }
        if combat.min_hit_damage < 1 {
            return Err(ConfigError::ValidationError(
                "minimum hit damage must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::WeatherCondition;

    #[test]
    fn test_default_ruleset_is_valid() {
        let ruleset = Ruleset::default();
        assert!(ruleset.validate().is_ok());
        assert_eq!(ruleset.realms.len(), 22);
    }

    #[test]
    fn test_ruleset_from_partial_toml() {
        let toml = r#"
[constants.combat]
dodge_cap = 0.6

[tables.weather.storm]
base = 1.5
treasure = 1.0
technique = 1.0
restraint = 1.0
"#;
        let ruleset = Ruleset::from_toml_str(toml).unwrap();
        assert!((ruleset.constants.combat.dodge_cap - 0.6).abs() < f64::EPSILON);
        let storm = ruleset.tables.weather_factors(WeatherCondition::Storm);
        assert!((storm.base - 1.5).abs() < f64::EPSILON);
        assert_eq!(ruleset.realms.len(), 22);
    }

    #[test]
    fn test_ruleset_rejects_bad_constants() {
        let toml = r#"
[constants.combat]
min_hit_damage = 0
"#;
        let result = Ruleset::from_toml_str(toml);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result = Ruleset::from_toml_str("[constants.combat");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
