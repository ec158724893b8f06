//! Realm table loading

use super::ConfigError;
use crate::progression::{Realm, RealmTable};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for realm configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealmsConfig {
    pub realms: Vec<Realm>,
}

fn into_table(config: RealmsConfig) -> Result<RealmTable, ConfigError> {
    let table = RealmTable::new(config.realms);
    table.validate().map_err(ConfigError::ValidationError)?;
    Ok(table)
}

/// Load a realm table from a TOML file
pub fn load_realm_table(path: &Path) -> Result<RealmTable, ConfigError> {
    let config: RealmsConfig = super::load_toml(path)?;
    into_table(config)
}

/// Load a realm table from a TOML string
pub fn parse_realm_table(content: &str) -> Result<RealmTable, ConfigError> {
    let config: RealmsConfig = super::parse_toml(content)?;
    into_table(config)
}

/// Get the bundled realm ladder
pub fn default_realms() -> RealmTable {
    let toml = include_str!("../../config/realms.toml");
    parse_realm_table(toml).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "bundled realm table failed to load, using built-in ladder");
        RealmTable::builtin()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_matches_builtin() {
        assert_eq!(default_realms(), RealmTable::builtin());
    }

    #[test]
    fn test_parse_realms() {
        let toml = r#"
[[realms]]
stage = 2
name = "Second"
coefficient = 1.0

[[realms]]
stage = 1
name = "First"
coefficient = 0.0
"#;

        let table = parse_realm_table(toml).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.first().map(|r| r.name.as_str()), Some("First"));
    }

    #[test]
    fn test_parse_rejects_duplicate_stage() {
        let toml = r#"
[[realms]]
stage = 1
name = "A"
coefficient = 0.0

[[realms]]
stage = 1
name = "B"
coefficient = 1.0
"#;

        assert!(matches!(
            parse_realm_table(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
