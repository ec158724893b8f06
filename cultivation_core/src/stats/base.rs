//! BaseAttributes - A character's own stats before any bonus source

use crate::error::{CoreError, CoreResult};
use crate::tables::ElementTag;
use serde::{Deserialize, Serialize};

/// Persisted per-character attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseAttributes {
    pub hp: i64,
    pub attack: i64,
    pub defense: i64,
    pub speed: i64,
    pub crit_rate: f64,
    pub dodge_rate: f64,
    pub hit_rate: f64,
    pub crit_damage: f64,
    pub penetration_rate: f64,
    /// Spiritual root, used for elemental restraint
    pub element: ElementTag,
}

impl Default for BaseAttributes {
    fn default() -> Self {
        BaseAttributes {
            hp: 100,
            attack: 10,
            defense: 10,
            speed: 10,
            crit_rate: 0.05,
            dodge_rate: 0.05,
            hit_rate: 0.95,
            crit_damage: 1.5,
            penetration_rate: 0.0,
            element: ElementTag::None,
        }
    }
}

impl BaseAttributes {
    pub fn with_element(mut self, element: ElementTag) -> Self {
        self.element = element;
        self
    }

    /// Reject attribute records that cannot produce a meaningful snapshot
    pub fn validate(&self) -> CoreResult<()> {
        if self.hp <= 0 {
            return Err(CoreError::invalid(format!("hp must be positive, got {}", self.hp)));
        }
        for (name, value) in [
            ("attack", self.attack),
            ("defense", self.defense),
            ("speed", self.speed),
        ] {
            if value < 0 {
                return Err(CoreError::invalid(format!("{name} must not be negative, got {value}")));
            }
        }
        for (name, value) in [
            ("crit_rate", self.crit_rate),
            ("dodge_rate", self.dodge_rate),
            ("hit_rate", self.hit_rate),
            ("penetration_rate", self.penetration_rate),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::invalid(format!("{name} must be a non-negative number, got {value}")));
            }
        }
        if !self.crit_damage.is_finite() || self.crit_damage < 1.0 {
            return Err(CoreError::invalid(format!(
                "crit_damage must be at least 1.0, got {}",
                self.crit_damage
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let base = BaseAttributes::default();
        assert!(base.validate().is_ok());
        assert_eq!(base.hp, 100);
        assert!((base.hit_rate - 0.95).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_positive_hp_is_invalid() {
        let base = BaseAttributes {
            hp: 0,
            ..Default::default()
        };
        assert!(matches!(base.validate(), Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn test_nan_rate_is_invalid() {
        let base = BaseAttributes {
            crit_rate: f64::NAN,
            ..Default::default()
        };
        assert!(base.validate().is_err());
    }

    #[test]
    fn test_crit_damage_below_one_is_invalid() {
        let base = BaseAttributes {
            crit_damage: 0.5,
            ..Default::default()
        };
        assert!(base.validate().is_err());
    }
}
