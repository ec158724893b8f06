//! Special abilities (shentong) that can amplify a hit

use serde::{Deserialize, Serialize};

/// Proficiency ceiling for a shentong
pub const SHENTONG_MAX_PROFICIENCY: u32 = 100;

/// What the damage resolver needs to know about an ability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialAbility {
    pub name: String,
    /// Chance to fire on a connecting hit, in [0, 1]
    pub trigger_rate: f64,
    /// At least 1.0
    pub damage_multiplier: f64,
}

impl SpecialAbility {
    pub fn new(name: impl Into<String>, trigger_rate: f64, damage_multiplier: f64) -> Self {
        SpecialAbility {
            name: name.into(),
            trigger_rate: trigger_rate.clamp(0.0, 1.0),
            damage_multiplier: damage_multiplier.max(1.0),
        }
    }
}

/// A learned shentong; its level and proficiency derive the ability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shentong {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub max_level: u32,
    pub experience: u64,
    /// 0..=100
    pub proficiency: u32,
    pub equipped: bool,
}

impl Shentong {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Shentong {
            id: id.into(),
            name: name.into(),
            level: 1,
            max_level: 10,
            experience: 0,
            proficiency: 0,
            equipped: false,
        }
    }

    /// Experience needed to leave the current level: 200 × level²
    pub fn exp_to_next_level(&self) -> u64 {
        200 * (self.level as u64).pow(2)
    }

    /// min(0.5, proficiency / 200)
    pub fn trigger_rate(&self) -> f64 {
        (self.proficiency as f64 / 200.0).min(0.5)
    }

    /// 1 + (level − 1) × 0.1
    pub fn damage_multiplier(&self) -> f64 {
        1.0 + self.level.saturating_sub(1) as f64 * 0.1
    }

    pub fn ability(&self) -> SpecialAbility {
        SpecialAbility::new(self.name.clone(), self.trigger_rate(), self.damage_multiplier())
    }

    /// The ability this shentong grants in combat; None while unequipped
    pub fn equipped_ability(&self) -> Option<SpecialAbility> {
        self.equipped.then(|| self.ability())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ability_is_clamped() {
        let ability = SpecialAbility::new("Thunder Palm", 1.5, 0.5);
        assert!((ability.trigger_rate - 1.0).abs() < f64::EPSILON);
        assert!((ability.damage_multiplier - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shentong_derived_values() {
        let mut shentong = Shentong::new("s1", "Sword Rain");
        assert_eq!(shentong.exp_to_next_level(), 200);
        assert!((shentong.damage_multiplier() - 1.0).abs() < f64::EPSILON);

        shentong.level = 4;
        shentong.proficiency = 40;
        assert_eq!(shentong.exp_to_next_level(), 3200);
        assert!((shentong.damage_multiplier() - 1.3).abs() < 1e-12);
        assert!((shentong.trigger_rate() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_trigger_rate_caps_at_half() {
        let mut shentong = Shentong::new("s1", "Sword Rain");
        shentong.proficiency = 100;
        assert!((shentong.trigger_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_only_equipped_shentong_grants_ability() {
        let mut shentong = Shentong::new("s1", "Sword Rain");
        shentong.proficiency = 40;
        assert_eq!(shentong.equipped_ability(), None);

        shentong.equipped = true;
        let ability = shentong.equipped_ability().unwrap();
        assert_eq!(ability.name, "Sword Rain");
        assert!((ability.trigger_rate - 0.2).abs() < 1e-12);
    }
}
