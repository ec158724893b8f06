//! MonsterProfile - The opponent side of a combat session

use crate::config::CombatConstants;
use crate::damage::SpecialAbility;
use crate::stats::CombatStats;
use crate::tables::ElementTag;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterProfile {
    pub name: String,
    pub level: u32,
    pub hp: i64,
    pub attack: i64,
    pub defense: i64,
    pub speed: i64,
    #[serde(default)]
    pub element: ElementTag,
    #[serde(default)]
    pub exp_reward: u64,
    #[serde(default)]
    pub spirit_stone_reward: u64,
    /// Used by the special action; without one a generic strike is used
    #[serde(default)]
    pub ability: Option<SpecialAbility>,
}

impl MonsterProfile {
    pub fn new(
        name: impl Into<String>,
        level: u32,
        hp: i64,
        attack: i64,
        defense: i64,
        speed: i64,
    ) -> Self {
        MonsterProfile {
            name: name.into(),
            level,
            hp,
            attack,
            defense,
            speed,
            element: ElementTag::None,
            exp_reward: 0,
            spirit_stone_reward: 0,
            ability: None,
        }
    }

    pub fn with_element(mut self, element: ElementTag) -> Self {
        self.element = element;
        self
    }

    pub fn with_rewards(mut self, experience: u64, spirit_stones: u64) -> Self {
        self.exp_reward = experience;
        self.spirit_stone_reward = spirit_stones;
        self
    }

    pub fn with_ability(mut self, ability: SpecialAbility) -> Self {
        self.ability = Some(ability);
        self
    }

    /// Monsters take no weather scaling and share the configured base rates
    pub fn combat_stats(&self, constants: &CombatConstants) -> CombatStats {
        let rates = &constants.monster_rates;
        CombatStats {
            total_attack: self.attack,
            total_defense: self.defense,
            total_hp: self.hp,
            total_speed: self.speed,
            crit_rate: rates.crit_rate,
            dodge_rate: rates.dodge_rate,
            hit_rate: rates.hit_rate,
            crit_damage: rates.crit_damage,
            penetration_rate: rates.penetration_rate,
            element: self.element,
        }
    }

    /// The ability used by the special action
    pub fn special_ability(&self, constants: &CombatConstants) -> SpecialAbility {
        match &self.ability {
            Some(ability) => ability.clone(),
            None => SpecialAbility::new("special strike", 1.0, constants.monster_special_multiplier),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monster_uses_fixed_rates() {
        let constants = CombatConstants::default();
        let wolf = MonsterProfile::new("Grey Wolf", 3, 80, 12, 4, 9).with_element(ElementTag::Wood);
        let stats = wolf.combat_stats(&constants);

        assert_eq!(stats.total_attack, 12);
        assert_eq!(stats.total_hp, 80);
        assert!((stats.hit_rate - 0.9).abs() < f64::EPSILON);
        assert!((stats.crit_damage - 1.5).abs() < f64::EPSILON);
        assert_eq!(stats.element, ElementTag::Wood);
    }

    #[test]
    fn test_default_special_ability() {
        let constants = CombatConstants::default();
        let wolf = MonsterProfile::new("Grey Wolf", 3, 80, 12, 4, 9);
        let special = wolf.special_ability(&constants);
        assert!((special.trigger_rate - 1.0).abs() < f64::EPSILON);
        assert!((special.damage_multiplier - 1.5).abs() < f64::EPSILON);

        let own = SpecialAbility::new("Howl", 0.5, 2.0);
        let wolf = wolf.with_ability(own.clone());
        assert_eq!(wolf.special_ability(&constants), own);
    }
}
