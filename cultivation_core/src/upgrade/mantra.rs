//! Mantra upgrades and cultivation

use super::attempt::ResourcePool;
use crate::config::Ruleset;
use crate::error::{CoreError, CoreResult};
use crate::progression::ProgressionState;
use crate::source::{Bonus, Mantra};
use crate::tables::WeatherCondition;
use serde::{Deserialize, Serialize};

/// Base proficiency experience per unit of cultivation time
const CULTIVATE_BASE_EXP: f64 = 10.0;

/// clamp(comprehension / 50, 0.5, 3.0)
pub fn comprehension_factor(comprehension: u32) -> f64 {
    (comprehension as f64 / 50.0).clamp(0.5, 3.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MantraCost {
    pub experience: u64,
    pub spirit_stones: u64,
}

/// Price of the next mantra level, scaled by grade, comprehension and the
/// weather's technique factor
pub fn mantra_upgrade_cost(
    mantra: &Mantra,
    comprehension: u32,
    weather: WeatherCondition,
    rules: &Ruleset,
) -> MantraCost {
    let scale = mantra.level as f64
        * rules.tables.grade_multiplier(mantra.grade)
        * comprehension_factor(comprehension)
        * rules.tables.weather_factors(weather).technique;
    MantraCost {
        experience: (100.0 * scale).floor() as u64,
        spirit_stones: (50.0 * scale).floor() as u64,
    }
}

/// Stats a mantra grants at a level: lb = level × grade multiplier
fn mantra_bonus(level: u32, multiplier: f64) -> Bonus {
    let lb = level as f64 * multiplier;
    Bonus {
        attack: (lb * 2.0).floor() as i64,
        defense: (lb * 1.5).floor() as i64,
        hp: (lb * 10.0).floor() as i64,
        speed: (lb * 0.5).floor() as i64,
        crit_rate: lb * 0.005,
        ..Default::default()
    }
}

/// Spend character experience and spirit stones to raise a mantra one level
pub fn upgrade_mantra(
    mantra: &mut Mantra,
    progression: &mut ProgressionState,
    pool: &mut ResourcePool,
    weather: WeatherCondition,
    rules: &Ruleset,
) -> CoreResult<MantraCost> {
    if mantra.level >= mantra.max_level {
        return Err(CoreError::refused(
            "upgrade_mantra",
            format!("{} is already at max level {}", mantra.name, mantra.max_level),
        ));
    }

    let cost = mantra_upgrade_cost(mantra, progression.comprehension, weather, rules);
    if progression.experience < cost.experience {
        return Err(CoreError::refused_needing(
            "upgrade_mantra",
            "not enough experience",
            cost.experience,
        ));
    }

    progression.experience -= cost.experience;
    pool.spend(cost.spirit_stones);
    mantra.level += 1;
    mantra.experience += cost.experience;
    mantra.bonus = mantra_bonus(mantra.level, rules.tables.grade_multiplier(mantra.grade));

    tracing::debug!(mantra = %mantra.id, level = mantra.level, "mantra upgraded");
    Ok(cost)
}

/// Result of a cultivation session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MantraCultivation {
    pub exp_gained: u64,
    /// A mastery step was reached this session
    pub proficiency_raised: bool,
}

/// Practise a mantra for `time_spent` units
///
/// Gains floor(10 × comprehension factor × technique factor × time) proficiency
/// experience. Filling the bar raises proficiency by 10 (max 100), empties the
/// bar and makes the next one half again as long.
pub fn cultivate_mantra(
    mantra: &mut Mantra,
    comprehension: u32,
    weather: WeatherCondition,
    time_spent: u32,
    rules: &Ruleset,
) -> MantraCultivation {
    let technique = rules.tables.weather_factors(weather).technique;
    let gained = (CULTIVATE_BASE_EXP
        * comprehension_factor(comprehension)
        * technique
        * time_spent as f64)
        .floor() as u64;

    mantra.proficiency_exp = mantra.proficiency_exp.saturating_add(gained);
    let mut raised = false;
    if mantra.proficiency_exp >= mantra.proficiency_max && mantra.proficiency < 100 {
        mantra.proficiency = (mantra.proficiency + 10).min(100);
        mantra.proficiency_exp = 0;
        mantra.proficiency_max = (mantra.proficiency_max as f64 * 1.5).floor() as u64;
        raised = true;
    }

    MantraCultivation {
        exp_gained: gained,
        proficiency_raised: raised,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EquipmentGrade;

    #[test]
    fn test_comprehension_factor_clamps() {
        assert!((comprehension_factor(0) - 0.5).abs() < f64::EPSILON);
        assert!((comprehension_factor(50) - 1.0).abs() < f64::EPSILON);
        assert!((comprehension_factor(1000) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_upgrade_cost() {
        let rules = Ruleset::default();
        let mantra = Mantra::new("m", "Sutra", EquipmentGrade::Earth);
        // 1 × 2.0 × 1.0 × 1.0
        let cost = mantra_upgrade_cost(&mantra, 50, WeatherCondition::Clear, &rules);
        assert_eq!(cost.experience, 200);
        assert_eq!(cost.spirit_stones, 100);

        // Rain technique factor 1.2
        let cost = mantra_upgrade_cost(&mantra, 50, WeatherCondition::Rain, &rules);
        assert_eq!(cost.experience, 240);
    }

    #[test]
    fn test_upgrade_mantra_sets_bonus() {
        let rules = Ruleset::default();
        let mut mantra = Mantra::new("m", "Sutra", EquipmentGrade::Yellow);
        let mut progression = ProgressionState {
            experience: 1000,
            comprehension: 50,
            ..Default::default()
        };
        let mut pool = ResourcePool::new(1000);

        let cost = upgrade_mantra(&mut mantra, &mut progression, &mut pool, WeatherCondition::Clear, &rules)
            .unwrap();
        assert_eq!(cost.experience, 100);
        assert_eq!(progression.experience, 900);
        assert_eq!(pool.spirit_stones, 950);
        assert_eq!(mantra.level, 2);
        // lb = 2
        assert_eq!(mantra.bonus.attack, 4);
        assert_eq!(mantra.bonus.defense, 3);
        assert_eq!(mantra.bonus.hp, 20);
        assert_eq!(mantra.bonus.speed, 1);
        assert!((mantra.bonus.crit_rate - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_upgrade_refused_without_experience() {
        let rules = Ruleset::default();
        let mut mantra = Mantra::new("m", "Sutra", EquipmentGrade::Yellow);
        let mut progression = ProgressionState {
            experience: 10,
            comprehension: 50,
            ..Default::default()
        };
        let mut pool = ResourcePool::new(1000);

        let err = upgrade_mantra(&mut mantra, &mut progression, &mut pool, WeatherCondition::Clear, &rules)
            .unwrap_err();
        assert_eq!(err.needed(), Some(100));
        assert_eq!(mantra.level, 1);
        assert_eq!(pool.spirit_stones, 1000);
    }

    #[test]
    fn test_cultivation_raises_proficiency() {
        let rules = Ruleset::default();
        let mut mantra = Mantra::new("m", "Sutra", EquipmentGrade::Yellow);

        let session = cultivate_mantra(&mut mantra, 100, WeatherCondition::Clear, 3, &rules);
        // 10 × 2.0 × 1.0 × 3
        assert_eq!(session.exp_gained, 60);
        assert!(!session.proficiency_raised);

        let session = cultivate_mantra(&mut mantra, 100, WeatherCondition::Clear, 3, &rules);
        assert!(session.proficiency_raised);
        assert_eq!(mantra.proficiency, 10);
        assert_eq!(mantra.proficiency_exp, 0);
        assert_eq!(mantra.proficiency_max, 150);
    }

    #[test]
    fn test_cultivation_bar_saturates() {
        let rules = Ruleset::default();
        let mut mantra = Mantra::new("m", "Sutra", EquipmentGrade::Yellow);
        mantra.proficiency_exp = u64::MAX - 1;

        let session = cultivate_mantra(&mut mantra, 100, WeatherCondition::Clear, u32::MAX, &rules);
        assert!(session.proficiency_raised);
        assert_eq!(mantra.proficiency_exp, 0);
    }
}
