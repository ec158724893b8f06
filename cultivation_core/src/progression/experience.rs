//! Experience curve and level-ups

use super::RealmTable;
use crate::error::{CoreError, CoreResult};
use crate::stats::BaseAttributes;
use serde::{Deserialize, Serialize};

/// Levels per realm; every multiple of this needs a breakthrough to pass
pub const LEVELS_PER_STAGE: u32 = 10;

/// Experience needed to advance from `level`: floor(500 × L² × e^(0.05 × (L − 1)))
pub fn exp_required(level: u32) -> u64 {
    let l = level.max(1) as f64;
    (500.0 * l * l * (0.05 * (l - 1.0)).exp()).floor() as u64
}

/// A character's position on the cultivation ladder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionState {
    pub level: u32,
    pub experience: u64,
    /// Realm stage number (see [`RealmTable`])
    pub stage: u32,
    /// Comprehension (wuxing); scales technique costs and gains
    pub comprehension: u32,
}

impl Default for ProgressionState {
    fn default() -> Self {
        ProgressionState {
            level: 1,
            experience: 0,
            stage: 1,
            comprehension: 0,
        }
    }
}

/// Attribute gains from one level-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelIncrements {
    pub attack: i64,
    pub defense: i64,
    pub hp: i64,
    pub speed: i64,
    pub experience_spent: u64,
    pub new_level: u32,
}

impl LevelIncrements {
    /// Stat gains for a realm coefficient `c`; `experience_spent` and
    /// `new_level` are left at zero for the caller to fill in
    pub fn for_coefficient(c: f64) -> Self {
        let attack = (10.0 + 2.0 * c).floor() as i64;
        LevelIncrements {
            attack,
            defense: attack,
            hp: (100.0 + 20.0 * c).floor() as i64,
            speed: (5.0 + c).floor() as i64,
            experience_spent: 0,
            new_level: 0,
        }
    }
}

/// Add experience without levelling; levelling stays an explicit action
pub fn gain_experience(state: &mut ProgressionState, amount: u64) {
    state.experience = state.experience.saturating_add(amount);
}

impl ProgressionState {
    pub fn new(level: u32, experience: u64, stage: u32) -> Self {
        ProgressionState {
            level: level.max(1),
            experience,
            stage,
            comprehension: 0,
        }
    }

    /// The level is the last one of its stage
    pub fn at_stage_boundary(&self) -> bool {
        self.level % LEVELS_PER_STAGE == 0
    }

    pub fn exp_to_next_level(&self) -> u64 {
        exp_required(self.level)
    }

    pub fn can_level_up(&self) -> bool {
        !self.at_stage_boundary() && self.experience >= self.exp_to_next_level()
    }

    /// Spend experience to gain one level, raising `base` by the stage's increments
    ///
    /// Refused at a stage boundary and when experience is short; neither
    /// record changes on refusal.
    pub fn level_up(
        &mut self,
        base: &mut BaseAttributes,
        realms: &RealmTable,
    ) -> CoreResult<LevelIncrements> {
        if self.at_stage_boundary() {
            return Err(CoreError::refused(
                "level_up",
                format!("level {} requires a realm breakthrough", self.level),
            ));
        }
        let needed = self.exp_to_next_level();
        if self.experience < needed {
            return Err(CoreError::refused_needing(
                "level_up",
                format!("not enough experience ({} of {})", self.experience, needed),
                needed,
            ));
        }

        let coefficient = realms.coefficient(self.stage);
        let gains = LevelIncrements::for_coefficient(coefficient);

        self.experience -= needed;
        self.level += 1;
        base.attack += gains.attack;
        base.defense += gains.defense;
        base.hp += gains.hp;
        base.speed += gains.speed;

        tracing::debug!(
            level = self.level,
            stage = self.stage,
            attack = gains.attack,
            hp = gains.hp,
            "level up"
        );

        Ok(LevelIncrements {
            experience_spent: needed,
            new_level: self.level,
            ..gains
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exp_curve_values() {
        assert_eq!(exp_required(1), 500);
        assert_eq!(exp_required(10), 78415);
    }

    #[test]
    fn test_exp_curve_is_increasing() {
        for level in 1..200 {
            assert!(exp_required(level + 1) > exp_required(level));
        }
    }

    #[test]
    fn test_level_up_applies_increments() {
        let realms = RealmTable::builtin();
        // Foundation Establishment, coefficient 1.2
        let mut state = ProgressionState::new(3, 10_000, 3);
        let mut base = BaseAttributes::default();
        let needed = exp_required(3);

        let incs = state.level_up(&mut base, &realms).unwrap();
        assert_eq!(incs.attack, 12);
        assert_eq!(incs.hp, 124);
        assert_eq!(incs.speed, 6);
        assert_eq!(incs.new_level, 4);
        assert_eq!(state.experience, 10_000 - needed);
        assert_eq!(base.attack, 22);
        assert_eq!(base.hp, 224);
    }

    #[test]
    fn test_increments_for_coefficient() {
        let gains = LevelIncrements::for_coefficient(2.5);
        assert_eq!(gains.attack, 15);
        assert_eq!(gains.defense, 15);
        assert_eq!(gains.hp, 150);
        assert_eq!(gains.speed, 7);
        assert_eq!(gains.new_level, 0);
    }

    #[test]
    fn test_level_up_refused_at_boundary() {
        let realms = RealmTable::builtin();
        let mut state = ProgressionState::new(10, 10_000_000, 1);
        let mut base = BaseAttributes::default();

        let err = state.level_up(&mut base, &realms).unwrap_err();
        assert!(err.is_refusal());
        assert_eq!(state.level, 10);
        assert_eq!(state.experience, 10_000_000);
        assert_eq!(base, BaseAttributes::default());
    }

    #[test]
    fn test_level_up_refused_without_experience() {
        let realms = RealmTable::builtin();
        let mut state = ProgressionState::new(1, 499, 1);
        let mut base = BaseAttributes::default();

        let err = state.level_up(&mut base, &realms).unwrap_err();
        assert_eq!(err.needed(), Some(500));
        assert_eq!(state.experience, 499);
    }

    #[test]
    fn test_gain_experience_does_not_level() {
        let mut state = ProgressionState::default();
        gain_experience(&mut state, 5_000);
        assert_eq!(state.level, 1);
        assert_eq!(state.experience, 5_000);
        assert!(state.can_level_up());
    }
}
