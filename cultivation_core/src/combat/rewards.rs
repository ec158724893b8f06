//! Rewards for defeating a monster

use super::MonsterProfile;
use crate::progression::{gain_experience, ProgressionState};
use crate::tables::{RuleTables, WeatherCondition};
use crate::upgrade::ResourcePool;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatRewards {
    pub experience: u64,
    pub spirit_stones: u64,
}

impl CombatRewards {
    /// Credit the rewards; levelling stays an explicit action
    pub fn apply(&self, progression: &mut ProgressionState, pool: &mut ResourcePool) {
        gain_experience(progression, self.experience);
        pool.earn(self.spirit_stones);
    }
}

impl std::ops::AddAssign for CombatRewards {
    fn add_assign(&mut self, other: Self) {
        self.experience += other.experience;
        self.spirit_stones += other.spirit_stones;
    }
}

/// Experience scales with the weather's base factor; spirit stones do not
pub fn rewards_for(
    monster: &MonsterProfile,
    weather: WeatherCondition,
    tables: &RuleTables,
) -> CombatRewards {
    let factor = tables.weather_factors(weather).base;
    CombatRewards {
        experience: (monster.exp_reward as f64 * factor).floor() as u64,
        spirit_stones: monster.spirit_stone_reward,
    }
}
