//! CharacterSheet - A character's persisted records bundled for combat

use super::{aggregate, BaseAttributes, CombatStats};
use crate::config::Ruleset;
use crate::damage::{Shentong, SpecialAbility};
use crate::error::CoreResult;
use crate::source::Loadout;
use crate::tables::WeatherCondition;
use serde::{Deserialize, Serialize};

/// Everything needed to derive a character's CombatStats
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterSheet {
    pub name: String,
    pub base: BaseAttributes,
    #[serde(default)]
    pub loadout: Loadout,
    /// The equipped special ability, if any
    #[serde(default)]
    pub ability: Option<SpecialAbility>,
}

impl CharacterSheet {
    pub fn new(name: impl Into<String>, base: BaseAttributes) -> Self {
        CharacterSheet {
            name: name.into(),
            base,
            loadout: Loadout::default(),
            ability: None,
        }
    }

    pub fn with_loadout(mut self, loadout: Loadout) -> Self {
        self.loadout = loadout;
        self
    }

    pub fn with_ability(mut self, ability: SpecialAbility) -> Self {
        self.ability = Some(ability);
        self
    }

    /// Takes the ability of the first equipped shentong, clearing it when none is equipped
    pub fn with_equipped_shentong(mut self, shentongs: &[Shentong]) -> Self {
        self.ability = shentongs.iter().find_map(Shentong::equipped_ability);
        self
    }

    pub fn combat_stats(&self, weather: WeatherCondition, rules: &Ruleset) -> CoreResult<CombatStats> {
        aggregate(&self.base, &self.loadout.sources(), weather, rules)
    }

    /// Battle power under clear weather
    pub fn battle_power(&self, rules: &Ruleset) -> CoreResult<i64> {
        Ok(self.combat_stats(WeatherCondition::Clear, rules)?.battle_power())
    }
}
