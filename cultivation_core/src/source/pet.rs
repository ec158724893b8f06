//! Pet - Companion stats and its combat skill

use super::{Bonus, BonusSource};
use crate::types::SourceKind;
use serde::{Deserialize, Serialize};

/// A captured companion; always contributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub skill_name: Option<String>,
    /// Chance the skill fires when the owner calls on it
    pub skill_trigger_rate: f64,
    pub bonus: Bonus,
}

impl Pet {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Pet {
            id: id.into(),
            name: name.into(),
            level: 1,
            skill_name: None,
            skill_trigger_rate: 0.1,
            bonus: Bonus::default(),
        }
    }

    pub fn with_skill(mut self, name: impl Into<String>, trigger_rate: f64) -> Self {
        self.skill_name = Some(name.into());
        self.skill_trigger_rate = trigger_rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_bonus(mut self, bonus: Bonus) -> Self {
        self.bonus = bonus;
        self
    }

    pub fn has_skill(&self) -> bool {
        self.skill_name.is_some()
    }
}

impl BonusSource for Pet {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Pet
    }

    fn bonus(&self) -> Bonus {
        self.bonus
    }
}
