//! Aggregation - Folds base attributes and bonus sources into CombatStats

use super::{BaseAttributes, CombatStats};
use crate::config::Ruleset;
use crate::error::CoreResult;
use crate::source::{Bonus, BonusSource};
use crate::tables::WeatherCondition;
use crate::types::SourceKind;

/// Collects bonuses per source family before they are weighted
#[derive(Debug, Clone, Default)]
pub struct BonusAccumulator {
    pub equipment: Bonus,
    pub treasure: Bonus,
    pub mantra: Bonus,
    pub meridian: Bonus,
    pub pet: Bonus,
}

impl BonusAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: SourceKind, bonus: Bonus) {
        *self.slot_mut(kind) += bonus;
    }

    pub fn get(&self, kind: SourceKind) -> Bonus {
        match kind {
            SourceKind::Equipment => self.equipment,
            SourceKind::Treasure => self.treasure,
            SourceKind::Mantra => self.mantra,
            SourceKind::Meridian => self.meridian,
            SourceKind::Pet => self.pet,
        }
    }

    fn slot_mut(&mut self, kind: SourceKind) -> &mut Bonus {
        match kind {
            SourceKind::Equipment => &mut self.equipment,
            SourceKind::Treasure => &mut self.treasure,
            SourceKind::Mantra => &mut self.mantra,
            SourceKind::Meridian => &mut self.meridian,
            SourceKind::Pet => &mut self.pet,
        }
    }

    /// Sum of one field over every family
    fn total(&self, field: impl Fn(&Bonus) -> f64) -> f64 {
        SourceKind::all().iter().map(|k| field(&self.get(*k))).sum()
    }
}

/// Compute the effective combat snapshot for a weather condition
///
/// Attack and defense weight each family by its weather factor:
/// base-routed families (own stats, equipment, meridians, pets) use
/// `base`, treasures use `treasure`, mantras use `technique`. HP and speed
/// are plain sums. Rates are clamped and integer totals truncated.
pub fn aggregate(
    base: &BaseAttributes,
    sources: &[&dyn BonusSource],
    weather: WeatherCondition,
    rules: &Ruleset,
) -> CoreResult<CombatStats> {
    base.validate()?;

    let mut acc = BonusAccumulator::new();
    for source in sources {
        source.apply(&mut acc);
    }

    let factors = rules.tables.weather_factors(weather);
    let eq = acc.equipment;
    let tr = acc.treasure;
    let mt = acc.mantra;
    let mer = acc.meridian;
    let pet = acc.pet;

    let total_attack = (base.attack + eq.attack + mer.attack + pet.attack) as f64 * factors.base
        + tr.attack as f64 * factors.treasure
        + mt.attack as f64 * factors.technique;
    let total_defense = (base.defense + eq.defense + mer.defense + pet.defense) as f64
        * factors.base
        + tr.defense as f64 * factors.treasure
        + mt.defense as f64 * factors.technique;
    let total_hp = base.hp + acc.total(|b| b.hp as f64) as i64;
    let total_speed = base.speed + acc.total(|b| b.speed as f64) as i64;

    let crit_rate = (base.crit_rate + acc.total(|b| b.crit_rate)).clamp(0.0, 1.0);
    let dodge_rate =
        (base.dodge_rate + acc.total(|b| b.dodge_rate)).clamp(0.0, rules.constants.combat.dodge_cap);
    let hit_rate = (base.hit_rate + acc.total(|b| b.hit_rate)).clamp(0.0, 1.0);
    let penetration_rate =
        (base.penetration_rate + acc.total(|b| b.penetration_rate)).clamp(0.0, 1.0);

    // Only equipment and treasures scale crit damage, each by (1 + its summed bonus)
    let crit_damage = base.crit_damage * (1.0 + eq.crit_damage) * (1.0 + tr.crit_damage);

    Ok(CombatStats {
        total_attack: total_attack.trunc() as i64,
        total_defense: total_defense.trunc() as i64,
        total_hp,
        total_speed,
        crit_rate,
        dodge_rate,
        hit_rate,
        crit_damage,
        penetration_rate,
        element: base.element,
    })
}
