//! Elemental restraint multiplier

use crate::tables::{ElementTag, RuleTables, WeatherCondition};

/// Multiplier applied to an attack from `attacker` against `defender`
///
/// Sums three relations, scales by the weather's restraint factor and
/// clamps to the configured range. Either side being `None` is neutral.
pub fn restraint_multiplier(
    attacker: ElementTag,
    defender: ElementTag,
    weather: WeatherCondition,
    tables: &RuleTables,
) -> f64 {
    if attacker.is_none() || defender.is_none() {
        return 1.0;
    }

    let weights = &tables.restraint_weights;
    let attacker_rule = tables.restraint_rule(attacker);
    let defender_rule = tables.restraint_rule(defender);

    let main = if attacker_rule.dominates == defender {
        weights.main
    } else {
        1.0
    };
    let sub = if defender_rule.weak_to == attacker {
        weights.sub
    } else {
        1.0
    };
    let counter = if attacker_rule.weak_to == defender {
        weights.counter
    } else {
        1.0
    };

    let factor = tables.weather_factors(weather).restraint;
    ((main + sub - counter) * factor).clamp(weights.min, weights.max)
}
