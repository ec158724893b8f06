//! Weather conditions and their per-channel factors

use crate::rng::RollSource;
use serde::{Deserialize, Serialize};

/// Weather held fixed for the duration of a combat session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    #[default]
    Clear,
    Rain,
    Snow,
    Fog,
    Storm,
    Scorching,
}

impl WeatherCondition {
    pub fn all() -> &'static [WeatherCondition] {
        &[
            WeatherCondition::Clear,
            WeatherCondition::Rain,
            WeatherCondition::Snow,
            WeatherCondition::Fog,
            WeatherCondition::Storm,
            WeatherCondition::Scorching,
        ]
    }

    /// Draw one of the six conditions uniformly
    pub fn sample(rng: &mut impl RollSource) -> Self {
        let all = Self::all();
        all[rng.pick(all.len())]
    }
}

/// Multipliers applied by a weather condition
///
/// `base` scales character/equipment/meridian/pet offense, `treasure` scales
/// treasure offense, `technique` scales mantra offense and `restraint`
/// scales the elemental multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherFactors {
    pub base: f64,
    pub treasure: f64,
    pub technique: f64,
    pub restraint: f64,
}

impl WeatherFactors {
    pub const NEUTRAL: WeatherFactors = WeatherFactors {
        base: 1.0,
        treasure: 1.0,
        technique: 1.0,
        restraint: 1.0,
    };

    const fn new(base: f64, treasure: f64, technique: f64, restraint: f64) -> Self {
        WeatherFactors {
            base,
            treasure,
            technique,
            restraint,
        }
    }
}

impl Default for WeatherFactors {
    fn default() -> Self {
        WeatherFactors::NEUTRAL
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherTable {
    pub clear: WeatherFactors,
    pub rain: WeatherFactors,
    pub snow: WeatherFactors,
    pub fog: WeatherFactors,
    pub storm: WeatherFactors,
    pub scorching: WeatherFactors,
}

impl Default for WeatherTable {
    fn default() -> Self {
        WeatherTable {
            clear: WeatherFactors::NEUTRAL,
            rain: WeatherFactors::new(0.9, 0.8, 1.2, 0.95),
            snow: WeatherFactors::new(0.8, 0.9, 1.1, 0.9),
            fog: WeatherFactors::new(0.95, 1.0, 0.9, 1.05),
            storm: WeatherFactors::new(1.1, 1.2, 0.8, 1.1),
            scorching: WeatherFactors::new(1.2, 1.1, 0.9, 1.0),
        }
    }
}

impl WeatherTable {
    pub fn factors(&self, condition: WeatherCondition) -> WeatherFactors {
        match condition {
            WeatherCondition::Clear => self.clear,
            WeatherCondition::Rain => self.rain,
            WeatherCondition::Snow => self.snow,
            WeatherCondition::Fog => self.fog,
            WeatherCondition::Storm => self.storm,
            WeatherCondition::Scorching => self.scorching,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRolls;

    #[test]
    fn test_clear_is_neutral() {
        let table = WeatherTable::default();
        assert_eq!(table.factors(WeatherCondition::Clear), WeatherFactors::NEUTRAL);
    }

    #[test]
    fn test_rain_favours_techniques() {
        let rain = WeatherTable::default().factors(WeatherCondition::Rain);
        assert!(rain.technique > rain.base);
        assert!(rain.treasure < rain.base);
    }

    #[test]
    fn test_sample_covers_all_conditions() {
        let mut rolls = ScriptedRolls::new([0.0, 0.2, 0.4, 0.55, 0.7, 0.95]);
        let drawn: Vec<_> = (0..6).map(|_| WeatherCondition::sample(&mut rolls)).collect();
        assert_eq!(drawn, WeatherCondition::all());
    }
}
