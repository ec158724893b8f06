//! Elemental affinities (linggen) and the five-phase restraint table

use serde::{Deserialize, Serialize};

/// A character's or monster's elemental affinity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementTag {
    Metal,
    Wood,
    Water,
    Fire,
    Earth,
    #[default]
    None,
}

impl ElementTag {
    /// The five participating phases (excludes `None`)
    pub fn phases() -> &'static [ElementTag] {
        &[
            ElementTag::Metal,
            ElementTag::Wood,
            ElementTag::Water,
            ElementTag::Fire,
            ElementTag::Earth,
        ]
    }

    pub fn is_none(&self) -> bool {
        matches!(self, ElementTag::None)
    }

    /// Parse a snake_case name; anything unrecognised is `None`
    pub fn from_name(name: &str) -> Self {
        match name {
            "metal" => ElementTag::Metal,
            "wood" => ElementTag::Wood,
            "water" => ElementTag::Water,
            "fire" => ElementTag::Fire,
            "earth" => ElementTag::Earth,
            _ => ElementTag::None,
        }
    }
}

/// The four relations one element has with the others
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestraintRule {
    /// The element this one overcomes
    pub dominates: ElementTag,
    /// The element that overcomes this one
    pub weak_to: ElementTag,
    /// The element this one feeds in the generating cycle
    pub generates: ElementTag,
    /// The element this one is checked by in the counter cycle
    pub countered_by: ElementTag,
}

impl RestraintRule {
    pub const NEUTRAL: RestraintRule = RestraintRule {
        dominates: ElementTag::None,
        weak_to: ElementTag::None,
        generates: ElementTag::None,
        countered_by: ElementTag::None,
    };

    pub const fn new(
        dominates: ElementTag,
        weak_to: ElementTag,
        generates: ElementTag,
        countered_by: ElementTag,
    ) -> Self {
        RestraintRule {
            dominates,
            weak_to,
            generates,
            countered_by,
        }
    }
}

/// One row per element; `None` is implicitly the neutral row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestraintTable {
    pub metal: RestraintRule,
    pub wood: RestraintRule,
    pub water: RestraintRule,
    pub fire: RestraintRule,
    pub earth: RestraintRule,
}

impl Default for RestraintTable {
    fn default() -> Self {
        use ElementTag::*;
        RestraintTable {
            metal: RestraintRule::new(Wood, Fire, Water, Earth),
            wood: RestraintRule::new(Earth, Metal, Fire, Water),
            water: RestraintRule::new(Fire, Earth, Wood, Metal),
            fire: RestraintRule::new(Metal, Water, Earth, Wood),
            earth: RestraintRule::new(Water, Wood, Metal, Fire),
        }
    }
}

impl RestraintTable {
    pub fn rule(&self, tag: ElementTag) -> RestraintRule {
        match tag {
            ElementTag::Metal => self.metal,
            ElementTag::Wood => self.wood,
            ElementTag::Water => self.water,
            ElementTag::Fire => self.fire,
            ElementTag::Earth => self.earth,
            ElementTag::None => RestraintRule::NEUTRAL,
        }
    }
}

/// Coefficients of the additive restraint formula and its clamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestraintWeights {
    #[serde(default = "default_main")]
    pub main: f64,
    #[serde(default = "default_sub")]
    pub sub: f64,
    #[serde(default = "default_counter")]
    pub counter: f64,
    #[serde(default = "default_min")]
    pub min: f64,
    #[serde(default = "default_max")]
    pub max: f64,
}

impl Default for RestraintWeights {
    fn default() -> Self {
        RestraintWeights {
            main: default_main(),
            sub: default_sub(),
            counter: default_counter(),
            min: default_min(),
            max: default_max(),
        }
    }
}

fn default_main() -> f64 {
    1.2
}
fn default_sub() -> f64 {
    1.1
}
fn default_counter() -> f64 {
    0.9
}
fn default_min() -> f64 {
    0.5
}
fn default_max() -> f64 {
    2.0
}
