//! Treasure forging, recasting, awakening and level upgrades

use super::attempt::{attempt, ResourcePool, UpgradeAttempt};
use super::rate::{roll_forge_quality, success_rate, validate_material_quality, SuccessFormula};
use crate::config::Ruleset;
use crate::error::CoreResult;
use crate::rng::RollSource;
use crate::source::{Bonus, Treasure};
use crate::types::TreasureQuality;
use serde::{Deserialize, Serialize};

/// Skills an awakened treasure can manifest
pub const AWAKEN_SKILLS: [&str; 6] = [
    "Protective Qi",
    "Spring Renewal",
    "Armor Breaker",
    "Blood Drain",
    "Wind and Thunder",
    "Heaven's Vault",
];

/// Inclusive stat ranges for a freshly rolled treasure
struct StatRanges {
    attack: (i64, i64),
    defense: (i64, i64),
    hp: (i64, i64),
}

fn stat_ranges(quality: TreasureQuality) -> StatRanges {
    match quality {
        TreasureQuality::Common => StatRanges {
            attack: (5, 15),
            defense: (0, 5),
            hp: (20, 60),
        },
        TreasureQuality::Fine => StatRanges {
            attack: (15, 35),
            defense: (5, 10),
            hp: (60, 150),
        },
        TreasureQuality::Rare => StatRanges {
            attack: (35, 70),
            defense: (10, 20),
            hp: (150, 350),
        },
        TreasureQuality::Epic => StatRanges {
            attack: (70, 140),
            defense: (20, 40),
            hp: (350, 800),
        },
        TreasureQuality::Legendary => StatRanges {
            attack: (140, 300),
            defense: (40, 80),
            hp: (800, 2000),
        },
    }
}

/// Roll attack, defense and hp for a quality (three draws, in that order)
pub fn roll_treasure_stats(quality: TreasureQuality, rng: &mut impl RollSource) -> Bonus {
    let ranges = stat_ranges(quality);
    let attack = rng.range_inclusive(ranges.attack.0, ranges.attack.1);
    let defense = rng.range_inclusive(ranges.defense.0, ranges.defense.1);
    let hp = rng.range_inclusive(ranges.hp.0, ranges.hp.1);
    Bonus::flat(attack, defense, hp, 0)
}

/// Outcome of a forge: the attempt and, on success, the new treasure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForgeResult {
    pub attempt: UpgradeAttempt,
    pub treasure: Option<Treasure>,
}

/// Forge a new treasure; the cost floor(800 × mq) is paid either way
pub fn forge_treasure(
    id: impl Into<String>,
    name: impl Into<String>,
    material_quality: f64,
    pool: &mut ResourcePool,
    rules: &Ruleset,
    rng: &mut impl RollSource,
) -> CoreResult<ForgeResult> {
    validate_material_quality(material_quality)?;
    let cost = (800.0 * material_quality).floor() as u64;
    let result = attempt(
        SuccessFormula::forge(),
        0,
        material_quality,
        cost,
        pool,
        rules,
        rng,
    );

    let treasure = if result.succeeded() {
        let quality = roll_forge_quality(material_quality, rng);
        let bonus = roll_treasure_stats(quality, rng);
        tracing::debug!(?quality, attack = bonus.attack, "treasure forged");
        Some(Treasure::new(id, name, quality).with_bonus(bonus))
    } else {
        None
    };

    Ok(ForgeResult {
        attempt: result,
        treasure,
    })
}

fn recast_cost(treasure: &Treasure, material_quality: f64) -> u64 {
    (1200.0 * (1.0 + treasure.recast_times as f64 * 0.5) * material_quality).floor() as u64
}

fn awaken_cost(material_quality: f64) -> u64 {
    (1500.0 * material_quality).floor() as u64
}

/// Re-roll a treasure's stats at its current quality
///
/// The recast counter advances on every attempt and raises the next cost.
pub fn recast_treasure(
    treasure: &mut Treasure,
    material_quality: f64,
    pool: &mut ResourcePool,
    rules: &Ruleset,
    rng: &mut impl RollSource,
) -> CoreResult<UpgradeAttempt> {
    validate_material_quality(material_quality)?;
    let cost = recast_cost(treasure, material_quality);
    let result = attempt(
        SuccessFormula::recast(),
        treasure.recast_times,
        material_quality,
        cost,
        pool,
        rules,
        rng,
    );

    treasure.recast_times += 1;
    if result.succeeded() {
        let rolled = roll_treasure_stats(treasure.quality, rng);
        treasure.bonus.attack = rolled.attack;
        treasure.bonus.defense = rolled.defense;
        treasure.bonus.hp = rolled.hp;
        treasure.rune_slots = treasure.quality.rune_slots();
    }

    Ok(result)
}

/// Awaken a treasure, drawing one special skill on success
pub fn awaken_treasure(
    treasure: &mut Treasure,
    material_quality: f64,
    pool: &mut ResourcePool,
    rules: &Ruleset,
    rng: &mut impl RollSource,
) -> CoreResult<UpgradeAttempt> {
    validate_material_quality(material_quality)?;
    let result = attempt(
        SuccessFormula::Awaken {
            quality: treasure.quality,
        },
        0,
        material_quality,
        awaken_cost(material_quality),
        pool,
        rules,
        rng,
    );

    if result.succeeded() {
        treasure.awakened = true;
        let skill = AWAKEN_SKILLS[rng.pick(AWAKEN_SKILLS.len())];
        treasure.special_skill = Some(skill.to_string());
    }

    Ok(result)
}

/// Rates and costs for the next awaken and recast, without rolling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreasureEstimate {
    pub awaken_rate: f64,
    pub recast_rate: f64,
    pub awaken_cost: u64,
    pub recast_cost: u64,
    pub recast_times: u32,
}

pub fn estimate_treasure(
    treasure: &Treasure,
    material_quality: f64,
    rules: &Ruleset,
) -> CoreResult<TreasureEstimate> {
    validate_material_quality(material_quality)?;
    Ok(TreasureEstimate {
        awaken_rate: success_rate(
            SuccessFormula::Awaken {
                quality: treasure.quality,
            },
            material_quality,
            rules,
        ),
        recast_rate: success_rate(SuccessFormula::recast(), material_quality, rules),
        awaken_cost: awaken_cost(material_quality),
        recast_cost: recast_cost(treasure, material_quality),
        recast_times: treasure.recast_times,
    })
}

/// Raise a treasure one level for 150 × (level + 1) spirit stones; +10 attack
pub fn upgrade_treasure_level(treasure: &mut Treasure, pool: &mut ResourcePool) -> u64 {
    let cost = 150 * (treasure.level as u64 + 1);
    pool.spend(cost);
    treasure.level += 1;
    treasure.bonus.attack += 10;
    cost
}
