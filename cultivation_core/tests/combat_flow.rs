//! Full combat sessions driven by a seeded generator

use cultivation_core::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn hero() -> CharacterSheet {
    let loadout = Loadout {
        equipment: vec![Equipment::new(
            "w1",
            "Green Steel Sword",
            EquipmentKind::Weapon,
            EquipmentGrade::Mystic,
        )
        .with_bonus(Bonus::flat(8, 0, 0, 0))],
        treasures: vec![
            Treasure::new("t1", "Jade Bell", TreasureQuality::Fine).with_bonus(Bonus::flat(0, 4, 60, 0)),
        ],
        ..Default::default()
    };
    CharacterSheet::new("Lin", BaseAttributes::default().with_element(ElementTag::Fire))
        .with_loadout(loadout)
        .with_ability(SpecialAbility::new("Flame Palm", 0.2, 1.5))
}

fn dungeon() -> Vec<MonsterProfile> {
    vec![
        MonsterProfile::new("Cave Rat", 1, 30, 6, 2, 4).with_rewards(40, 10),
        MonsterProfile::new("Iron Beetle", 2, 50, 9, 4, 6)
            .with_element(ElementTag::Metal)
            .with_rewards(80, 20),
    ]
}

fn run(seed: u64) -> (CombatSession, Vec<TurnReport>) {
    let rules = Ruleset::default();
    let sheet = hero();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut session = CombatSession::new(&sheet, dungeon(), &rules, &mut rng).unwrap();

    let mut reports = Vec::new();
    while session.is_active() && reports.len() < 500 {
        reports.push(
            session
                .take_turn(&sheet, PlayerAction::Attack, &rules, &mut rng)
                .unwrap(),
        );
    }
    (session, reports)
}

#[test]
fn test_dungeon_runs_to_victory() {
    let (session, reports) = run(42);

    assert_eq!(session.state, CombatState::Victory);
    assert_eq!(session.wave, 1);
    assert!(reports.iter().any(|r| r.wave_advanced));
    assert!(session.character_hp > 0);

    let mut total = CombatRewards::default();
    for rewards in reports.iter().filter_map(|r| r.rewards) {
        total += rewards;
    }
    assert_eq!(total.spirit_stones, 30);
}

#[test]
fn test_same_seed_same_fight() {
    let (first, first_reports) = run(7);
    let (second, second_reports) = run(7);

    assert_eq!(first, second);
    assert_eq!(first_reports, second_reports);
}

#[test]
fn test_turn_numbers_and_hp_are_consistent() {
    let (_, reports) = run(1234);

    for (index, report) in reports.iter().enumerate() {
        assert_eq!(report.turn as usize, index + 1);
        assert!(report.character_hp >= 0);
        assert!(report.monster_hp >= 0);
        assert!(report.damage_dealt >= 0);
        assert!(!report.log.is_empty());
    }
}

#[test]
fn test_rewards_feed_progression() {
    let (_, reports) = run(99);
    let mut progression = ProgressionState::default();
    let mut pool = ResourcePool::default();

    for rewards in reports.iter().filter_map(|r| r.rewards) {
        rewards.apply(&mut progression, &mut pool);
    }

    assert!(progression.experience > 0);
    assert_eq!(pool.spirit_stones, 30);
    assert_eq!(progression.level, 1);
}

#[test]
fn test_fleeing_a_slow_monster() {
    let rules = Ruleset::default();
    let sheet = hero();
    let snail = MonsterProfile::new("Stone Snail", 5, 5000, 1, 500, 0);
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut session =
        CombatSession::with_weather(&sheet, vec![snail], WeatherCondition::Clear, &rules).unwrap();

    let mut turns = 0;
    while session.is_active() && turns < 100 {
        session
            .take_turn(&sheet, PlayerAction::Flee, &rules, &mut rng)
            .unwrap();
        turns += 1;
    }

    assert_eq!(session.state, CombatState::Fled);
    assert!(session.character_hp > 0);
}
