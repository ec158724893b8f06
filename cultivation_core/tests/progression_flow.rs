//! A character climbing from level 1 through its first breakthrough

use cultivation_core::prelude::*;
use cultivation_core::progression::{gain_experience, LEVELS_PER_STAGE};
use cultivation_core::upgrade::{open_meridian, strengthen_equipment, train_acupoint};

#[test]
fn test_level_to_stage_boundary_then_break_through() {
    let rules = Ruleset::default();
    let mut state = ProgressionState::default();
    let mut base = BaseAttributes::default();
    let mut pool = ResourcePool::new(10_000);

    gain_experience(&mut state, 10_000_000);
    while state.level < LEVELS_PER_STAGE {
        state.level_up(&mut base, &rules.realms).unwrap();
    }

    // stage 1 has coefficient 0: +10/+10/+100/+5 per level
    assert_eq!(base.attack, 100);
    assert_eq!(base.defense, 100);
    assert_eq!(base.hp, 1000);
    assert_eq!(base.speed, 55);

    let refused = state.level_up(&mut base, &rules.realms).unwrap_err();
    assert!(refused.is_refusal());
    assert_eq!(state.level, 10);

    let mut rolls = ScriptedRolls::new([0.0]);
    let outcome = breakthrough(
        &mut state,
        &mut base,
        &mut pool,
        &BreakthroughRequest::basic(1.0),
        &rules,
        &mut rolls,
    )
    .unwrap();

    assert!(outcome.success);
    assert_eq!(state.stage, 2);
    assert_eq!(state.level, 1);
    assert_eq!(state.experience, 0);
    assert_eq!(base.hp, 1250);
    assert_eq!(pool.spirit_stones, 8000);
}

#[test]
fn test_meridians_unlock_at_third_stage() {
    let mut state = ProgressionState::new(1, 1000, 2);
    let mut pool = ResourcePool::new(10_000);
    let mut meridian =
        Meridian::new("heart", MeridianKind::Heart).with_acupoint(Acupoint::new("Shenmen"));

    let err = open_meridian(&mut meridian, &state, &mut pool).unwrap_err();
    assert_eq!(err.needed(), Some(3));

    state.stage = 3;
    open_meridian(&mut meridian, &state, &mut pool).unwrap();
    let trained = train_acupoint(&mut meridian, 0, &mut state, &mut pool).unwrap();
    assert_eq!(trained.new_level, 1);

    // heart feeds crit at 0.001 per point, two points per level
    let rules = Ruleset::default();
    let mut sheet = CharacterSheet::new("Lin", BaseAttributes::default());
    sheet.loadout.meridians.push(meridian);
    let stats = sheet.combat_stats(WeatherCondition::Clear, &rules).unwrap();
    assert!((stats.crit_rate - 0.052).abs() < 1e-9);
}

#[test]
fn test_strengthen_counts_every_attempt() {
    let rules = Ruleset::default();
    let mut sword = Equipment::new("w", "Sword", EquipmentKind::Weapon, EquipmentGrade::Yellow);
    let mut pool = ResourcePool::new(1_000_000);
    let mut rolls = ScriptedRolls::new([0.0, 0.99, 0.0]);

    let mut successes = 0;
    for _ in 0..3 {
        let attempt = strengthen_equipment(&mut sword, 1.0, &mut pool, &rules, &mut rolls).unwrap();
        if attempt.succeeded() {
            successes += 1;
        }
    }

    assert_eq!(successes, 2);
    assert_eq!(sword.strengthen_times, 3);
    assert!(pool.spirit_stones < 1_000_000);
}

#[test]
fn test_battle_power_grows_with_levels() {
    let rules = Ruleset::default();
    let mut sheet = CharacterSheet::new("Lin", BaseAttributes::default());
    let before = sheet.battle_power(&rules).unwrap();

    let mut state = ProgressionState::new(1, exp_required(1), 1);
    state.level_up(&mut sheet.base, &rules.realms).unwrap();

    let after = sheet.battle_power(&rules).unwrap();
    // +10 attack, +6 from defense, +20 from hp
    assert_eq!(after - before, 36);
}
