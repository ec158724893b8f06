//! CombatSession - Drives a fight turn by turn
//!
//! A session holds only what persists between turns: the weather drawn at
//! the start, both sides' current HP, the dungeon wave and any pending
//! guard from a defend action. Both CombatStats snapshots are recomputed
//! from the records every turn.

use super::action::{flee_chance, PlayerAction};
use super::result::{Actor, CombatState, TurnReport};
use super::rewards::rewards_for;
use super::MonsterProfile;
use crate::config::Ruleset;
use crate::damage::resolve_damage_with_rng;
use crate::error::{CoreError, CoreResult};
use crate::rng::RollSource;
use crate::stats::{CharacterSheet, CombatStats};
use crate::tables::WeatherCondition;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatSession {
    pub weather: WeatherCondition,
    /// Monsters fought in order; a single entry for a plain encounter
    pub waves: Vec<MonsterProfile>,
    /// Index of the current monster in `waves`
    pub wave: usize,
    pub character_hp: i64,
    pub monster_hp: i64,
    /// Extra defense held for the next incoming hit
    pub guard: i64,
    pub turn: u32,
    pub state: CombatState,
}

impl CombatSession {
    /// Start a session under uniformly drawn weather
    pub fn new(
        sheet: &CharacterSheet,
        waves: Vec<MonsterProfile>,
        rules: &Ruleset,
        rng: &mut impl RollSource,
    ) -> CoreResult<Self> {
        let weather = WeatherCondition::sample(rng);
        Self::with_weather(sheet, waves, weather, rules)
    }

    pub fn with_weather(
        sheet: &CharacterSheet,
        waves: Vec<MonsterProfile>,
        weather: WeatherCondition,
        rules: &Ruleset,
    ) -> CoreResult<Self> {
        let first_hp = match waves.first() {
            Some(monster) => monster.hp,
            None => return Err(CoreError::invalid("a combat needs at least one monster")),
        };
        if let Some(monster) = waves.iter().find(|m| m.hp <= 0) {
            return Err(CoreError::invalid(format!(
                "monster {} has no hit points",
                monster.name
            )));
        }
        let stats = sheet.combat_stats(weather, rules)?;

        tracing::debug!(?weather, waves = waves.len(), "combat started");

        Ok(CombatSession {
            weather,
            waves,
            wave: 0,
            character_hp: stats.total_hp,
            monster_hp: first_hp,
            guard: 0,
            turn: 0,
            state: CombatState::Active,
        })
    }

    pub fn monster(&self) -> Option<&MonsterProfile> {
        self.waves.get(self.wave)
    }

    pub fn is_active(&self) -> bool {
        self.state == CombatState::Active
    }

    pub fn is_final_wave(&self) -> bool {
        self.wave + 1 >= self.waves.len()
    }

    /// Play one turn
    ///
    /// The faster side acts first, ties going to the player. The second side
    /// acts only if it is still standing and nobody fled. Character HP is
    /// checked before monster HP, so a mutual knockout is a defeat.
    pub fn take_turn(
        &mut self,
        sheet: &CharacterSheet,
        action: PlayerAction,
        rules: &Ruleset,
        rng: &mut impl RollSource,
    ) -> CoreResult<TurnReport> {
        if !self.is_active() {
            return Err(CoreError::refused(
                "take_turn",
                format!("combat is over ({:?})", self.state),
            ));
        }
        if let PlayerAction::Skill { pet } = action {
            match sheet.loadout.pet(pet) {
                None => return Err(CoreError::invalid(format!("no pet at index {pet}"))),
                Some(p) if !p.has_skill() => {
                    return Err(CoreError::refused(
                        "take_turn",
                        format!("{} has no skill", p.name),
                    ))
                }
                Some(_) => {}
            }
        }
        let monster = self
            .monster()
            .cloned()
            .ok_or_else(|| CoreError::invalid("session has no current monster"))?;

        let player = sheet.combat_stats(self.weather, rules)?;
        let foe = monster.combat_stats(&rules.constants.combat);

        let player_first = player.total_speed >= foe.total_speed;
        let order = if player_first {
            [Actor::Player, Actor::Monster]
        } else {
            [Actor::Monster, Actor::Player]
        };
        self.turn += 1;
        let mut report = TurnReport::new(self.turn, order);

        if player_first {
            let fled = self.player_acts(sheet, action, &player, &foe, rules, rng, &mut report);
            if !fled && self.monster_hp > 0 {
                self.monster_acts(&monster, &player, &foe, rules, rng, &mut report);
            }
        } else {
            self.monster_acts(&monster, &player, &foe, rules, rng, &mut report);
            if self.character_hp > 0 {
                self.player_acts(sheet, action, &player, &foe, rules, rng, &mut report);
            }
        }

        if self.state == CombatState::Active {
            self.settle(&monster, rules, &mut report);
        }

        report.character_hp = self.character_hp;
        report.monster_hp = self.monster_hp;
        report.state = self.state;

        tracing::debug!(
            turn = self.turn,
            action = action.name(),
            dealt = report.damage_dealt,
            taken = report.damage_taken,
            state = ?self.state,
            "combat turn"
        );

        Ok(report)
    }

    /// Returns true when the player fled
    #[allow(clippy::too_many_arguments)]
    fn player_acts(
        &mut self,
        sheet: &CharacterSheet,
        action: PlayerAction,
        player: &CombatStats,
        foe: &CombatStats,
        rules: &Ruleset,
        rng: &mut impl RollSource,
        report: &mut TurnReport,
    ) -> bool {
        let combat = &rules.constants.combat;
        match action {
            PlayerAction::Attack => {
                let outcome = resolve_damage_with_rng(
                    player,
                    foe,
                    self.weather,
                    sheet.ability.as_ref(),
                    rules,
                    rng,
                );
                self.monster_hp -= outcome.damage;
                report.damage_dealt += outcome.damage;
                report.log.push(format!("{} attacks: {}", sheet.name, outcome.summary()));
            }
            PlayerAction::Defend => {
                self.guard = (player.total_defense as f64 * combat.defend_ratio).floor() as i64;
                report
                    .log
                    .push(format!("{} defends (+{} defense)", sheet.name, self.guard));
            }
            PlayerAction::Skill { pet } => {
                let Some(pet) = sheet.loadout.pet(pet) else {
                    return false;
                };
                let skill = pet.skill_name.as_deref().unwrap_or("skill");
                if rng.chance(pet.skill_trigger_rate) {
                    let damage = (player.total_attack as f64 * combat.pet_skill_ratio).floor() as i64;
                    self.monster_hp -= damage;
                    report.damage_dealt += damage;
                    report
                        .log
                        .push(format!("{} uses {} for {} damage", pet.name, skill, damage));
                } else {
                    report.log.push(format!("{}'s {} fails", pet.name, skill));
                }
            }
            PlayerAction::Flee => {
                let chance = flee_chance(player.total_speed, foe.total_speed, &combat.flee);
                if rng.chance(chance) {
                    self.state = CombatState::Fled;
                    report.log.push(format!("{} fled", sheet.name));
                    return true;
                }
                report.log.push(format!("{} failed to flee", sheet.name));
            }
        }
        false
    }

    fn monster_acts(
        &mut self,
        monster: &MonsterProfile,
        player: &CombatStats,
        foe: &CombatStats,
        rules: &Ruleset,
        rng: &mut impl RollSource,
        report: &mut TurnReport,
    ) {
        let combat = &rules.constants.combat;
        let mut defender = player.clone();
        defender.total_defense += std::mem::take(&mut self.guard);

        let outcome = if rng.chance(combat.monster_attack_weight) {
            let outcome = resolve_damage_with_rng(foe, &defender, self.weather, None, rules, rng);
            report
                .log
                .push(format!("{} attacks: {}", monster.name, outcome.summary()));
            outcome
        } else {
            let special = monster.special_ability(combat);
            let outcome =
                resolve_damage_with_rng(foe, &defender, self.weather, Some(&special), rules, rng);
            report.log.push(format!(
                "{} uses {}: {}",
                monster.name,
                special.name,
                outcome.summary()
            ));
            outcome
        };

        self.character_hp -= outcome.damage;
        report.damage_taken += outcome.damage;
    }

    fn settle(&mut self, monster: &MonsterProfile, rules: &Ruleset, report: &mut TurnReport) {
        if self.character_hp <= 0 {
            self.character_hp = 0;
            self.state = CombatState::Defeat;
            report.log.push("defeated".to_string());
            return;
        }
        if self.monster_hp > 0 {
            return;
        }

        self.monster_hp = 0;
        report.rewards = Some(rewards_for(monster, self.weather, &rules.tables));
        report.log.push(format!("{} is defeated", monster.name));

        if self.is_final_wave() {
            self.state = CombatState::Victory;
            return;
        }
        self.wave += 1;
        self.guard = 0;
        if let Some(next) = self.waves.get(self.wave) {
            self.monster_hp = next.hp;
            report.wave_advanced = true;
            report.log.push(format!("next wave: {}", next.name));
        }
    }
}
