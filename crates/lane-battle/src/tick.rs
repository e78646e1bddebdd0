//! Tick engine.
//!
//! One call to [`tick`] advances a battle by `dt` seconds. The phases run in
//! a fixed order every frame:
//! 1. floating text decay
//! 2. buff decay
//! 3. hero stat recompute from progression + buffs
//! 4. pending heal / fatigue
//! 5. death branch (respawn countdown, enemy fading) with early return
//! 6. movement
//! 7. targeting
//! 8. hero attack
//! 9. enemy attacks
//!
//! The caller is expected to clamp `dt`; the engine does not.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::buffs::StatKind;
use crate::damage::{fatigue_damage, melee_damage};
use crate::floating_text::TextTone;
use crate::progression::Progression;
use crate::state::BattleState;

/// Rewards and events produced by one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TickResult {
    /// Gold from every kill this tick
    pub gold_earned: i32,
    /// Experience from every kill this tick
    pub xp_earned: i32,
    /// Whether the hero died this tick
    pub hero_died: bool,
    /// Distance after this tick
    pub distance: f32,
    /// Kill streak after this tick
    pub kill_streak: u32,
}

impl TickResult {
    /// Whether any reward was produced.
    #[must_use]
    pub fn has_rewards(&self) -> bool {
        self.gold_earned != 0 || self.xp_earned != 0
    }
}

/// Advance the battle by `dt` seconds.
pub fn tick(state: &mut BattleState, progression: &Progression, dt: f32) -> TickResult {
    let mut result = TickResult {
        distance: state.distance,
        kill_streak: state.kill_streak,
        ..TickResult::default()
    };

    decay_floating_texts(state, dt);
    state.buffs.tick(dt);
    recompute_hero_stats(state, progression);
    apply_pending_effects(state, &mut result);

    if !state.hero.alive {
        advance_dead_hero(state, progression, dt);
        result.distance = state.distance;
        trace!(respawn_in = state.hero.respawn_timer, "Tick while hero dead");
        return result;
    }

    advance_movement(state, dt);
    result.distance = state.distance;

    let target = state.closest_living_enemy();
    hero_attack(state, target, dt, &mut result);
    enemy_attacks(state, dt, &mut result);

    trace!(
        distance = result.distance,
        enemies = state.enemies.len(),
        gold = result.gold_earned,
        "Tick complete"
    );
    result
}

fn decay_floating_texts(state: &mut BattleState, dt: f32) {
    let drift = state.config.floating_text_drift;
    state.floating_texts.retain_mut(|text| {
        text.update(dt, drift);
        text.is_active()
    });
}

/// Effective stats are rebuilt from scratch every tick; buffs never stick.
fn recompute_hero_stats(state: &mut BattleState, progression: &Progression) {
    let attack = progression.attack + state.buffs.bonus(StatKind::Attack);
    let defense = progression.defense + state.buffs.bonus(StatKind::Defense);
    let speed_points = progression.speed + state.buffs.bonus(StatKind::Speed);
    state
        .hero
        .set_effective_stats(attack, defense, speed_points, &state.config);
}

/// Flags queued while the hero is dead wait for the respawn.
fn apply_pending_effects(state: &mut BattleState, result: &mut TickResult) {
    if !state.hero.alive {
        return;
    }
    let above_hero = state.hero.body.position.offset(0.0, -30.0);

    if state.pending_heal {
        state.pending_heal = false;
        state.hero.body.hp = state.hero.body.max_hp;
        state.push_text(above_hero, "HEALED!".to_string(), TextTone::Heal);
        debug!("Hero healed");
    }

    if state.pending_fatigue {
        state.pending_fatigue = false;
        let dmg = fatigue_damage(state.hero.body.max_hp, state.config.fatigue_fraction);
        state.hero.body.hp -= dmg;
        state.push_text(above_hero, format!("-{dmg} fatigue"), TextTone::Fatigue);
        debug!(dmg, hp = state.hero.body.hp, "Fatigue applied");
        if state.hero.body.hp <= 0 {
            kill_hero(state, result);
        }
    }
}

/// Alive -> Dead. Clears buffs and the kill streak.
fn kill_hero(state: &mut BattleState, result: &mut TickResult) {
    state.hero.body.hp = 0;
    state.hero.alive = false;
    state.hero.respawn_timer = state.config.respawn_time;
    state.buffs.clear();
    state.kill_streak = 0;
    result.hero_died = true;
    result.kill_streak = 0;
    debug!(respawn_in = state.config.respawn_time, "Hero died");
}

/// Dead -> Alive once the respawn timer runs out. Nothing moves or fights.
fn advance_dead_hero(state: &mut BattleState, progression: &Progression, dt: f32) {
    state.hero.respawn_timer -= dt;
    if state.hero.respawn_timer <= 0.0 {
        state.hero.reset(progression, &state.config);
        state.distance = 0.0;
        state.enemies.clear();
        debug!(hp = state.hero.body.hp, "Hero respawned");
        return;
    }
    fade_dead_enemies(state, dt);
}

fn fade_dead_enemies(state: &mut BattleState, dt: f32) {
    for enemy in state.enemies.iter_mut().filter(|e| e.dead) {
        enemy.death_timer -= dt;
    }
    state.enemies.retain(|e| !e.is_faded());
}

/// The hero runs until engaged; enemies walk in until they reach the hero.
fn advance_movement(state: &mut BattleState, dt: f32) {
    let hero_x = state.hero.body.position.x;
    let engaged = state
        .living_enemies()
        .any(|e| e.body.position.x - hero_x < state.config.engagement_range);
    if !engaged {
        state.distance += state.hero.body.speed as f32 * dt;
    }

    let stop_at = hero_x + state.config.enemy_stop_offset;
    for enemy in state.enemies.iter_mut().filter(|e| e.is_alive()) {
        if enemy.body.position.x > stop_at {
            enemy.body.position.x -= enemy.body.speed as f32 * dt;
        }
    }

    fade_dead_enemies(state, dt);
}

fn hero_attack(state: &mut BattleState, target: Option<usize>, dt: f32, result: &mut TickResult) {
    state.hero.body.attack_timer -= dt;

    let Some(index) = target else {
        return;
    };
    let gap = state.hero.body.gap_to(&state.enemies[index].body);
    if gap >= state.config.melee_range || state.hero.body.attack_timer > 0.0 {
        return;
    }

    let dmg = melee_damage(state.hero.body.attack, state.enemies[index].body.defense);
    state.hero.body.attack_timer = state.hero.body.attack_cooldown;

    let fade = state.config.death_fade;
    let enemy = &mut state.enemies[index];
    enemy.body.hp -= dmg;
    let at = enemy.body.position;
    let killed = enemy.body.hp <= 0;
    let (id, gold, xp) = (enemy.id, enemy.gold_reward, enemy.xp_reward);
    if killed {
        enemy.kill(fade);
    }

    state.push_text(at.offset(0.0, -20.0), format!("-{dmg}"), TextTone::EnemyHit);
    if !killed {
        return;
    }

    result.gold_earned += gold;
    result.xp_earned += xp;
    state.kill_streak += 1;
    result.kill_streak = state.kill_streak;
    debug!(%id, gold, xp, streak = state.kill_streak, "Enemy killed");

    state.push_text(at.offset(0.0, -40.0), format!("+{gold}g"), TextTone::Gold);
    if state.kill_streak > 1 {
        let streak = state.kill_streak;
        state.push_text(at.offset(0.0, -60.0), format!("{streak}x streak!"), TextTone::Streak);
    }
}

/// First lethal hit ends the phase; later enemies do not swing this tick.
fn enemy_attacks(state: &mut BattleState, dt: f32, result: &mut TickResult) {
    let hero_at = state.hero.body.position.offset(0.0, -20.0);

    for index in 0..state.enemies.len() {
        let enemy = &mut state.enemies[index];
        if !enemy.is_alive() || enemy.body.position.x - hero_at.x >= state.config.melee_range {
            continue;
        }

        enemy.body.attack_timer -= dt;
        if enemy.body.attack_timer > 0.0 {
            continue;
        }
        enemy.body.attack_timer = enemy.body.attack_cooldown;
        let dmg = melee_damage(enemy.body.attack, state.hero.body.defense);

        state.hero.body.hp -= dmg;
        state.push_text(hero_at, format!("-{dmg}"), TextTone::HeroHit);

        if state.hero.body.hp <= 0 {
            kill_hero(state, result);
            break;
        }
    }
}
