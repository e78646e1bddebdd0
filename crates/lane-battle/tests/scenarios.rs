//! End-to-end battle scenarios through the public API.

use lane_battle::prelude::*;

const DT: f32 = 0.05;

fn battle(progression: &Progression) -> BattleState {
    BattleState::with_seed(progression, BattleConfig::default(), 11)
}

/// Tick until `done` holds, summing rewards. Panics after `max_ticks`.
fn run_until(
    state: &mut BattleState,
    progression: &Progression,
    max_ticks: usize,
    mut done: impl FnMut(&BattleState) -> bool,
) -> TickResult {
    let mut total = TickResult::default();
    for _ in 0..max_ticks {
        let result = tick(state, progression, DT);
        total.gold_earned += result.gold_earned;
        total.xp_earned += result.xp_earned;
        total.hero_died |= result.hero_died;
        total.distance = result.distance;
        total.kill_streak = result.kill_streak;
        if done(state) {
            return total;
        }
    }
    panic!("scenario did not finish within {max_ticks} ticks");
}

#[test]
fn test_level_one_enemy_dies_after_four_hits() {
    let progression = Progression::new(0, 10, 5, 0);
    let mut state = battle(&progression);
    state.spawn_enemy(1, None);
    state.enemies[0].body.position.x = 130.0;
    assert_eq!(state.enemies[0].body.max_hp, 38);
    assert_eq!(state.enemies[0].body.defense, 0);

    let mut hits = 0;
    let mut last_hp = 38;
    let mut gold = 0;
    let mut xp = 0;
    for _ in 0..200 {
        let result = tick(&mut state, &progression, DT);
        gold += result.gold_earned;
        xp += result.xp_earned;
        let Some(enemy) = state.enemies.first() else {
            break;
        };
        if enemy.body.hp < last_hp {
            hits += 1;
            if !enemy.dead {
                assert_eq!(last_hp - enemy.body.hp, 10);
            }
            last_hp = enemy.body.hp;
        }
        if enemy.dead {
            break;
        }
    }

    assert_eq!(hits, 4);
    assert!(state.enemies[0].dead);
    assert_eq!(gold, 5);
    assert_eq!(xp, 15);
    assert_eq!(state.kill_streak(), 1);

    // Fading corpses pay nothing more.
    let rest = run_until(&mut state, &progression, 100, |s| s.enemies.is_empty());
    assert_eq!(rest.gold_earned, 0);
    assert_eq!(rest.xp_earned, 0);
}

#[test]
fn test_fatigue_kills_weakened_hero() {
    let progression = Progression::new(0, 10, 5, 0);
    let mut state = battle(&progression);
    assert_eq!(state.hero.body.max_hp, 100);
    state.hero.body.hp = 10;
    state.apply_buff(StatKind::Defense, 3, "Guard");
    state.kill_streak = 3;
    state.queue_fatigue();

    let result = tick(&mut state, &progression, DT);

    assert!(result.hero_died);
    assert_eq!(result.kill_streak, 0);
    assert!(!state.hero.alive);
    assert_eq!(state.hero.body.hp, 0);
    assert!(state.hero.respawn_timer > 0.0 && state.hero.respawn_timer < 2.0);
    assert!(state.buffs.is_empty());
    assert_eq!(state.kill_streak(), 0);
    assert!(state.floating_texts.iter().any(|t| t.text == "-15 fatigue"));

    // Respawns with a fresh hero two seconds later.
    run_until(&mut state, &progression, 100, |s| s.hero.alive);
    assert_eq!(state.hero.body.hp, 100);
    assert_eq!(state.hero.body.defense, 5);
}

#[test]
fn test_speed_buff_shortens_cooldown() {
    let progression = Progression::new(1, 10, 5, 3);
    let mut state = battle(&progression);
    state.apply_buff(StatKind::Speed, 4, "Haste");

    tick(&mut state, &progression, DT);

    let expected = (1.2f32 - (3.0 + 4.0) * 0.05).max(0.4);
    assert!((state.hero.body.attack_cooldown - expected).abs() < 1e-5);
}

#[test]
fn test_second_enemy_waits_for_first_to_fade() {
    let progression = Progression::new(1, 10, 5, 0);
    let mut state = battle(&progression);
    let near = state.spawn_enemy(1, None);
    let far = state.spawn_enemy(1, None);
    state.enemies[0].body.position.x = 300.0;
    state.enemies[1].body.position.x = 450.0;

    let first = run_until(&mut state, &progression, 1000, |s| s.enemies[0].dead);
    assert_eq!(first.gold_earned, 5);
    assert_eq!(state.enemies.len(), 2);
    assert_eq!(state.enemies[0].id, near);

    // The corpse lingers for the fade window while the next enemy keeps coming.
    let far_x = state.enemies[1].body.position.x;
    assert!(far_x > 130.0);
    tick(&mut state, &progression, DT);
    assert_eq!(state.enemies.len(), 2);
    assert!(state.enemies[1].body.position.x < far_x);

    run_until(&mut state, &progression, 20, |s| s.enemies.len() == 1);
    assert_eq!(state.enemies[0].id, far);
    assert!(state.enemies[0].is_alive());

    let second = run_until(&mut state, &progression, 1000, |s| s.enemies[0].dead);
    assert_eq!(second.gold_earned, 5);
    assert_eq!(second.kill_streak, 2);
}

#[test]
fn test_dead_hero_freezes_everything_but_timers() {
    let progression = Progression::new(0, 1, 0, 0);
    let mut state = battle(&progression);
    state.spawn_enemy(10, None);
    state.enemies[0].body.position.x = 130.0;

    run_until(&mut state, &progression, 10_000, |s| !s.hero.alive);

    let distance = state.distance;
    let enemy_x = state.enemies[0].body.position.x;
    let enemy_hp = state.enemies[0].body.hp;
    for _ in 0..10 {
        let result = tick(&mut state, &progression, DT);
        assert_eq!(result.gold_earned, 0);
        assert_eq!(state.distance, distance);
        assert_eq!(state.enemies[0].body.position.x, enemy_x);
        assert_eq!(state.enemies[0].body.hp, enemy_hp);
    }

    run_until(&mut state, &progression, 100, |s| s.hero.alive);
    assert!(state.enemies.is_empty());
    assert_eq!(state.distance, 0.0);
}

#[test]
fn test_kill_streak_grows_until_death() {
    let progression = Progression::new(5, 50, 100, 0);
    let mut state = battle(&progression);
    let mut last = 0;
    for _ in 0..5 {
        state.spawn_enemy(1, None);
        let index = state.enemies.len() - 1;
        state.enemies[index].body.position.x = 130.0;
        run_until(&mut state, &progression, 500, |s| s.enemies.iter().all(|e| e.dead));
        assert!(state.kill_streak() > last);
        last = state.kill_streak();
    }
    assert_eq!(last, 5);

    state.queue_fatigue();
    state.hero.body.hp = 1;
    let result = tick(&mut state, &progression, DT);
    assert!(result.hero_died);
    assert_eq!(state.kill_streak(), 0);
}
