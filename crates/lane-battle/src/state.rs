//! Battle state container.
//!
//! Owns every live entity of one simulation instance together with the id
//! counter, the kill streak and the one-shot pending flags. The host keeps
//! exactly one of these per session and hands it to [`crate::tick`] by
//! exclusive reference.

use lane_common::{EnemyIdCounter, LanePosition, LaneError, LaneResult};
use serde::Serialize;
use tracing::debug;

use crate::buffs::{BuffList, StatKind};
use crate::config::BattleConfig;
use crate::entity::{Enemy, Hero};
use crate::floating_text::{FloatingText, TextTone};
use crate::progression::Progression;

/// All state of one running battle.
///
/// Serializes to a read-only snapshot for renderers and inspectors.
#[derive(Debug, Clone, Serialize)]
pub struct BattleState {
    /// The hero
    pub hero: Hero,
    /// Enemies in spawn order
    pub enemies: Vec<Enemy>,
    /// Cosmetic labels in creation order
    pub floating_texts: Vec<FloatingText>,
    /// Active hero buffs
    pub buffs: BuffList,
    /// Distance run since the last respawn
    pub distance: f32,
    /// Reserved run flag, always true in practice
    pub running: bool,
    /// Enemy id allocator
    pub enemy_ids: EnemyIdCounter,
    /// Heal queued for the next tick
    pub pending_heal: bool,
    /// Fatigue queued for the next tick
    pub pending_fatigue: bool,
    /// Consecutive kills since the last hero death
    pub kill_streak: u32,
    /// Tuning constants
    #[serde(skip)]
    pub config: BattleConfig,
    #[serde(skip)]
    rng: fastrand::Rng,
}

impl BattleState {
    /// Create a battle for a progression snapshot with default tuning.
    #[must_use]
    pub fn new(progression: &Progression) -> Self {
        Self::with_config(progression, BattleConfig::default())
    }

    /// Create a battle with custom tuning.
    #[must_use]
    pub fn with_config(progression: &Progression, config: BattleConfig) -> Self {
        Self::build(progression, config, fastrand::Rng::new())
    }

    /// Create a battle whose spawn jitter is reproducible.
    #[must_use]
    pub fn with_seed(progression: &Progression, config: BattleConfig, seed: u64) -> Self {
        Self::build(progression, config, fastrand::Rng::with_seed(seed))
    }

    fn build(progression: &Progression, config: BattleConfig, rng: fastrand::Rng) -> Self {
        debug!(level = progression.level, "Creating battle state");
        Self {
            hero: Hero::from_progression(progression, &config),
            enemies: Vec::new(),
            floating_texts: Vec::new(),
            buffs: BuffList::new(),
            distance: 0.0,
            running: true,
            enemy_ids: EnemyIdCounter::new(),
            pending_heal: false,
            pending_fatigue: false,
            kill_streak: 0,
            config,
            rng,
        }
    }

    /// Current kill streak.
    #[must_use]
    pub fn kill_streak(&self) -> u32 {
        self.kill_streak
    }

    /// Enemies that can still move and fight.
    pub fn living_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|e| e.is_alive())
    }

    /// Index of the living enemy closest to the hero (smallest x).
    ///
    /// On equal x the earliest spawned enemy wins.
    #[must_use]
    pub fn closest_living_enemy(&self) -> Option<usize> {
        self.enemies
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_alive())
            .min_by(|(_, a), (_, b)| a.body.position.x.total_cmp(&b.body.position.x))
            .map(|(i, _)| i)
    }

    /// Adopt a new progression snapshot between ticks.
    ///
    /// A living hero takes the new base stats at once; if max hp grew the
    /// hero gains the difference in current hp too. A dead hero is rebuilt
    /// on respawn anyway and is left untouched.
    pub fn sync_progression(&mut self, progression: &Progression) {
        if !self.hero.alive {
            return;
        }
        let config = &self.config;
        self.hero.set_effective_stats(
            progression.attack + self.buffs.bonus(StatKind::Attack),
            progression.defense + self.buffs.bonus(StatKind::Defense),
            progression.speed + self.buffs.bonus(StatKind::Speed),
            config,
        );

        let new_max = config.hero_max_hp(progression.level);
        if new_max > self.hero.body.max_hp {
            self.hero.body.hp += new_max - self.hero.body.max_hp;
            self.hero.body.max_hp = new_max;
            debug!(max_hp = new_max, "Hero max hp raised by progression");
        }
    }

    /// Serialize the state for a renderer or inspector.
    pub fn snapshot_json(&self) -> LaneResult<String> {
        serde_json::to_string(self).map_err(|e| LaneError::Serialization(e.to_string()))
    }

    /// Append a floating text with the configured lifetime.
    pub(crate) fn push_text(&mut self, position: LanePosition, text: String, tone: TextTone) {
        let life = self.config.floating_text_life;
        self.floating_texts.push(FloatingText::new(position, text, tone, life));
    }

    /// Uniform random value in `[0, 1)` for spawn jitter.
    pub(crate) fn jitter(&mut self) -> f32 {
        self.rng.f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffs::HeroBuff;
    use crate::entity::EnemyModifier;

    fn progression() -> Progression {
        Progression::new(1, 10, 5, 0)
    }

    #[test]
    fn test_new_state() {
        let state = BattleState::new(&progression());

        assert!(state.hero.alive);
        assert!(state.running);
        assert!(state.enemies.is_empty());
        assert!(state.buffs.is_empty());
        assert_eq!(state.distance, 0.0);
        assert_eq!(state.kill_streak(), 0);
        assert!(!state.pending_heal);
        assert!(!state.pending_fatigue);
    }

    #[test]
    fn test_closest_living_enemy_skips_dead() {
        let mut state = BattleState::new(&progression());
        let config = state.config.clone();
        let modifier = EnemyModifier::default();

        let mut near = Enemy::spawn(state.enemy_ids.allocate(), 1, &modifier, 150.0, &config);
        near.kill(0.5);
        let mid = Enemy::spawn(state.enemy_ids.allocate(), 1, &modifier, 300.0, &config);
        let far = Enemy::spawn(state.enemy_ids.allocate(), 1, &modifier, 500.0, &config);
        state.enemies = vec![far, near, mid];

        assert_eq!(state.closest_living_enemy(), Some(2));
        assert_eq!(state.living_enemies().count(), 2);
    }

    #[test]
    fn test_closest_tie_prefers_first() {
        let mut state = BattleState::new(&progression());
        let config = state.config.clone();
        let modifier = EnemyModifier::default();
        let a = Enemy::spawn(state.enemy_ids.allocate(), 1, &modifier, 300.0, &config);
        let b = Enemy::spawn(state.enemy_ids.allocate(), 2, &modifier, 300.0, &config);
        state.enemies = vec![a, b];

        assert_eq!(state.closest_living_enemy(), Some(0));
    }

    #[test]
    fn test_sync_progression_raises_hp() {
        let mut state = BattleState::new(&progression());
        state.hero.body.hp = 50;

        state.sync_progression(&Progression::new(3, 14, 6, 2));

        assert_eq!(state.hero.body.max_hp, 130);
        assert_eq!(state.hero.body.hp, 70);
        assert_eq!(state.hero.body.attack, 14);
        assert_eq!(state.hero.body.speed, 40);
    }

    #[test]
    fn test_sync_progression_keeps_buffs() {
        let mut state = BattleState::new(&progression());
        state.buffs.push(HeroBuff::permanent(StatKind::Attack, 5, "Focus"));

        state.sync_progression(&Progression::new(1, 20, 5, 0));
        assert_eq!(state.hero.body.attack, 25);
    }

    #[test]
    fn test_sync_progression_ignores_dead_hero() {
        let mut state = BattleState::new(&progression());
        state.hero.alive = false;
        state.hero.body.hp = 0;

        state.sync_progression(&Progression::new(5, 30, 10, 5));
        assert_eq!(state.hero.body.attack, 10);
        assert_eq!(state.hero.body.max_hp, 110);
    }

    #[test]
    fn test_snapshot_json() {
        let state = BattleState::new(&progression());
        let json = state.snapshot_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["kill_streak"], 0);
        assert_eq!(value["hero"]["alive"], true);
        assert!(value.get("config").is_none());
    }

    #[test]
    fn test_seeded_jitter_is_reproducible() {
        let mut a = BattleState::with_seed(&progression(), BattleConfig::default(), 7);
        let mut b = BattleState::with_seed(&progression(), BattleConfig::default(), 7);
        assert_eq!(a.jitter().to_bits(), b.jitter().to_bits());
    }
}
