//! Stimulus API.
//!
//! Entry points the host calls between ticks to inject outside events into a
//! battle: spawning enemies, granting buffs, and queueing heal or fatigue
//! pulses. None of these can fail; odd inputs are clamped downstream.

use lane_common::{EnemyId, LaneResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::buffs::{HeroBuff, StatKind};
use crate::entity::{Enemy, EnemyModifier, SpawnVariant};
use crate::floating_text::TextTone;
use crate::state::BattleState;

impl BattleState {
    /// Spawn one enemy of `level` near the right edge of the lane.
    ///
    /// Rewards depend on `level` only; the modifier changes combat stats and
    /// the spawn banner.
    pub fn spawn_enemy(&mut self, level: i32, modifier: Option<EnemyModifier>) -> EnemyId {
        let modifier = modifier.unwrap_or_default();
        let id = self.enemy_ids.allocate();
        let x = self.config.enemy_spawn_x + self.jitter() * self.config.enemy_spawn_jitter;
        let enemy = Enemy::spawn(id, level, &modifier, x, &self.config);
        debug!(%id, level, x, hp = enemy.body.max_hp, "Enemy spawned");
        self.enemies.push(enemy);

        let variant = SpawnVariant::of(&modifier);
        let (text, tone) = match variant {
            SpawnVariant::Normal => (format!("Enemy Lv{level}!"), TextTone::Spawn),
            SpawnVariant::Strengthened => (
                format!("Enemy Lv{level} {}!", variant.label()),
                TextTone::SpawnStrengthened,
            ),
            SpawnVariant::Weakened => (
                format!("Enemy Lv{level} {}!", variant.label()),
                TextTone::SpawnWeakened,
            ),
        };
        let banner = self.config.spawn_banner;
        self.push_text(banner, text, tone);
        id
    }

    /// Grant the hero a buff (or debuff, if `amount` is negative) that lasts
    /// until the hero dies.
    pub fn apply_buff(&mut self, stat: StatKind, amount: i32, label: impl Into<String>) {
        self.add_buff(HeroBuff::permanent(stat, amount, label));
    }

    /// Grant the hero a buff that expires after `seconds`.
    pub fn apply_timed_buff(
        &mut self,
        stat: StatKind,
        amount: i32,
        label: impl Into<String>,
        seconds: f32,
    ) {
        self.add_buff(HeroBuff::permanent(stat, amount, label).with_duration(seconds));
    }

    fn add_buff(&mut self, buff: HeroBuff) {
        let sign = if buff.amount > 0 { "+" } else { "" };
        let text = format!("{sign}{} {} {}", buff.amount, buff.stat.abbrev(), buff.label);
        let tone = if buff.amount > 0 {
            TextTone::Buff
        } else {
            TextTone::Debuff
        };
        debug!(stat = ?buff.stat, amount = buff.amount, label = %buff.label, "Buff applied");

        self.buffs.push(buff);
        let at = self.hero.body.position.offset(0.0, -40.0);
        self.push_text(at, text, tone);
    }

    /// Restore the hero to full hp on the next tick.
    pub fn queue_heal(&mut self) {
        self.pending_heal = true;
    }

    /// Hit the hero with fatigue damage on the next tick.
    pub fn queue_fatigue(&mut self) {
        self.pending_fatigue = true;
    }

    /// Apply a decoded stimulus: enemy, then buffs, then heal and fatigue.
    pub fn apply_stimulus(&mut self, stimulus: &Stimulus) {
        if let Some(spawn) = &stimulus.spawn_enemy {
            self.spawn_enemy(spawn.level, spawn.stat_modifier);
        }
        for buff in &stimulus.hero_buffs {
            self.apply_buff(buff.stat, buff.amount, buff.label.clone());
        }
        if stimulus.pending_heal {
            self.queue_heal();
        }
        if stimulus.pending_fatigue {
            self.queue_fatigue();
        }
    }
}

/// Enemy spawn request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnRequest {
    /// Enemy level
    pub level: i32,
    /// Optional stat offsets
    #[serde(default)]
    pub stat_modifier: Option<EnemyModifier>,
}

/// Buff grant request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuffRequest {
    /// Stat to modify
    pub stat: StatKind,
    /// Signed amount
    pub amount: i32,
    /// Display label
    pub label: String,
}

/// Everything the surrounding application wants to inject after one of its
/// own events (an event completed, a timer ran over, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stimulus {
    /// Enemy to spawn, if any
    pub spawn_enemy: Option<SpawnRequest>,
    /// Buffs to grant, in order
    pub hero_buffs: Vec<BuffRequest>,
    /// Queue a full heal
    pub pending_heal: bool,
    /// Queue a fatigue pulse
    pub pending_fatigue: bool,
}

impl Stimulus {
    /// Decode a stimulus from the application's JSON response.
    ///
    /// Unknown fields are ignored so full API responses can be passed as-is.
    pub fn from_json(json: &str) -> LaneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether applying this would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spawn_enemy.is_none()
            && self.hero_buffs.is_empty()
            && !self.pending_heal
            && !self.pending_fatigue
    }
}
