//! Hero buffs and debuffs.
//!
//! This module provides:
//! - The stats a buff can touch
//! - Buff durations (permanent until death, or timed)
//! - The hero's buff list with additive per-stat bonuses

use serde::{Deserialize, Serialize};

/// Hero stat a buff modifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKind {
    /// Attack power.
    Attack,
    /// Defense value.
    Defense,
    /// Speed points (running speed and attack cooldown).
    Speed,
}

impl StatKind {
    /// Short label used in floating texts.
    #[must_use]
    pub fn abbrev(self) -> &'static str {
        match self {
            Self::Attack => "ATK",
            Self::Defense => "DEF",
            Self::Speed => "SPD",
        }
    }
}

/// How long a buff lasts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BuffDuration {
    /// Lasts until the hero dies.
    Permanent,
    /// Seconds remaining.
    Expires(f32),
}

impl BuffDuration {
    /// Check if expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        matches!(self, Self::Expires(remaining) if *remaining <= 0.0)
    }

    /// Update remaining time. Permanent durations never change.
    pub fn tick(&mut self, dt: f32) {
        if let Self::Expires(ref mut remaining) = self {
            *remaining -= dt;
        }
    }
}

/// A signed stat modifier on the hero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroBuff {
    /// Stat being modified.
    pub stat: StatKind,
    /// Signed amount (negative = debuff).
    pub amount: i32,
    /// Remaining lifetime.
    pub duration: BuffDuration,
    /// Display label.
    pub label: String,
}

impl HeroBuff {
    /// Create a buff that lasts until the hero dies.
    #[must_use]
    pub fn permanent(stat: StatKind, amount: i32, label: impl Into<String>) -> Self {
        Self {
            stat,
            amount,
            duration: BuffDuration::Permanent,
            label: label.into(),
        }
    }

    /// Set a duration in seconds.
    #[must_use]
    pub fn with_duration(mut self, seconds: f32) -> Self {
        self.duration = BuffDuration::Expires(seconds);
        self
    }
}

/// The hero's active buffs, in application order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuffList {
    buffs: Vec<HeroBuff>,
}

impl BuffList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a buff. Buffs on the same stat stack additively.
    pub fn push(&mut self, buff: HeroBuff) {
        self.buffs.push(buff);
    }

    /// Sum of all buff amounts on a stat.
    #[must_use]
    pub fn bonus(&self, stat: StatKind) -> i32 {
        self.buffs
            .iter()
            .filter(|b| b.stat == stat)
            .map(|b| b.amount)
            .sum()
    }

    /// Age timed buffs and drop the ones that ran out.
    ///
    /// Returns how many buffs expired.
    pub fn tick(&mut self, dt: f32) -> usize {
        let before = self.buffs.len();
        self.buffs.retain_mut(|b| {
            b.duration.tick(dt);
            !b.duration.is_expired()
        });
        before - self.buffs.len()
    }

    /// Remove every buff.
    pub fn clear(&mut self) {
        self.buffs.clear();
    }

    /// Number of active buffs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffs.len()
    }

    /// Whether no buffs are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffs.is_empty()
    }
}
