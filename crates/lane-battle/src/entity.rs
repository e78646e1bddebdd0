//! Combatants on the lane.
//!
//! Plain data records for the hero and the enemies. Behaviour lives in the
//! tick engine; the helpers here only build records and answer simple
//! questions about them.

use lane_common::{EnemyId, Extent, LanePosition};
use serde::{Deserialize, Serialize};

use crate::config::BattleConfig;
use crate::progression::Progression;

/// Hero bounding box.
const HERO_EXTENT: Extent = Extent::new(28.0, 36.0);

/// Enemy bounding box.
const ENEMY_EXTENT: Extent = Extent::new(26.0, 32.0);

/// Shape shared by every fighter on the lane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    /// Position on the lane
    pub position: LanePosition,
    /// Current hit points
    pub hp: i32,
    /// Maximum hit points
    pub max_hp: i32,
    /// Attack power
    pub attack: i32,
    /// Defense value
    pub defense: i32,
    /// Movement speed in lane units per second
    pub speed: i32,
    /// Seconds between attacks
    pub attack_cooldown: f32,
    /// Seconds until the next attack is ready (may dip below zero)
    pub attack_timer: f32,
    /// Bounding box
    pub extent: Extent,
    /// Cosmetic facing
    pub facing_right: bool,
}

impl Combatant {
    /// Hit points as a fraction of max (0.0-1.0).
    #[must_use]
    pub fn hp_percent(&self) -> f32 {
        if self.max_hp <= 0 {
            0.0
        } else {
            (self.hp as f32 / self.max_hp as f32).clamp(0.0, 1.0)
        }
    }

    /// Signed horizontal gap to another combatant.
    #[must_use]
    pub fn gap_to(&self, other: &Combatant) -> f32 {
        self.position.gap_to(&other.position)
    }
}

/// The player's hero. Exactly one per battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    /// Shared combat fields
    pub body: Combatant,
    /// Whether the hero is alive
    pub alive: bool,
    /// Seconds until respawn while dead
    pub respawn_timer: f32,
}

impl Hero {
    /// Build a fresh, full-health hero for a progression snapshot.
    #[must_use]
    pub fn from_progression(progression: &Progression, config: &BattleConfig) -> Self {
        let max_hp = config.hero_max_hp(progression.level);
        Self {
            body: Combatant {
                position: LanePosition::new(config.hero_x, config.ground_y),
                hp: max_hp,
                max_hp,
                attack: progression.attack,
                defense: progression.defense,
                speed: config.hero_speed(progression.speed),
                attack_cooldown: config.hero_cooldown(progression.speed),
                attack_timer: 0.0,
                extent: HERO_EXTENT,
                facing_right: true,
            },
            alive: true,
            respawn_timer: 0.0,
        }
    }

    /// Set the effective combat stats from totals that already include buffs.
    pub fn set_effective_stats(
        &mut self,
        attack: i32,
        defense: i32,
        speed_points: i32,
        config: &BattleConfig,
    ) {
        self.body.attack = attack;
        self.body.defense = defense;
        self.body.speed = config.hero_speed(speed_points);
        self.body.attack_cooldown = config.hero_cooldown(speed_points);
    }

    /// Replace every field with a freshly built hero, keeping this instance.
    pub fn reset(&mut self, progression: &Progression, config: &BattleConfig) {
        *self = Self::from_progression(progression, config);
    }
}

/// Per-stat offsets applied to an enemy at spawn time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyModifier {
    /// Attack offset
    pub attack: i32,
    /// Defense offset
    pub defense: i32,
    /// Speed offset
    pub speed: i32,
}

impl EnemyModifier {
    /// Creates a modifier.
    #[must_use]
    pub const fn new(attack: i32, defense: i32, speed: i32) -> Self {
        Self {
            attack,
            defense,
            speed,
        }
    }

    /// Sum of all offsets; its sign decides "strengthened" vs "weakened".
    #[must_use]
    pub const fn net(&self) -> i32 {
        self.attack + self.defense + self.speed
    }
}

/// Fortune of a spawned enemy relative to its level baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpawnVariant {
    /// No net modifier.
    Normal,
    /// Net positive modifier.
    Strengthened,
    /// Net negative modifier.
    Weakened,
}

impl SpawnVariant {
    /// Classify a modifier.
    #[must_use]
    pub fn of(modifier: &EnemyModifier) -> Self {
        match modifier.net() {
            n if n > 0 => Self::Strengthened,
            n if n < 0 => Self::Weakened,
            _ => Self::Normal,
        }
    }

    /// Label shown in the spawn banner, empty for normal enemies.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "",
            Self::Strengthened => "Strengthened",
            Self::Weakened => "Weakened",
        }
    }
}

/// An enemy walking towards the hero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// Unique id within the battle
    pub id: EnemyId,
    /// Shared combat fields
    pub body: Combatant,
    /// Enemy level
    pub level: i32,
    /// Gold paid out on death, fixed at spawn
    pub gold_reward: i32,
    /// Experience paid out on death, fixed at spawn
    pub xp_reward: i32,
    /// Whether the enemy has been killed
    pub dead: bool,
    /// Fade-out seconds left once dead
    pub death_timer: f32,
}

impl Enemy {
    /// Build an enemy of `level` at horizontal position `x`.
    ///
    /// Stats are clamped instead of rejected, so any level is accepted.
    #[must_use]
    pub fn spawn(
        id: EnemyId,
        level: i32,
        modifier: &EnemyModifier,
        x: f32,
        config: &BattleConfig,
    ) -> Self {
        let max_hp = config.enemy_base_hp + level * config.enemy_hp_per_level;
        Self {
            id,
            body: Combatant {
                position: LanePosition::new(x, config.ground_y),
                hp: max_hp,
                max_hp,
                attack: (config.enemy_base_attack + 2 * level + modifier.attack).max(1),
                defense: (level.div_euclid(2) + modifier.defense).max(0),
                speed: (config.enemy_base_speed + 2 * level + modifier.speed).max(5),
                attack_cooldown: config.enemy_attack_cooldown,
                attack_timer: 0.0,
                extent: ENEMY_EXTENT,
                facing_right: false,
            },
            level,
            gold_reward: Self::gold_for_level(level),
            xp_reward: Self::xp_for_level(level),
            dead: false,
            death_timer: 0.0,
        }
    }

    /// Gold reward for an enemy of `level`.
    #[must_use]
    pub const fn gold_for_level(level: i32) -> i32 {
        3 + 2 * level
    }

    /// Experience reward for an enemy of `level`.
    #[must_use]
    pub const fn xp_for_level(level: i32) -> i32 {
        10 + 5 * level
    }

    /// Whether the enemy can still move and fight.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        !self.dead
    }

    /// Whether the enemy is dead and its fade window has elapsed.
    #[must_use]
    pub fn is_faded(&self) -> bool {
        self.dead && self.death_timer <= 0.0
    }

    /// Mark dead and start the fade window.
    pub fn kill(&mut self, fade: f32) {
        self.body.hp = self.body.hp.max(0);
        self.dead = true;
        self.death_timer = fade;
    }
}
