//! Tuning constants for the battle lane.
//!
//! Every number the simulation uses lives here so a host can override it from
//! a config file. The defaults are the values the lane ships with.

use lane_common::{ConfigError, LanePosition};
use serde::{Deserialize, Serialize};

/// Tuning parameters for one battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    // === Layout ===
    /// Y coordinate of the ground plane
    pub ground_y: f32,
    /// Fixed x coordinate of the hero
    pub hero_x: f32,
    /// Base x coordinate for new enemies
    pub enemy_spawn_x: f32,
    /// Random jitter added to the spawn x, in `[0, jitter)`
    pub enemy_spawn_jitter: f32,
    /// Where the "enemy incoming" banner appears
    pub spawn_banner: LanePosition,

    // === Ranges ===
    /// Hero stops running when a living enemy is closer than this
    pub engagement_range: f32,
    /// Attacks land when the gap is smaller than this
    pub melee_range: f32,
    /// Enemies stop advancing once within this distance of the hero
    pub enemy_stop_offset: f32,

    // === Hero ===
    /// Hero max hp at level 0
    pub hero_base_hp: i32,
    /// Extra max hp per hero level
    pub hero_hp_per_level: i32,
    /// Hero running speed with zero speed points
    pub hero_base_speed: i32,
    /// Running speed gained per speed point
    pub hero_speed_per_point: i32,
    /// Attack cooldown with zero speed points
    pub hero_base_cooldown: f32,
    /// Cooldown reduction per speed point
    pub hero_cooldown_per_point: f32,
    /// Cooldown floor
    pub hero_min_cooldown: f32,
    /// Seconds between death and respawn
    pub respawn_time: f32,
    /// Fraction of max hp removed by a fatigue pulse
    pub fatigue_fraction: f32,

    // === Enemies ===
    /// Enemy max hp at level 0
    pub enemy_base_hp: i32,
    /// Extra enemy hp per level
    pub enemy_hp_per_level: i32,
    /// Enemy attack at level 0
    pub enemy_base_attack: i32,
    /// Enemy speed at level 0
    pub enemy_base_speed: i32,
    /// Seconds between enemy swings
    pub enemy_attack_cooldown: f32,
    /// Seconds a dead enemy stays on the lane
    pub death_fade: f32,

    // === Cosmetics ===
    /// Lifetime of floating texts
    pub floating_text_life: f32,
    /// Upward drift of floating texts, units per second
    pub floating_text_drift: f32,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            // Layout
            ground_y: 200.0,
            hero_x: 80.0,
            enemy_spawn_x: 600.0,
            enemy_spawn_jitter: 100.0,
            spawn_banner: LanePosition::new(500.0, 140.0),

            // Ranges
            engagement_range: 120.0,
            melee_range: 80.0,
            enemy_stop_offset: 50.0,

            // Hero
            hero_base_hp: 100,
            hero_hp_per_level: 10,
            hero_base_speed: 30,
            hero_speed_per_point: 5,
            hero_base_cooldown: 1.2,
            hero_cooldown_per_point: 0.05,
            hero_min_cooldown: 0.4,
            respawn_time: 2.0,
            fatigue_fraction: 0.15,

            // Enemies
            enemy_base_hp: 30,
            enemy_hp_per_level: 8,
            enemy_base_attack: 4,
            enemy_base_speed: 20,
            enemy_attack_cooldown: 1.5,
            death_fade: 0.5,

            // Cosmetics
            floating_text_life: 1.2,
            floating_text_drift: 30.0,
        }
    }
}

impl BattleConfig {
    /// Hero max hp for a progression level.
    #[must_use]
    pub fn hero_max_hp(&self, level: i32) -> i32 {
        self.hero_base_hp + level * self.hero_hp_per_level
    }

    /// Hero running speed for a number of speed points.
    #[must_use]
    pub fn hero_speed(&self, speed_points: i32) -> i32 {
        (self.hero_base_speed + speed_points * self.hero_speed_per_point).max(0)
    }

    /// Hero attack cooldown for a number of speed points.
    #[must_use]
    pub fn hero_cooldown(&self, speed_points: i32) -> f32 {
        (self.hero_base_cooldown - speed_points as f32 * self.hero_cooldown_per_point)
            .max(self.hero_min_cooldown)
    }

    /// Checks that the values can drive a simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("must be a positive number, got {value}"),
                })
            }
        }

        positive("melee_range", self.melee_range)?;
        positive("engagement_range", self.engagement_range)?;
        positive("hero_min_cooldown", self.hero_min_cooldown)?;
        positive("enemy_attack_cooldown", self.enemy_attack_cooldown)?;
        positive("respawn_time", self.respawn_time)?;
        positive("death_fade", self.death_fade)?;
        positive("floating_text_life", self.floating_text_life)?;

        if self.enemy_spawn_jitter < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "enemy_spawn_jitter",
                reason: "must not be negative".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.fatigue_fraction) {
            return Err(ConfigError::InvalidValue {
                field: "fatigue_fraction",
                reason: format!("must be within 0..=1, got {}", self.fatigue_fraction),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(BattleConfig::default().validate().is_ok());
    }

    #[test]
    fn test_hero_formulas() {
        let config = BattleConfig::default();
        assert_eq!(config.hero_max_hp(3), 130);
        assert_eq!(config.hero_speed(2), 40);
        assert_eq!(config.hero_speed(-10), 0);
        assert!((config.hero_cooldown(4) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cooldown_floor() {
        let config = BattleConfig::default();
        assert!((config.hero_cooldown(100) - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_validate_rejects_zero_melee_range() {
        let config = BattleConfig {
            melee_range: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "melee_range",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_fatigue_fraction() {
        let config = BattleConfig {
            fatigue_fraction: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
