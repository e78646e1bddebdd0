//! Simulation host configuration.
//!
//! Loaded from `lane-sim.toml`. Missing files or broken values fall back to
//! defaults so a bare `lane-sim` run always has something to play.

use lane_battle::{
    BattleConfig, BuffRequest, EnemyModifier, Progression, SpawnRequest, StatKind, Stimulus,
};
use lane_common::{ConfigError, LaneResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Default configuration file name.
pub const CONFIG_FILE: &str = "lane-sim.toml";

/// A stimulus the host injects at a fixed session time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptEntry {
    /// Session time in seconds
    pub at: f32,
    /// What to inject
    #[serde(flatten)]
    pub stimulus: Stimulus,
}

impl ScriptEntry {
    /// Creates a script entry.
    #[must_use]
    pub fn new(at: f32, stimulus: Stimulus) -> Self {
        Self { at, stimulus }
    }
}

/// Host configuration parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Timing ===
    /// Simulated frames per second
    pub frame_rate: u32,
    /// Largest dt handed to the engine
    pub max_frame_dt: f32,
    /// Session length in seconds
    pub duration_secs: f32,
    /// Seconds between reward reports
    pub report_interval: f32,

    // === Battle ===
    /// Spawn jitter seed (None = random)
    pub seed: Option<u64>,
    /// Progression snapshot the hero is built from
    pub progression: Progression,
    /// Battle tuning
    pub battle: BattleConfig,

    // === Script ===
    /// Timed stimuli, in any order
    pub script: Vec<ScriptEntry>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            // Timing
            frame_rate: 60,
            max_frame_dt: 0.1,
            duration_secs: 60.0,
            report_interval: 2.0,

            // Battle
            seed: None,
            progression: Progression::new(1, 10, 5, 0),
            battle: BattleConfig::default(),

            // Script
            script: default_script(),
        }
    }
}

/// A short demo: a few enemies, a buff, a fatigue pulse and a heal.
fn default_script() -> Vec<ScriptEntry> {
    let spawn = |level, stat_modifier| Stimulus {
        spawn_enemy: Some(SpawnRequest {
            level,
            stat_modifier,
        }),
        ..Stimulus::default()
    };
    vec![
        ScriptEntry::new(0.0, spawn(1, None)),
        ScriptEntry::new(6.0, spawn(2, Some(EnemyModifier::new(2, 0, 0)))),
        ScriptEntry::new(
            8.0,
            Stimulus {
                hero_buffs: vec![BuffRequest {
                    stat: StatKind::Attack,
                    amount: 3,
                    label: "On time".to_string(),
                }],
                ..Stimulus::default()
            },
        ),
        ScriptEntry::new(15.0, spawn(3, Some(EnemyModifier::new(0, -1, -2)))),
        ScriptEntry::new(
            25.0,
            Stimulus {
                pending_fatigue: true,
                ..Stimulus::default()
            },
        ),
        ScriptEntry::new(30.0, spawn(4, None)),
        ScriptEntry::new(
            32.0,
            Stimulus {
                pending_heal: true,
                ..Stimulus::default()
            },
        ),
    ]
}

impl SimConfig {
    /// Load configuration from a path, falling back to defaults on any error.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file not found, using defaults");
            return Self::default();
        }

        match Self::try_load_from(path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Failed to load config file: {e}");
                Self::default()
            }
        }
    }

    /// Load and validate configuration from a path.
    pub fn try_load_from<P: AsRef<Path>>(path: P) -> LaneResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> LaneResult<()> {
        let path = path.as_ref();

        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self).map_err(ConfigError::from)?;
        fs::write(path, contents)?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Check the values can drive a session.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_rate == 0 {
            return Err(ConfigError::InvalidValue {
                field: "frame_rate",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.max_frame_dt.is_nan() || self.max_frame_dt <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "max_frame_dt",
                reason: format!("must be positive, got {}", self.max_frame_dt),
            });
        }
        if self.duration_secs < 0.0 || self.report_interval < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "duration_secs",
                reason: "durations must not be negative".to_string(),
            });
        }
        if let Some(entry) = self.script.iter().find(|e| e.at < 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "script",
                reason: format!("entry scheduled at negative time {}", entry.at),
            });
        }
        self.battle.validate()
    }

    /// Seconds between simulated frames.
    #[must_use]
    pub fn frame_interval(&self) -> f64 {
        1.0 / f64::from(self.frame_rate.max(1))
    }
}
