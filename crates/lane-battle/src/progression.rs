//! Progression snapshot handed in by the host.

use serde::{Deserialize, Serialize};

/// The leveling state the simulation reads but never changes.
///
/// The host owns the leveling curve; the lane only needs the level and the
/// three stat totals. Field aliases accept the host's wire names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    /// Hero level
    pub level: i32,
    /// Total attack (base + items + level bonus)
    #[serde(alias = "total_attack")]
    pub attack: i32,
    /// Total defense
    #[serde(alias = "total_defense")]
    pub defense: i32,
    /// Total speed points
    #[serde(alias = "total_speed")]
    pub speed: i32,
}

impl Progression {
    /// Creates a progression snapshot.
    #[must_use]
    pub const fn new(level: i32, attack: i32, defense: i32, speed: i32) -> Self {
        Self {
            level,
            attack,
            defense,
            speed,
        }
    }
}
