//! # Lane Battle
//!
//! Real-time combat simulation for the battle lane side-game.
//!
//! This crate provides the deterministic simulation core:
//! - Entities (hero, enemies) and floating texts
//! - Hero buffs and debuffs
//! - The battle state container
//! - Stimulus API (spawn enemies, grant buffs, heal/fatigue pulses)
//! - Tick engine (buffs, movement, combat, death and respawn)
//! - Reward batching for the host
//!
//! The host owns one [`BattleState`] per session, calls the stimulus methods
//! between frames and [`tick`] once per frame.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod buffs;
pub mod config;
pub mod damage;
pub mod entity;
pub mod floating_text;
pub mod progression;
pub mod reward;
pub mod state;
pub mod stimulus;
pub mod tick;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::buffs::*;
    pub use crate::config::*;
    pub use crate::damage::*;
    pub use crate::entity::*;
    pub use crate::floating_text::*;
    pub use crate::progression::*;
    pub use crate::reward::*;
    pub use crate::state::*;
    pub use crate::stimulus::*;
    pub use crate::tick::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_round() {
        let progression = Progression::new(1, 10, 5, 0);
        let mut state = BattleState::with_seed(&progression, BattleConfig::default(), 3);
        let mut batcher = RewardBatcher::default();

        state.spawn_enemy(1, None);
        let mut gold = 0;
        for _ in 0..800 {
            let result = tick(&mut state, &progression, 0.05);
            if let Some(report) = batcher.record(&result, 0.05) {
                gold += report.gold;
            }
        }
        if let Some(report) = batcher.flush() {
            gold += report.gold;
        }

        assert_eq!(gold, 5);
        assert_eq!(state.kill_streak(), 1);
        assert!(state.enemies.is_empty());
    }
}
