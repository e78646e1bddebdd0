//! Reward batching for the host.
//!
//! Kills produce gold and experience every few seconds at most, but the
//! progression service should not be called every frame. [`RewardBatcher`]
//! collects tick results and releases one [`RewardReport`] per interval.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::tick::TickResult;

/// Default seconds between reward reports.
pub const DEFAULT_REPORT_INTERVAL: f32 = 2.0;

/// Rewards ready to be synced with the progression owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardReport {
    /// Gold earned since the previous report
    pub gold: i32,
    /// Experience earned since the previous report
    pub xp: i32,
    /// Kill streak at report time
    pub kill_streak: u32,
    /// Hero deaths since the previous report
    pub deaths: u32,
}

/// Accumulates tick results between reports.
#[derive(Debug, Clone)]
pub struct RewardBatcher {
    interval: f32,
    elapsed: f32,
    pending: RewardReport,
}

impl Default for RewardBatcher {
    fn default() -> Self {
        Self::new(DEFAULT_REPORT_INTERVAL)
    }
}

impl RewardBatcher {
    /// Create a batcher that reports at most every `interval` seconds.
    #[must_use]
    pub fn new(interval: f32) -> Self {
        Self {
            interval: interval.max(0.0),
            elapsed: 0.0,
            pending: RewardReport::default(),
        }
    }

    /// Fold in one tick. Returns a report once the interval has elapsed and
    /// some gold or experience is waiting.
    pub fn record(&mut self, result: &TickResult, dt: f32) -> Option<RewardReport> {
        self.elapsed += dt;
        if result.has_rewards() {
            self.pending.gold += result.gold_earned;
            self.pending.xp += result.xp_earned;
        }
        self.pending.kill_streak = result.kill_streak;
        if result.hero_died {
            self.pending.deaths += 1;
        }

        if self.elapsed >= self.interval && self.has_pending_rewards() {
            self.elapsed = 0.0;
            let report = self.take();
            debug!(gold = report.gold, xp = report.xp, "Reward report ready");
            return Some(report);
        }
        None
    }

    /// Release whatever is pending regardless of the interval.
    pub fn flush(&mut self) -> Option<RewardReport> {
        if !self.has_pending_rewards() && self.pending.deaths == 0 {
            return None;
        }
        self.elapsed = 0.0;
        Some(self.take())
    }

    /// Latest kill streak seen.
    #[must_use]
    pub fn kill_streak(&self) -> u32 {
        self.pending.kill_streak
    }

    fn has_pending_rewards(&self) -> bool {
        self.pending.gold != 0 || self.pending.xp != 0
    }

    fn take(&mut self) -> RewardReport {
        let report = self.pending;
        self.pending = RewardReport {
            kill_streak: report.kill_streak,
            ..RewardReport::default()
        };
        report
    }
}
