//! Headless battle session.
//!
//! Plays the host's part: owns the battle state, feeds it clamped frame
//! times, injects scripted stimuli between frames and forwards batched
//! rewards to a [`RewardSink`].

use lane_battle::{tick, BattleState, Progression, RewardBatcher, RewardReport, TickResult};
use serde::Serialize;
use std::collections::VecDeque;
use tracing::{debug, info};

use crate::config::{ScriptEntry, SimConfig};
use crate::timing::FrameClock;

/// Receives batched rewards, standing in for the progression service.
pub trait RewardSink {
    /// Called once per released report.
    fn on_report(&mut self, report: &RewardReport);
}

/// Sink that only keeps running totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TallySink {
    /// Gold received
    pub gold: i64,
    /// Experience received
    pub xp: i64,
    /// Number of reports received
    pub reports: u32,
}

impl RewardSink for TallySink {
    fn on_report(&mut self, report: &RewardReport) {
        self.gold += i64::from(report.gold);
        self.xp += i64::from(report.xp);
        self.reports += 1;
        info!(gold = report.gold, xp = report.xp, streak = report.kill_streak, "Rewards synced");
    }
}

/// What happened over a whole session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionSummary {
    /// Ticks executed
    pub ticks: u64,
    /// Gold earned by kills
    pub gold: i64,
    /// Experience earned by kills
    pub xp: i64,
    /// Hero deaths
    pub deaths: u32,
    /// Longest kill streak seen
    pub best_streak: u32,
    /// Distance at the end of the session
    pub final_distance: f32,
    /// Enemies spawned
    pub enemies_spawned: u64,
}

/// One host session around a battle.
pub struct Session {
    state: BattleState,
    progression: Progression,
    clock: FrameClock,
    batcher: RewardBatcher,
    script: VecDeque<ScriptEntry>,
    elapsed: f32,
    summary: SessionSummary,
}

impl Session {
    /// Build a session from host configuration.
    #[must_use]
    pub fn new(config: &SimConfig) -> Self {
        let state = match config.seed {
            Some(seed) => BattleState::with_seed(&config.progression, config.battle.clone(), seed),
            None => BattleState::with_config(&config.progression, config.battle.clone()),
        };

        let mut script: Vec<ScriptEntry> = config.script.clone();
        script.sort_by(|a, b| a.at.total_cmp(&b.at));

        Self {
            state,
            progression: config.progression,
            clock: FrameClock::new(config.max_frame_dt),
            batcher: RewardBatcher::new(config.report_interval),
            script: script.into(),
            elapsed: 0.0,
            summary: SessionSummary::default(),
        }
    }

    /// Read-only view of the battle, for rendering or inspection.
    #[must_use]
    pub fn state(&self) -> &BattleState {
        &self.state
    }

    /// Seconds of simulated time so far.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Adopt a new progression snapshot (e.g. after a level up).
    pub fn set_progression(&mut self, progression: Progression) {
        self.progression = progression;
        self.state.sync_progression(&progression);
    }

    /// Run one frame at `timestamp` seconds.
    pub fn frame<S: RewardSink>(&mut self, timestamp: f64, sink: &mut S) -> TickResult {
        let dt = self.clock.advance(timestamp);
        self.inject_due_stimuli();

        let result = tick(&mut self.state, &self.progression, dt);
        self.elapsed += dt;
        self.record(&result);

        if let Some(report) = self.batcher.record(&result, dt) {
            sink.on_report(&report);
        }
        result
    }

    /// Send whatever rewards are still pending and return the summary.
    pub fn finish<S: RewardSink>(mut self, sink: &mut S) -> SessionSummary {
        if let Some(report) = self.batcher.flush() {
            if report.gold != 0 || report.xp != 0 {
                sink.on_report(&report);
            }
        }
        self.summary.final_distance = self.state.distance;
        self.summary
    }

    fn inject_due_stimuli(&mut self) {
        while self.script.front().is_some_and(|e| e.at <= self.elapsed) {
            let Some(entry) = self.script.pop_front() else {
                break;
            };
            debug!(at = entry.at, "Injecting scripted stimulus");
            if entry.stimulus.spawn_enemy.is_some() {
                self.summary.enemies_spawned += 1;
            }
            self.state.apply_stimulus(&entry.stimulus);
        }
    }

    fn record(&mut self, result: &TickResult) {
        self.summary.ticks += 1;
        self.summary.gold += i64::from(result.gold_earned);
        self.summary.xp += i64::from(result.xp_earned);
        if result.hero_died {
            self.summary.deaths += 1;
            info!(at = self.elapsed, "Hero fell, respawning");
        }
        self.summary.best_streak = self.summary.best_streak.max(result.kill_streak);
    }
}

/// Play every configured frame and hand back the live session.
pub fn play<S: RewardSink>(config: &SimConfig, sink: &mut S) -> Session {
    let mut session = Session::new(config);
    let interval = config.frame_interval();
    let frames = (f64::from(config.duration_secs) * f64::from(config.frame_rate)).ceil() as u64;

    info!(frames, "Session starting");
    for frame in 0..=frames {
        session.frame(frame as f64 * interval, sink);
    }
    session
}

/// Play a full session as configured.
pub fn run<S: RewardSink>(config: &SimConfig, sink: &mut S) -> SessionSummary {
    let summary = play(config, sink).finish(sink);
    info!(
        gold = summary.gold,
        deaths = summary.deaths,
        best_streak = summary.best_streak,
        "Session finished"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use lane_battle::{SpawnRequest, Stimulus};

    fn config() -> SimConfig {
        SimConfig {
            seed: Some(5),
            script: Vec::new(),
            ..SimConfig::default()
        }
    }

    fn spawn_at(at: f32, level: i32) -> ScriptEntry {
        ScriptEntry::new(
            at,
            Stimulus {
                spawn_enemy: Some(SpawnRequest {
                    level,
                    stat_modifier: None,
                }),
                ..Stimulus::default()
            },
        )
    }

    #[test]
    fn test_empty_script_just_runs() {
        let config = SimConfig {
            duration_secs: 2.0,
            ..config()
        };
        let mut sink = TallySink::default();
        let summary = run(&config, &mut sink);

        assert_eq!(summary.ticks, 121);
        assert_eq!(summary.gold, 0);
        assert!(summary.final_distance > 55.0);
        assert_eq!(sink.reports, 0);
    }

    #[test]
    fn test_script_is_sorted_and_injected_once() {
        let config = SimConfig {
            duration_secs: 1.0,
            script: vec![spawn_at(0.5, 2), spawn_at(0.0, 1)],
            ..config()
        };
        let mut session = Session::new(&config);
        let mut sink = TallySink::default();

        session.frame(0.0, &mut sink);
        assert_eq!(session.state().enemies.len(), 1);
        assert_eq!(session.state().enemies[0].level, 1);

        for i in 1..=60 {
            session.frame(f64::from(i) / 60.0, &mut sink);
        }
        assert_eq!(session.state().enemies.len(), 2);
        assert_eq!(session.finish(&mut sink).enemies_spawned, 2);
    }

    #[test]
    fn test_kills_reach_the_sink() {
        let config = SimConfig {
            duration_secs: 40.0,
            script: vec![spawn_at(0.0, 1)],
            ..config()
        };
        let mut sink = TallySink::default();
        let summary = run(&config, &mut sink);

        assert_eq!(summary.gold, 5);
        assert_eq!(summary.xp, 15);
        assert_eq!(sink.gold, 5);
        assert_eq!(sink.xp, 15);
        assert_eq!(summary.best_streak, 1);
    }

    #[test]
    fn test_stall_is_clamped() {
        let mut session = Session::new(&config());
        let mut sink = TallySink::default();
        session.frame(0.0, &mut sink);
        session.frame(5.0, &mut sink);
        assert!((session.elapsed() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_set_progression_syncs_hero() {
        let mut session = Session::new(&config());
        session.set_progression(Progression::new(4, 20, 8, 2));
        assert_eq!(session.state().hero.body.max_hp, 140);
        assert_eq!(session.state().hero.body.attack, 20);
    }
}
