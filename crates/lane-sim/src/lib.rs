//! # Lane Sim
//!
//! Host-side pieces for driving a battle lane without a browser:
//! - Configuration file loading and saving
//! - Frame clock with dt clamping
//! - A session that injects scripted stimuli and batches rewards

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod session;
pub mod timing;

pub use config::{ScriptEntry, SimConfig, CONFIG_FILE};
pub use session::{play, run, RewardSink, Session, SessionSummary, TallySink};
pub use timing::FrameClock;
