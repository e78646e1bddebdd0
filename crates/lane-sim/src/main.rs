//! # Lane Sim
//!
//! Headless host for the battle lane. Loads `lane-sim.toml` (or the path
//! given as the first argument), plays the scripted session and prints a
//! JSON summary.
//!
//! Pass `--snapshot` after the config path to also print the final battle
//! state.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lane_sim::{SimConfig, TallySink, CONFIG_FILE};

/// Main entry point.
fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("lane=info".parse()?))
        .init();

    info!("Battle lane sim starting...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| CONFIG_FILE.to_string());
    let want_snapshot = args.any(|a| a == "--snapshot");

    let config = SimConfig::load_from(&path);
    config.validate().context("invalid configuration")?;

    let mut sink = TallySink::default();
    let summary = if want_snapshot {
        let session = lane_sim::play(&config, &mut sink);
        println!("{}", session.state().snapshot_json()?);
        session.finish(&mut sink)
    } else {
        lane_sim::run(&config, &mut sink)
    };

    println!("{}", serde_json::to_string_pretty(&summary)?);
    info!(reports = sink.reports, "Battle lane sim shutdown complete");
    Ok(())
}
