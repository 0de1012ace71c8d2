//! Crashgauge CLI
//!
//! Evaluates a snapshot of indicator readings and prints the breakdown.
//!
//! Usage:
//!   crashgauge --snapshot readings.json [--config crashgauge.json] [--format text]

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use crashgauge_clock::{FixedClock, SystemClock};
use crashgauge_ports::Clock;
use crashgauge_runner::{
    OutputFormat, Snapshot, SnapshotSource, load_config, load_default_config, render,
};
use log::info;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "crashgauge")]
#[command(about = "Composite market crash-risk score from a snapshot of indicators")]
struct Args {
    /// Snapshot JSON produced by the indicator fetchers
    #[arg(long)]
    snapshot: PathBuf,

    /// Configuration file (defaults to the embedded configuration)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Judge staleness as of this RFC 3339 time instead of now
    #[arg(long)]
    at: Option<DateTime<Utc>>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => load_default_config().context("loading embedded config")?,
    };
    let (engine, profiles) = config.build().context("validating config")?;

    let snapshot = Snapshot::load(&args.snapshot)
        .with_context(|| format!("loading snapshot {}", args.snapshot.display()))?;
    info!(
        "Loaded snapshot as of {} with {} entries",
        snapshot.as_of,
        snapshot.readings.len()
    );

    let clock: Arc<dyn Clock> = match args.at {
        Some(at) => Arc::new(FixedClock::new(at)),
        None => Arc::new(SystemClock::new()),
    };
    let source =
        SnapshotSource::new(snapshot, profiles, clock).with_max_age(config.max_reading_age());

    let breakdown = engine.evaluate_source(&source);
    info!("{}", breakdown.headline());

    println!("{}", render(&breakdown, args.format)?);
    Ok(())
}
