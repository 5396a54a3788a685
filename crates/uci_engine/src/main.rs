use std::io;
use std::path::PathBuf;
use std::time::Duration;

use amateur_engine::{AmateurEngine, EngineConfig};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use uci_engine::Session;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file overriding the engine's tuning constants
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // stdout belongs to the protocol; logs go to stderr
    let default_level = if args.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    info!(strength = %config.strength, seed = ?config.seed, "engine configured");

    let default_clock = Duration::from_millis(config.time.default_clock_ms);
    let engine = AmateurEngine::with_config(config);
    let mut session = Session::new(engine, io::stdout(), default_clock);
    session
        .run(io::stdin().lock())
        .context("UCI session failed")?;
    Ok(())
}
