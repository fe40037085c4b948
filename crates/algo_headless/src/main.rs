//! Headless match agent.
//!
//! Plays one match against the engine connected to stdin/stdout.
//!
//! # Usage
//!
//! ```bash
//! # Stock policy, fixed seed
//! cargo run -p algo_headless -- --seed 42
//!
//! # Policy loaded from RON, debug logs
//! cargo run -p algo_headless -- --config algo.ron --verbose
//! ```
//!
//! # Protocol
//!
//! Input (stdin): game configuration, then frames, one JSON object per line
//! Output (stdout): two JSON lines per turn (build, deploy)
//! Logs (stderr): Debug information

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use algo_core::config::AlgoConfig;
use algo_headless::runner::AlgoRunner;

#[derive(Parser)]
#[command(name = "algo_headless")]
#[command(about = "Turn-based tower-defense agent speaking the engine's JSON line protocol")]
#[command(version)]
struct Cli {
    /// Enable verbose logging to stderr
    #[arg(short, long)]
    verbose: bool,

    /// RON policy file (defaults to the built-in policy)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the planner's random choices
    #[arg(long, default_value = "0")]
    seed: u64,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging to stderr (stdout is for protocol)
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(false),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    let config = match &cli.config {
        Some(path) => match AlgoConfig::load(path) {
            Ok(config) => {
                tracing::info!("Loaded policy from {}", path.display());
                config
            }
            Err(e) => {
                tracing::error!("Failed to load policy: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => AlgoConfig::default(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut runner = AlgoRunner::new(stdin.lock(), stdout.lock(), config, cli.seed);

    match runner.run() {
        Ok(summary) => {
            tracing::info!(
                turns = summary.turns_played,
                game_over = summary.game_over,
                "Agent exiting"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Match aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}
