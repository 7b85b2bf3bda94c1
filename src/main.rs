//! Cargo Bay - command-line entry point.

#![warn(missing_docs)]

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use cargo_bay::{Cli, Command, GameConfig, run_demo, run_tui};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "cargo_bay=info,cargo_bay_store=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Sends logs to `path` so they do not draw over the TUI.
fn init_file_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            seed,
            log_file,
        } => {
            let config = GameConfig::load_or_default(&config)?
                .with_seed(seed)
                .with_log_file(log_file);
            if let Some(path) = config.log_file() {
                init_file_logging(path)?;
            }
            info!(seed = ?config.seed(), "Launching play mode");
            run_tui(config)
        }
        Command::Demo {
            containers,
            seed,
            config,
        } => {
            init_stderr_logging();
            let config = GameConfig::load_or_default(&config)?;
            let mut stdout = std::io::stdout().lock();
            run_demo(&mut stdout, containers, seed, *config.search_target())?;
            Ok(())
        }
    }
}
