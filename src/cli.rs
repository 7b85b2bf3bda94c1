//! Command-line interface for cargo_bay.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_FILE;

/// Cargo Bay - learn arrays by loading a starship
#[derive(Parser, Debug)]
#[command(name = "cargo_bay")]
#[command(about = "An educational game about arrays and linear search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the game in the terminal
    Play {
        /// Path to the TOML config file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Seed for reproducible random placement
        #[arg(long)]
        seed: Option<u64>,

        /// Write logs to this file while playing
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Print a scripted walkthrough without the terminal UI
    Demo {
        /// Number of containers to declare
        #[arg(long, default_value = "5", allow_negative_numbers = true)]
        containers: i64,

        /// Seed for the random placement
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Path to the TOML config file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },
}
