//! Command-line interface for strictly_timeline.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Timeline - tic-tac-toe with time travel in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_timeline")]
#[command(about = "Play tic-tac-toe and jump back to any earlier move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log file (overrides the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. "debug" or "strictly_timeline=trace"
    #[arg(long)]
    pub log_filter: Option<String>,
}
