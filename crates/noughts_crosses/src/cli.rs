//! Command-line interface for noughts_crosses.

use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;

/// Noughts and Crosses - play against the computer and keep a leaderboard
#[derive(Parser, Debug)]
#[command(name = "noughts_crosses")]
#[command(about = "Noughts and crosses against a rule-based computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Leaderboard file (overrides the config file)
    #[arg(short, long)]
    pub leaderboard: Option<PathBuf>,

    /// Configuration file, ignored if it does not exist
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}
