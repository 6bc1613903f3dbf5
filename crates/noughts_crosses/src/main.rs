//! Noughts and Crosses - console game binary.

use anyhow::Result;
use clap::Parser;
use noughts_crosses::{AppConfig, Cli, FileScoreStore, ScoreService, Shell, Terminal};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::resolve(&cli)?;

    initialize_tracing(config.log_filter());
    run(&config)
}

/// Logs go to stderr so they never mix with the game's prompts on stdout.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[instrument(skip_all, fields(leaderboard = %config.leaderboard_path().display()))]
fn run(config: &AppConfig) -> Result<()> {
    info!("Starting noughts and crosses");

    let store = FileScoreStore::new(config.leaderboard_path());
    let label = config.leaderboard_path().display().to_string();
    let mut terminal = Terminal::stdio();

    Shell::new(&mut terminal, ScoreService::new(store), label).run()?;

    info!("Goodbye");
    Ok(())
}
