//! Console noughts and crosses.
//!
//! A human (X) plays the rule-based computer (O) from a text menu. Results
//! can be saved to a leaderboard file and listed again later.
//!
//! # Architecture
//!
//! - **Shell**: menu loop dispatching to games and the leaderboard
//! - **Orchestrator**: runs one game between two [`Player`]s
//! - **Players**: console-driven human, heuristic-driven computer
//! - **Leaderboard**: JSON name-to-score file behind [`ScoreStore`]
//!
//! # Example
//!
//! ```no_run
//! use noughts_crosses::{FileScoreStore, ScoreService, Shell, Terminal};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut terminal = Terminal::stdio();
//! let scores = ScoreService::new(FileScoreStore::new("leaderboard.txt"));
//! Shell::new(&mut terminal, scores, "leaderboard.txt").run()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod leaderboard;
mod orchestrator;
mod players;
mod score_service;
mod shell;

pub use cli::Cli;
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH};
pub use console::{Console, ConsoleError, Terminal};
pub use leaderboard::{FileScoreStore, Leaderboard, LeaderboardError, ScoreStore};
pub use orchestrator::Orchestrator;
pub use players::{ComputerPlayer, HumanPlayer, PlayError, Player};
pub use players::human::{MOVE_PROMPT, Rejection, parse_move};
pub use score_service::ScoreService;
pub use shell::{CHOICE_PROMPT, MenuChoice, NAME_PROMPT, Shell, WELCOME};
