//! Leaderboard persistence.
//!
//! The leaderboard is a flat JSON object of player name to score, stored
//! whole: every save rewrites the entire file.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Leaderboard error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Leaderboard error: {} at {}:{}", message, file, line)]
pub struct LeaderboardError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl LeaderboardError {
    /// Creates a new leaderboard error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Player name to score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    scores: BTreeMap<String, i32>,
}

impl Leaderboard {
    /// Creates an empty leaderboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name`'s score, replacing any earlier one.
    pub fn set(&mut self, name: impl Into<String>, score: i32) -> Option<i32> {
        self.scores.insert(name.into(), score)
    }

    /// Score recorded for `name`.
    pub fn get(&self, name: &str) -> Option<i32> {
        self.scores.get(name).copied()
    }

    /// Number of recorded players.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True when nobody has a score.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Entries ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.scores.iter().map(|(name, score)| (name.as_str(), *score))
    }

    /// Entries ordered by score (highest first), then by name.
    pub fn standings(&self) -> Vec<(&str, i32)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

impl FromIterator<(String, i32)> for Leaderboard {
    fn from_iter<T: IntoIterator<Item = (String, i32)>>(iter: T) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

/// Whole-snapshot key-value storage for a [`Leaderboard`].
pub trait ScoreStore {
    /// Loads the stored leaderboard.
    ///
    /// Missing or unreadable data loads as an empty leaderboard.
    fn load(&self) -> Leaderboard;

    /// Replaces the stored leaderboard with `leaderboard`.
    fn save(&self, leaderboard: &Leaderboard) -> Result<(), LeaderboardError>;
}

/// [`ScoreStore`] backed by a JSON file.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct FileScoreStore {
    /// Path of the backing file.
    path: PathBuf,
}

impl FileScoreStore {
    /// Creates a store for the file at `path`. The file need not exist yet.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ScoreStore for FileScoreStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Leaderboard {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No leaderboard file yet");
                return Leaderboard::new();
            }
            Err(e) => {
                warn!(error = %e, "Could not read leaderboard, treating as empty");
                return Leaderboard::new();
            }
        };

        match serde_json::from_str::<Leaderboard>(&content) {
            Ok(leaderboard) => {
                debug!(entries = leaderboard.len(), "Leaderboard loaded");
                leaderboard
            }
            Err(e) => {
                warn!(error = %e, "Leaderboard file is malformed, treating as empty");
                Leaderboard::new()
            }
        }
    }

    #[instrument(
        skip(self, leaderboard),
        fields(path = %self.path.display(), entries = leaderboard.len())
    )]
    fn save(&self, leaderboard: &Leaderboard) -> Result<(), LeaderboardError> {
        let json = serde_json::to_string(leaderboard)
            .map_err(|e| LeaderboardError::new(format!("Failed to encode leaderboard: {}", e)))?;
        std::fs::write(&self.path, json).map_err(|e| {
            LeaderboardError::new(format!(
                "Failed to write {}: {}",
                self.path.display(),
                e
            ))
        })?;
        info!("Leaderboard saved");
        Ok(())
    }
}
