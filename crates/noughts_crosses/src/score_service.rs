//! Score recording on top of a [`ScoreStore`].

use crate::console::{Console, ConsoleError};
use crate::leaderboard::{Leaderboard, LeaderboardError, ScoreStore};
use tracing::{debug, info, instrument};

/// Service layer for leaderboard operations.
///
/// Every write is load-modify-save of the whole leaderboard. There is no
/// protection against another process writing in between: the last save wins.
#[derive(Debug, Clone)]
pub struct ScoreService<S> {
    store: S,
}

impl<S: ScoreStore> ScoreService<S> {
    /// Creates a service backed by `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Records `score` for `name`, overwriting any earlier score.
    #[instrument(skip(self))]
    pub fn record_score(&self, name: &str, score: i32) -> Result<Leaderboard, LeaderboardError> {
        let mut leaderboard = self.store.load();
        if let Some(previous) = leaderboard.set(name, score) {
            debug!(previous, "Replacing earlier score");
        }
        self.store.save(&leaderboard)?;
        info!(name, score, "Score recorded");
        Ok(leaderboard)
    }

    /// Loads the current leaderboard.
    #[instrument(skip(self))]
    pub fn load_scores(&self) -> Leaderboard {
        self.store.load()
    }

    /// Prints one `name: score` line per entry, best first.
    #[instrument(skip_all)]
    pub fn display(&self, console: &mut dyn Console) -> Result<(), ConsoleError> {
        let leaderboard = self.load_scores();
        if leaderboard.is_empty() {
            return console.say("No scores recorded yet.");
        }
        for (name, score) in leaderboard.standings() {
            console.say(&format!("{}: {}", name, score))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Terminal;
    use std::cell::RefCell;

    /// In-memory store for exercising the service without files.
    #[derive(Default)]
    struct MemoryStore {
        saved: RefCell<Leaderboard>,
        saves: RefCell<usize>,
    }

    impl ScoreStore for MemoryStore {
        fn load(&self) -> Leaderboard {
            self.saved.borrow().clone()
        }

        fn save(&self, leaderboard: &Leaderboard) -> Result<(), LeaderboardError> {
            *self.saved.borrow_mut() = leaderboard.clone();
            *self.saves.borrow_mut() += 1;
            Ok(())
        }
    }

    #[test]
    fn test_record_score_saves_whole_board() {
        let service = ScoreService::new(MemoryStore::default());
        service.record_score("Alice", 1).unwrap();
        service.record_score("Bob", 0).unwrap();
        service.record_score("Alice", -1).unwrap();

        let scores = service.load_scores();
        assert_eq!(scores.get("Alice"), Some(-1));
        assert_eq!(scores.get("Bob"), Some(0));
        assert_eq!(*service.store().saves.borrow(), 3);
    }

    #[test]
    fn test_display_lists_best_first() {
        let service = ScoreService::new(MemoryStore::default());
        service.record_score("Bob", -1).unwrap();
        service.record_score("Alice", 1).unwrap();

        let mut term = Terminal::new("".as_bytes(), Vec::new());
        service.display(&mut term).unwrap();
        let (_, out) = term.into_parts();
        assert_eq!(String::from_utf8(out).unwrap(), "Alice: 1\nBob: -1\n");
    }

    #[test]
    fn test_display_empty() {
        let service = ScoreService::new(MemoryStore::default());
        let mut term = Terminal::new("".as_bytes(), Vec::new());
        service.display(&mut term).unwrap();
        let (_, out) = term.into_parts();
        assert_eq!(String::from_utf8(out).unwrap(), "No scores recorded yet.\n");
    }
}
