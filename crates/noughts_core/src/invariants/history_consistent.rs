//! History consistency invariant: history length matches occupied squares.

use super::Invariant;
use crate::GameInProgress;

/// Invariant: every occupied square has exactly one move in the history.
pub struct HistoryConsistentInvariant;

impl Invariant<GameInProgress> for HistoryConsistentInvariant {
    fn holds(game: &GameInProgress) -> bool {
        game.history().len() == game.board().occupied_count()
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}
