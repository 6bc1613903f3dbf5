//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::{GameInProgress, Mark};

/// Invariant: marks alternate, X moves first, and the mark to move follows
/// from the history length.
pub struct AlternatingTurnInvariant;

impl Invariant<GameInProgress> for AlternatingTurnInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let history = game.history();

        if history.first().is_some_and(|first| first.mark != Mark::X) {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].mark == pair[1].mark) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 { Mark::X } else { Mark::O };
        game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Marks alternate turns (X, O, X, O, ...)"
    }
}
