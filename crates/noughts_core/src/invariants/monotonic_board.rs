//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::{Board, GameInProgress};

/// Invariant: the board is exactly what replaying the history produces.
///
/// Replaying fails if any move lands on an occupied square, so a board
/// passing this check has never had a square overwritten.
pub struct MonotonicBoardInvariant;

impl Invariant<GameInProgress> for MonotonicBoardInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if reconstructed.place(mov.position, mov.mark).is_err() {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
