//! Invariants over games in progress.
//!
//! Each invariant is a logical property that must hold after every move.
//! [`GameInProgress::make_move`](crate::GameInProgress::make_move) checks the
//! whole set in debug builds.

mod alternating_turn;
mod history_consistent;
mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

/// A set of invariants checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description().to_string()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description().to_string()));
        }
        collect(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match <(I1, I2) as InvariantSet<S>>::check_all(state) {
            Ok(()) => Vec::new(),
            Err(found) => found,
        };
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description().to_string()));
        }
        collect(violations)
    }
}

/// Every invariant a game in progress must satisfy.
pub type NoughtsInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameInProgress, GameResult, Mark, Move, Position};

    #[test]
    fn test_invariant_set_holds_for_empty_game() {
        assert!(NoughtsInvariants::check_all(&GameInProgress::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let moves = [
            Move::new(Mark::X, Position::TopLeft),
            Move::new(Mark::O, Position::Center),
            Move::new(Mark::X, Position::TopRight),
        ];
        let Ok(GameResult::InProgress(game)) = GameInProgress::replay(&moves) else {
            panic!("Expected in-progress game");
        };
        assert!(NoughtsInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        // A board mark with no history entry, and O to move on an empty history.
        let mut board = Board::new();
        board.place(Position::TopLeft, Mark::O).unwrap();
        let game = GameInProgress {
            board,
            history: Vec::new(),
            to_move: Mark::O,
        };
        let violations = NoughtsInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 3);
    }
}
