//! Rule-priority move selection for the computer.
//!
//! The computer looks exactly one move ahead. Rules are tried in a fixed
//! order and the first one that applies picks the square:
//!
//! 1. complete a line of its own,
//! 2. block a line the opponent would complete next move,
//! 3. take the center,
//! 4. take the first free corner (top-left, top-right, bottom-left, bottom-right),
//! 5. take the first free square in row-major order.
//!
//! This is beatable by forks. It is deliberately not a full game-tree search.

use crate::rules::has_won;
use crate::{Board, Mark, Position};
use tracing::{debug, instrument};

/// Which rule produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Rule {
    /// Completes a line for the mover.
    WinNow,
    /// Occupies the square the opponent needs to complete a line.
    Block,
    /// Takes the center square.
    Center,
    /// Takes the first free corner.
    Corner,
    /// Takes the first free square.
    Any,
}

/// First empty square (row-major) where `mark` would complete a line.
fn completing_square(board: &Board, mark: Mark) -> Option<Position> {
    board.empty_positions().find(|pos| {
        board
            .with(*pos, mark)
            .is_ok_and(|next| has_won(&next, mark))
    })
}

/// Picks the square for `me` and reports which rule chose it.
///
/// Returns `None` only when the board is full. The board is never mutated.
#[instrument(skip(board), fields(occupied = board.occupied_count()))]
pub fn choose_move_with_rule(board: &Board, me: Mark) -> Option<(Position, Rule)> {
    let choice = if let Some(pos) = completing_square(board, me) {
        Some((pos, Rule::WinNow))
    } else if let Some(pos) = completing_square(board, me.opponent()) {
        Some((pos, Rule::Block))
    } else if board.is_empty(Position::Center) {
        Some((Position::Center, Rule::Center))
    } else if let Some(pos) = Position::CORNERS.into_iter().find(|pos| board.is_empty(*pos)) {
        Some((pos, Rule::Corner))
    } else {
        board.empty_positions().next().map(|pos| (pos, Rule::Any))
    };

    match choice {
        Some((pos, rule)) => debug!(position = %pos, %rule, "Computer chose square"),
        None => debug!("No empty squares left"),
    }
    choice
}

/// Picks the square for `me`.
pub fn choose_move(board: &Board, me: Mark) -> Option<Position> {
    choose_move_with_rule(board, me).map(|(pos, _)| pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_of(marks: &[(Position, Mark)]) -> Board {
        let mut board = Board::new();
        for (pos, mark) in marks {
            board.place(*pos, *mark).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_takes_center() {
        assert_eq!(
            choose_move_with_rule(&Board::new(), Mark::O),
            Some((Position::Center, Rule::Center))
        );
    }

    #[test]
    fn test_win_now_beats_block() {
        // X X . / O O . / . . .
        // O can win at middle-right; X threatens top-right.
        let board = board_of(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::MiddleLeft, Mark::O),
            (Position::Center, Mark::O),
        ]);
        assert_eq!(
            choose_move_with_rule(&board, Mark::O),
            Some((Position::MiddleRight, Rule::WinNow))
        );
    }

    #[test]
    fn test_blocks_opponent_threat() {
        // X . X / . O . / . . .
        let board = board_of(&[
            (Position::TopLeft, Mark::X),
            (Position::TopRight, Mark::X),
            (Position::Center, Mark::O),
        ]);
        assert_eq!(
            choose_move_with_rule(&board, Mark::O),
            Some((Position::TopCenter, Rule::Block))
        );
    }

    #[test]
    fn test_block_picks_first_threat_in_scan_order() {
        // X X . / X O . / . . O  -> threats at top-right and bottom-left
        let board = board_of(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::MiddleLeft, Mark::X),
            (Position::Center, Mark::O),
            (Position::BottomRight, Mark::O),
        ]);
        assert_eq!(choose_move(&board, Mark::O), Some(Position::TopRight));
    }

    #[test]
    fn test_corner_when_center_taken() {
        let board = board_of(&[(Position::Center, Mark::X)]);
        assert_eq!(
            choose_move_with_rule(&board, Mark::O),
            Some((Position::TopLeft, Rule::Corner))
        );
    }

    #[test]
    fn test_corner_order() {
        let board = board_of(&[
            (Position::Center, Mark::X),
            (Position::TopLeft, Mark::O),
            (Position::BottomRight, Mark::X),
        ]);
        // X threatens nothing after O blocks the diagonal; O has no line.
        assert_eq!(
            choose_move_with_rule(&board, Mark::O),
            Some((Position::TopRight, Rule::Corner))
        );
    }

    #[test]
    fn test_any_when_center_and_corners_taken() {
        // X . O / O X X / X . O  -> no line can be completed by either side
        let board = board_of(&[
            (Position::TopLeft, Mark::X),
            (Position::TopRight, Mark::O),
            (Position::MiddleLeft, Mark::O),
            (Position::Center, Mark::X),
            (Position::MiddleRight, Mark::X),
            (Position::BottomLeft, Mark::X),
            (Position::BottomRight, Mark::O),
        ]);
        assert_eq!(
            choose_move_with_rule(&board, Mark::O),
            Some((Position::TopCenter, Rule::Any))
        );
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::new();
        for (i, pos) in Position::ALL.into_iter().enumerate() {
            let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
            board.place(pos, mark).unwrap();
        }
        assert_eq!(choose_move(&board, Mark::O), None);
    }

    #[test]
    fn test_does_not_mutate_board() {
        let board = board_of(&[(Position::TopLeft, Mark::X), (Position::TopCenter, Mark::X)]);
        let before = board;
        let _ = choose_move(&board, Mark::O);
        assert_eq!(board, before);
    }
}
