//! Draw detection.

use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Returns true when no square is empty.
///
/// Only meaningful after the caller has ruled out a win: a full board
/// with a complete line is a win, not a draw.
#[instrument(level = "trace")]
pub fn is_draw(board: &Board) -> bool {
    is_full(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::has_won;
    use crate::{Mark, Position};

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_draw_iff_nine_occupied() {
        // X O X / X O O / O X X
        #[rustfmt::skip]
        let marks = [
            Mark::X, Mark::O, Mark::X,
            Mark::X, Mark::O, Mark::O,
            Mark::O, Mark::X, Mark::X,
        ];
        let mut board = Board::new();
        for (pos, mark) in Position::ALL.into_iter().zip(marks) {
            assert!(!is_draw(&board));
            assert_eq!(is_draw(&board), board.occupied_count() == 9);
            board.place(pos, mark).unwrap();
        }
        assert_eq!(board.occupied_count(), 9);
        assert!(is_draw(&board));
        assert!(!has_won(&board, Mark::X));
        assert!(!has_won(&board, Mark::O));
    }

    #[test]
    fn test_full_board_with_line_is_full_and_won() {
        // X X X / O O X / X O O
        #[rustfmt::skip]
        let marks = [
            Mark::X, Mark::X, Mark::X,
            Mark::O, Mark::O, Mark::X,
            Mark::X, Mark::O, Mark::O,
        ];
        let mut board = Board::new();
        for (pos, mark) in Position::ALL.into_iter().zip(marks) {
            board.place(pos, mark).unwrap();
        }
        assert!(is_full(&board));
        assert!(has_won(&board, Mark::X));
    }
}
