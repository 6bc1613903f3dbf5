//! Win detection.

use crate::{Board, Mark, Position, Square};
use tracing::instrument;

/// Every line that wins: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Number of lines filled entirely with `mark`.
pub fn winning_lines(board: &Board, mark: Mark) -> usize {
    let target = Square::Occupied(mark);
    LINES
        .iter()
        .filter(|line| line.iter().all(|pos| board.get(*pos) == target))
        .count()
}

/// Returns true if any row, column or diagonal is entirely `mark`.
#[instrument(level = "trace")]
pub fn has_won(board: &Board, mark: Mark) -> bool {
    winning_lines(board, mark) > 0
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
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!has_won(&board, Mark::X));
        assert!(!has_won(&board, Mark::O));
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let board = board_of(&line.map(|pos| (pos, Mark::O)));
            assert!(has_won(&board, Mark::O), "line {:?} should win", line);
            assert!(!has_won(&board, Mark::X));
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = board_of(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::O),
            (Position::TopRight, Mark::X),
        ]);
        assert!(!has_won(&board, Mark::X));
        assert!(!has_won(&board, Mark::O));
    }

    #[test]
    fn test_incomplete_line_does_not_win() {
        let board = board_of(&[(Position::TopLeft, Mark::X), (Position::TopCenter, Mark::X)]);
        assert!(!has_won(&board, Mark::X));
    }

    #[test]
    fn test_placing_never_decreases_winning_lines() {
        // A full game where X completes the top row midway.
        let order = [
            (Position::TopLeft, Mark::X),
            (Position::Center, Mark::O),
            (Position::TopCenter, Mark::X),
            (Position::BottomRight, Mark::O),
            (Position::TopRight, Mark::X),
            (Position::MiddleLeft, Mark::O),
            (Position::MiddleRight, Mark::X),
            (Position::BottomLeft, Mark::X),
            (Position::BottomCenter, Mark::O),
        ];
        let mut board = Board::new();
        let mut counts = [0usize; 2];
        for (pos, mark) in order {
            board.place(pos, mark).unwrap();
            let now = [winning_lines(&board, Mark::X), winning_lines(&board, Mark::O)];
            assert!(now[0] >= counts[0] && now[1] >= counts[1]);
            counts = now;
        }
        assert_eq!(counts[0], 1);
    }
}
