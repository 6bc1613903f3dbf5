//! Phase-specific game states.
//!
//! A game is either in progress or finished, and each phase is its own
//! type: only [`GameInProgress`] accepts moves, and only [`GameFinished`]
//! carries an [`Outcome`]. The human always plays X and moves first; the
//! computer plays O.

use super::action::{Move, MoveError};
#[cfg(debug_assertions)]
use super::invariants::{InvariantSet, NoughtsInvariants};
use super::rules::{has_won, is_draw};
use super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Mark played by the human.
pub const HUMAN: Mark = Mark::X;

/// Mark played by the computer.
pub const COMPUTER: Mark = Mark::O;

/// Whose move the game is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human's move.
    AwaitingPlayerMove,
    /// Waiting for the computer's move.
    AwaitingComputerMove,
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The human completed a line.
    PlayerWin,
    /// The computer completed a line.
    ComputerWin,
    /// The board filled with no line.
    Draw,
}

impl Outcome {
    /// Leaderboard score for this outcome: 1, -1 or 0.
    pub fn score(self) -> i32 {
        match self {
            Outcome::PlayerWin => 1,
            Outcome::ComputerWin => -1,
            Outcome::Draw => 0,
        }
    }

    /// Line announced when the game ends.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::PlayerWin => "Player X wins!",
            Outcome::ComputerWin => "Computer wins!",
            Outcome::Draw => "It's a draw!",
        }
    }

    fn won_by(mark: Mark) -> Self {
        if mark == HUMAN {
            Outcome::PlayerWin
        } else {
            Outcome::ComputerWin
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - can accept moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameInProgress {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) to_move: Mark,
}

impl GameInProgress {
    /// Starts a game on an empty board with the human to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
            to_move: HUMAN,
        }
    }

    /// Makes a move, consuming self and transitioning to the next state.
    ///
    /// The mover's win is checked before the draw, so a move that fills
    /// the board and completes a line is a win.
    ///
    /// # Errors
    ///
    /// [`MoveError::WrongPlayer`] if it is not `action.mark`'s turn,
    /// [`MoveError::SquareOccupied`] if the square is taken, and in debug
    /// builds [`MoveError::InvariantViolation`] if the resulting state is
    /// inconsistent.
    #[instrument(skip(self), fields(mover = %action.mark, position = %action.position))]
    pub fn make_move(self, action: Move) -> Result<GameResult, MoveError> {
        if action.mark != self.to_move {
            return Err(MoveError::WrongPlayer(action.mark));
        }

        let mut game = self;
        game.board.place(action.position, action.mark)?;
        game.history.push(action);

        #[cfg(debug_assertions)]
        NoughtsInvariants::check_all(&game).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(descriptions)
        })?;

        if has_won(&game.board, action.mark) {
            let outcome = Outcome::won_by(action.mark);
            debug!(?outcome, "Game finished");
            return Ok(GameResult::Finished(GameFinished {
                board: game.board,
                history: game.history,
                outcome,
            }));
        }

        if is_draw(&game.board) {
            debug!("Game drawn");
            return Ok(GameResult::Finished(GameFinished {
                board: game.board,
                history: game.history,
                outcome: Outcome::Draw,
            }));
        }

        game.to_move = game.to_move.opponent();
        debug!(phase = ?game.phase(), "Turn passes");
        Ok(GameResult::InProgress(game))
    }

    /// Places the current mover's mark at `position`.
    pub fn play(self, position: Position) -> Result<GameResult, MoveError> {
        let mark = self.to_move;
        self.make_move(Move::new(mark, position))
    }

    /// Returns the mark to move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Whose move the game is waiting for.
    pub fn phase(&self) -> Phase {
        if self.to_move == HUMAN {
            Phase::AwaitingPlayerMove
        } else {
            Phase::AwaitingComputerMove
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Replays moves from the initial state.
    ///
    /// Fails with [`MoveError::GameOver`] if moves remain after the game ends.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<GameResult, MoveError> {
        let mut game = GameInProgress::new();

        for (i, action) in moves.iter().enumerate() {
            match game.make_move(*action)? {
                GameResult::InProgress(g) => game = g,
                finished @ GameResult::Finished(_) if i + 1 == moves.len() => return Ok(finished),
                GameResult::Finished(_) => return Err(MoveError::GameOver),
            }
        }

        Ok(GameResult::InProgress(game))
    }
}

impl Default for GameInProgress {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - the outcome is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameFinished {
    board: Board,
    history: Vec<Move>,
    outcome: Outcome,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the final board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}
