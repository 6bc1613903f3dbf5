//! Human player typing square numbers at the console.

use super::{PlayError, Player};
use crate::console::Console;
use noughts_core::{Board, Mark, Position};
use tracing::{debug, instrument};

/// Prompt shown before each move.
pub const MOVE_PROMPT: &str = "Enter your move (1-9): ";

/// Why a line of input was not accepted as a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// Not a whole number.
    #[display("Please enter a number from 1 to 9.")]
    NotANumber,
    /// A number outside 1-9.
    #[display("There is no square {}. Choose 1-9.", _0)]
    OutOfRange(i64),
    /// The square already holds a mark.
    #[display("Square {} is already taken.", _0)]
    Occupied(u32),
}

/// Interprets one line of input as a move on `board`.
pub fn parse_move(input: &str, board: &Board) -> Result<Position, Rejection> {
    let number: i64 = input.trim().parse().map_err(|_| Rejection::NotANumber)?;
    let position = u32::try_from(number)
        .ok()
        .and_then(Position::from_keypad)
        .ok_or(Rejection::OutOfRange(number))?;
    if !board.is_empty(position) {
        return Err(Rejection::Occupied(position.keypad()));
    }
    Ok(position)
}

/// Human player using console input.
#[derive(Debug, Clone, derive_new::new)]
pub struct HumanPlayer {
    #[new(into)]
    name: String,
}

impl Player for HumanPlayer {
    #[instrument(skip(self, board, console), fields(player = %self.name))]
    fn choose_move(
        &mut self,
        board: &Board,
        _mark: Mark,
        console: &mut dyn Console,
    ) -> Result<Position, PlayError> {
        loop {
            let line = console.prompt(MOVE_PROMPT)?;
            match parse_move(&line, board) {
                Ok(position) => return Ok(position),
                Err(rejection) => {
                    debug!(%line, ?rejection, "Rejected move input");
                    console.say(&rejection.to_string())?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
