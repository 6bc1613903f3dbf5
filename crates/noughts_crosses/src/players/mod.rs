//! Player trait and implementations.

mod computer;
pub(crate) mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::console::{Console, ConsoleError};
use noughts_core::{Board, Mark, MoveError, Position};

/// Failure while obtaining or applying a move.
#[derive(Debug, derive_more::Display)]
pub enum PlayError {
    /// The console failed or was closed.
    #[display("{}", _0)]
    Console(ConsoleError),
    /// The game rejected a move.
    #[display("{}", _0)]
    Move(MoveError),
}

impl std::error::Error for PlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlayError::Console(err) => Some(err),
            PlayError::Move(err) => Some(err),
        }
    }
}

impl From<ConsoleError> for PlayError {
    fn from(err: ConsoleError) -> Self {
        PlayError::Console(err)
    }
}

impl From<MoveError> for PlayError {
    fn from(err: MoveError) -> Self {
        PlayError::Move(err)
    }
}

/// Trait for players that can make moves.
pub trait Player {
    /// Picks an empty square for `mark` on `board`.
    ///
    /// The console is available for players that need to ask someone.
    fn choose_move(
        &mut self,
        board: &Board,
        mark: Mark,
        console: &mut dyn Console,
    ) -> Result<Position, PlayError>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
