//! Noughts and crosses game logic.
//!
//! - [`Board`] holds the nine squares and only ever fills them.
//! - [`rules`] decides wins and draws.
//! - [`heuristic`] picks the computer's move by fixed rule priority.
//! - [`GameInProgress`] / [`GameFinished`] form the turn-by-turn state machine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod heuristic;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::{COMPUTER, GameFinished, GameInProgress, GameResult, HUMAN, Outcome, Phase};
pub use heuristic::{Rule, choose_move};
pub use position::Position;
pub use rules::{has_won, is_draw};
pub use types::{Board, Mark, Square};
