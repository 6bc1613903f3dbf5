//! Computer player driven by the rule-priority heuristic.

use super::{PlayError, Player};
use crate::console::Console;
use noughts_core::heuristic::choose_move_with_rule;
use noughts_core::{Board, Mark, MoveError, Position};
use tracing::{info, instrument};

/// Computer opponent. Deterministic: the same board always gets the same reply.
#[derive(Debug, Clone, derive_new::new)]
pub struct ComputerPlayer {
    #[new(into)]
    name: String,
}

impl Player for ComputerPlayer {
    #[instrument(skip(self, board, _console), fields(player = %self.name))]
    fn choose_move(
        &mut self,
        board: &Board,
        mark: Mark,
        _console: &mut dyn Console,
    ) -> Result<Position, PlayError> {
        let (position, rule) = choose_move_with_rule(board, mark).ok_or(MoveError::GameOver)?;
        info!(position = %position, %rule, "Computer moves");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
