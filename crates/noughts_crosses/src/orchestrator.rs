//! Game orchestration between players.

use crate::console::Console;
use crate::players::{PlayError, Player};
use noughts_core::{GameFinished, GameInProgress, GameResult, Mark, MoveError};
use tracing::{debug, info, instrument, warn};

/// Runs games between two players, printing the board after every move.
pub struct Orchestrator {
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
}

impl Orchestrator {
    /// Creates an orchestrator. `player_x` moves first.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Self {
        Self { player_x, player_o }
    }

    /// Plays one game from an empty board to a terminal state.
    ///
    /// The outcome message is printed before returning.
    #[instrument(skip_all, fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run(&mut self, console: &mut dyn Console) -> Result<GameFinished, PlayError> {
        info!("Starting game");
        let mut game = GameInProgress::new();
        console.write(&game.board().render())?;

        loop {
            let mark = game.to_move();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            debug!(player = %player.name(), phase = ?game.phase(), "Waiting for move");
            let position = player.choose_move(game.board(), mark, console)?;
            if !game.board().is_empty(position) {
                warn!(player = %player.name(), %position, "Player chose an occupied square");
                return Err(MoveError::SquareOccupied(position).into());
            }

            match game.play(position)? {
                GameResult::InProgress(next) => {
                    console.write(&next.board().render())?;
                    game = next;
                }
                GameResult::Finished(finished) => {
                    console.write(&finished.board().render())?;
                    console.say(finished.outcome().message())?;
                    info!(
                        outcome = ?finished.outcome(),
                        moves = finished.history().len(),
                        "Game over"
                    );
                    return Ok(finished);
                }
            }
        }
    }
}
