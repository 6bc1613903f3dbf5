//! Interactive menu loop.

use crate::console::{Console, ConsoleError};
use crate::leaderboard::ScoreStore;
use crate::orchestrator::Orchestrator;
use crate::players::{ComputerPlayer, HumanPlayer, PlayError};
use crate::score_service::ScoreService;
use anyhow::Result;
use noughts_core::Board;
use tracing::{debug, info, instrument};

/// Greeting printed once when the shell starts.
pub const WELCOME: &str = "Welcome to Noughts and Crosses!";

/// Prompt for the menu choice.
pub const CHOICE_PROMPT: &str = "Enter your choice: ";

/// Prompt for the name a score is saved under.
pub const NAME_PROMPT: &str = "Enter your name: ";

/// A menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// `1`: play a game.
    Play,
    /// `2`: save the last score.
    SaveScore,
    /// `3`: show the leaderboard.
    ShowScores,
    /// `q`: quit.
    Quit,
}

impl MenuChoice {
    /// Parses a line typed at the menu prompt.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Play),
            "2" => Some(MenuChoice::SaveScore),
            "3" => Some(MenuChoice::ShowScores),
            "q" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// Whether the menu loop keeps going.
enum Flow {
    Continue,
    Quit,
}

/// Menu-driven session: play games, save and show scores.
pub struct Shell<'c, S> {
    console: &'c mut dyn Console,
    scores: ScoreService<S>,
    leaderboard_label: String,
    last_score: Option<i32>,
}

impl<'c, S: ScoreStore> Shell<'c, S> {
    /// Creates a shell talking over `console` and saving through `scores`.
    ///
    /// `leaderboard_label` is the file name shown in the menu.
    pub fn new(
        console: &'c mut dyn Console,
        scores: ScoreService<S>,
        leaderboard_label: impl Into<String>,
    ) -> Self {
        Self {
            console,
            scores,
            leaderboard_label: leaderboard_label.into(),
            last_score: None,
        }
    }

    /// Runs the menu until the user quits or input ends.
    ///
    /// # Errors
    ///
    /// Leaderboard write failures and console output failures. End of input
    /// is a normal exit.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        self.console.say(WELCOME)?;
        self.console.write(&Board::new().render())?;

        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => {
                    info!("User quit");
                    return Ok(());
                }
                Err(e) if is_closed(&e) => {
                    info!("Input closed, leaving");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn show_menu(&mut self) -> Result<(), ConsoleError> {
        let label = &self.leaderboard_label;
        let menu = format!(
            "1 - Play the game\n\
             2 - Save score in file '{label}'\n\
             3 - Load and display the scores from the '{label}'\n\
             q - End the program\n"
        );
        self.console.write(&menu)
    }

    fn step(&mut self) -> Result<Flow> {
        self.show_menu()?;
        let line = self.console.prompt(CHOICE_PROMPT)?;
        let Some(choice) = MenuChoice::parse(&line) else {
            debug!(%line, "Unknown menu choice");
            self.console.say("Please choose 1, 2, 3 or q.")?;
            return Ok(Flow::Continue);
        };

        debug!(?choice, "Menu choice");
        match choice {
            MenuChoice::Play => self.play()?,
            MenuChoice::SaveScore => self.save_score()?,
            MenuChoice::ShowScores => self.scores.display(self.console)?,
            MenuChoice::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn play(&mut self) -> Result<(), PlayError> {
        let mut orchestrator = Orchestrator::new(
            Box::new(HumanPlayer::new("Player")),
            Box::new(ComputerPlayer::new("Computer")),
        );
        let finished = orchestrator.run(self.console)?;
        self.last_score = Some(finished.outcome().score());
        Ok(())
    }

    fn save_score(&mut self) -> Result<()> {
        let Some(score) = self.last_score else {
            self.console.say("Play a game first, then save its score.")?;
            return Ok(());
        };
        let name = self.console.prompt(NAME_PROMPT)?;
        self.scores.record_score(&name, score)?;
        self.console.say(&format!("Saved {}: {}", name, score))?;
        Ok(())
    }
}

fn is_closed(err: &anyhow::Error) -> bool {
    matches!(err.downcast_ref::<ConsoleError>(), Some(ConsoleError::Closed))
        || matches!(
            err.downcast_ref::<PlayError>(),
            Some(PlayError::Console(ConsoleError::Closed))
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Play));
        assert_eq!(MenuChoice::parse(" 2 "), Some(MenuChoice::SaveScore));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::ShowScores));
        assert_eq!(MenuChoice::parse("q"), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::parse("4"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }
}
