//! Turn-driving game loop and the players that take part in it

mod human;
mod player;
mod session;

pub use human::{HumanStrategy, read_line};
pub use player::Player;
pub use session::{GameRecord, TurnRecord, break_secret, play_game};

use crate::solver::SolverError;
use std::fmt;
use std::io;

/// Error type for a game in progress
#[derive(Debug)]
pub enum GameError {
    Solver(SolverError),
    Io(io::Error),
    /// The human player's input ended mid-game
    InputClosed,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solver(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InputClosed => write!(f, "Input closed before the game finished"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Solver(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::InputClosed => None,
        }
    }
}

impl From<SolverError> for GameError {
    fn from(e: SolverError) -> Self {
        Self::Solver(e)
    }
}

impl From<io::Error> for GameError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
