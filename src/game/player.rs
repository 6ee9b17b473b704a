//! The player capability shared by humans and the solver

use super::GameError;
use crate::core::{Feedback, Pattern};
use crate::solver::DeductionStrategy;
use rand::Rng;

/// Anything that can sit on either side of the board
///
/// The game loop only talks to players through this trait.
pub trait Player {
    /// Prepare for a new game
    fn ready_for_game(&mut self) {}

    /// Pick the secret pattern when playing codemaker
    ///
    /// # Errors
    /// Returns `GameError` if the player cannot produce a pattern.
    fn choose_secret(&mut self) -> Result<Pattern, GameError>;

    /// Make the next guess when playing codebreaker
    ///
    /// # Errors
    /// Returns `GameError` if the player cannot produce a guess.
    fn make_guess(&mut self) -> Result<Pattern, GameError>;

    /// Take in the codemaker's feedback for `guess`
    ///
    /// # Errors
    /// Returns `GameError` if the feedback cannot be used.
    fn analyse_feedback(&mut self, guess: &Pattern, feedback: Feedback) -> Result<(), GameError>;

    /// Patterns still considered possible, if the player tracks them
    fn candidate_count(&self) -> Option<usize> {
        None
    }
}

impl<R: Rng> Player for DeductionStrategy<R> {
    fn ready_for_game(&mut self) {
        self.reset();
    }

    fn choose_secret(&mut self) -> Result<Pattern, GameError> {
        Ok(DeductionStrategy::choose_secret(self))
    }

    fn make_guess(&mut self) -> Result<Pattern, GameError> {
        Ok(self.next_guess()?)
    }

    fn analyse_feedback(&mut self, guess: &Pattern, feedback: Feedback) -> Result<(), GameError> {
        Ok(self.observe(guess, feedback)?)
    }

    fn candidate_count(&self) -> Option<usize> {
        self.current_candidate_count()
    }
}
