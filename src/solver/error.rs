//! Solver error taxonomy

use crate::core::{ConfigError, Pattern};
use std::fmt;

/// Errors reported by the deduction strategy
///
/// None of these are retried: every deduction step is deterministic, so the
/// same inputs would fail the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Bad rules, or a pattern that does not fit them
    Configuration(ConfigError),
    /// The observations so far contradict each other
    InconsistentFeedback { turn: usize },
    /// No guess left to make: budget spent or candidate set empty
    Exhausted { turns_used: usize },
    /// Feedback was reported for a guess the current phase never makes
    UnexpectedGuess { expected: Pattern, actual: Pattern },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(e) => write!(f, "Invalid configuration: {e}"),
            Self::InconsistentFeedback { turn } => write!(
                f,
                "Feedback on turn {turn} contradicts earlier feedback; no pattern fits"
            ),
            Self::Exhausted { turns_used } => {
                write!(f, "No guesses left after {turns_used} turns")
            }
            Self::UnexpectedGuess { expected, actual } => {
                write!(f, "Expected feedback for {expected}, got feedback for {actual}")
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Configuration(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for SolverError {
    fn from(e: ConfigError) -> Self {
        Self::Configuration(e)
    }
}
