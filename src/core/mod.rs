//! Core domain types for Mastermind
//!
//! Pegs, patterns, feedback and game rules. Everything here is a plain value
//! type with no solver logic attached.

mod config;
mod feedback;
mod pattern;
mod peg;

pub use config::{
    ConfigError, DEFAULT_MAX_TURNS, DEFAULT_PALETTE_SIZE, DEFAULT_PATTERN_LENGTH, GameConfig,
    PALETTE_SIZE_RANGE, PATTERN_LENGTH_RANGE,
};
pub use feedback::{Feedback, FeedbackError, Key};
pub use pattern::{Pattern, PatternError};
pub use peg::{MAX_COLOURS, Peg};
