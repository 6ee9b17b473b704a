//! Game configuration
//!
//! Pattern length, palette size and turn budget, validated once and passed
//! explicitly to every component that needs them.

use super::Peg;
use std::fmt;
use std::ops::RangeInclusive;

/// Allowed number of pegs in a pattern
pub const PATTERN_LENGTH_RANGE: RangeInclusive<usize> = 3..=8;

/// Allowed number of colours in play
pub const PALETTE_SIZE_RANGE: RangeInclusive<usize> = 3..=8;

/// Default number of pegs
pub const DEFAULT_PATTERN_LENGTH: usize = 4;

/// Default number of colours
pub const DEFAULT_PALETTE_SIZE: usize = 6;

/// Default turn budget per game
pub const DEFAULT_MAX_TURNS: usize = 12;

/// Rules for a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pattern_length: usize,
    palette_size: usize,
    max_turns: usize,
}

/// Error type for invalid configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    PatternLength(usize),
    PaletteSize(usize),
    ZeroTurns,
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PatternLength(len) => write!(
                f,
                "Pattern length must be between {} and {}, got {len}",
                PATTERN_LENGTH_RANGE.start(),
                PATTERN_LENGTH_RANGE.end()
            ),
            Self::PaletteSize(size) => write!(
                f,
                "Palette size must be between {} and {}, got {size}",
                PALETTE_SIZE_RANGE.start(),
                PALETTE_SIZE_RANGE.end()
            ),
            Self::ZeroTurns => write!(f, "Turn budget must be at least 1"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Pattern must have {expected} pegs, got {actual}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    /// Create a configuration with the default turn budget
    ///
    /// # Errors
    /// Returns `ConfigError` if either value is outside 3-8.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::GameConfig;
    ///
    /// let config = GameConfig::new(4, 6).unwrap();
    /// assert_eq!(config.max_turns(), 12);
    ///
    /// assert!(GameConfig::new(9, 6).is_err());
    /// ```
    pub fn new(pattern_length: usize, palette_size: usize) -> Result<Self, ConfigError> {
        Self::with_turns(pattern_length, palette_size, DEFAULT_MAX_TURNS)
    }

    /// Create a configuration with an explicit turn budget
    ///
    /// # Errors
    /// Returns `ConfigError` if the length or palette size is outside 3-8,
    /// or if `max_turns` is zero.
    pub fn with_turns(
        pattern_length: usize,
        palette_size: usize,
        max_turns: usize,
    ) -> Result<Self, ConfigError> {
        if !PATTERN_LENGTH_RANGE.contains(&pattern_length) {
            return Err(ConfigError::PatternLength(pattern_length));
        }
        if !PALETTE_SIZE_RANGE.contains(&palette_size) {
            return Err(ConfigError::PaletteSize(palette_size));
        }
        if max_turns == 0 {
            return Err(ConfigError::ZeroTurns);
        }

        Ok(Self {
            pattern_length,
            palette_size,
            max_turns,
        })
    }

    #[inline]
    #[must_use]
    pub const fn pattern_length(&self) -> usize {
        self.pattern_length
    }

    #[inline]
    #[must_use]
    pub const fn palette_size(&self) -> usize {
        self.palette_size
    }

    #[inline]
    #[must_use]
    pub const fn max_turns(&self) -> usize {
        self.max_turns
    }

    /// Colours in play, in palette order
    #[must_use]
    pub fn palette(&self) -> &'static [Peg] {
        &Peg::ALL[..self.palette_size]
    }

    /// Check whether a peg is one of the colours in play
    #[must_use]
    pub const fn in_palette(&self, peg: Peg) -> bool {
        peg.index() < self.palette_size
    }

    /// Number of distinct patterns (C^L)
    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.palette_size.pow(self.pattern_length as u32)
    }

    /// Check that a pattern length matches this configuration
    ///
    /// # Errors
    /// Returns `ConfigError::LengthMismatch` if it does not.
    pub const fn check_length(&self, actual: usize) -> Result<(), ConfigError> {
        if actual == self.pattern_length {
            Ok(())
        } else {
            Err(ConfigError::LengthMismatch {
                expected: self.pattern_length,
                actual,
            })
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pattern_length: DEFAULT_PATTERN_LENGTH,
            palette_size: DEFAULT_PALETTE_SIZE,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}
