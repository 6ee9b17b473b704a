//! Peg patterns
//!
//! A pattern is an ordered, fixed-length sequence of pegs. Secrets and guesses
//! are both patterns.

use super::{GameConfig, Peg};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::fmt;

/// An ordered sequence of pegs, duplicates allowed
///
/// Equality and hashing compare the full sequence, so `rgby` and `ygbr` differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern {
    pegs: Vec<Peg>,
}

/// Error type for unparseable patterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    InvalidLength { expected: usize, actual: usize },
    UnknownColour(char),
    ColourNotInPalette(char),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "Pattern must be exactly {expected} pegs, got {actual}")
            }
            Self::UnknownColour(c) => write!(f, "'{c}' is not a colour code"),
            Self::ColourNotInPalette(c) => write!(f, "Colour '{c}' is not in play"),
        }
    }
}

impl std::error::Error for PatternError {}

impl Pattern {
    /// Wrap a peg sequence
    #[must_use]
    pub const fn new(pegs: Vec<Peg>) -> Self {
        Self { pegs }
    }

    /// Parse a pattern from colour codes like `"rgby"`
    ///
    /// Whitespace is ignored and codes are case-insensitive.
    ///
    /// # Errors
    /// Returns `PatternError` if:
    /// - The number of pegs differs from the configured length
    /// - A character is not a colour code
    /// - A colour is outside the configured palette
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{GameConfig, Pattern};
    ///
    /// let config = GameConfig::new(4, 6).unwrap();
    /// let pattern = Pattern::parse("RG by", &config).unwrap();
    /// assert_eq!(pattern.to_string(), "rgby");
    ///
    /// assert!(Pattern::parse("rgb", &config).is_err());
    /// assert!(Pattern::parse("rgbp", &config).is_err()); // purple not in a 6-colour game
    /// ```
    pub fn parse(text: &str, config: &GameConfig) -> Result<Self, PatternError> {
        let pegs = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| -> Result<Peg, PatternError> {
                let peg = Peg::from_code(c).ok_or(PatternError::UnknownColour(c))?;
                if config.in_palette(peg) {
                    Ok(peg)
                } else {
                    Err(PatternError::ColourNotInPalette(c))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        if pegs.len() != config.pattern_length() {
            return Err(PatternError::InvalidLength {
                expected: config.pattern_length(),
                actual: pegs.len(),
            });
        }

        Ok(Self { pegs })
    }

    /// A pattern of `length` copies of one peg
    #[must_use]
    pub fn monochrome(peg: Peg, length: usize) -> Self {
        Self {
            pegs: vec![peg; length],
        }
    }

    /// A uniformly random pattern over the configured palette
    pub fn random<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let palette = config.palette();
        let pegs = (0..config.pattern_length())
            .map(|_| palette[rng.random_range(0..palette.len())])
            .collect();
        Self { pegs }
    }

    /// Every pattern of the configured shape, in palette order
    ///
    /// `rrrr`, `rrrg`, `rrrb`, ... for a 4-peg game.
    pub fn all(config: &GameConfig) -> impl Iterator<Item = Self> + use<> {
        let length = config.pattern_length();
        let palette = config.palette();
        let base = palette.len();

        (0..config.pattern_count()).map(move |mut index| {
            let mut pegs = vec![palette[0]; length];
            for slot in pegs.iter_mut().rev() {
                *slot = palette[index % base];
                index /= base;
            }
            Self { pegs }
        })
    }

    #[inline]
    #[must_use]
    pub fn pegs(&self) -> &[Peg] {
        &self.pegs
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pegs.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pegs.is_empty()
    }

    /// Peg at a position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn peg_at(&self, position: usize) -> Peg {
        self.pegs[position]
    }

    /// The single colour of a monochrome pattern
    #[must_use]
    pub fn monochrome_colour(&self) -> Option<Peg> {
        let (&first, rest) = self.pegs.split_first()?;
        rest.iter().all(|&p| p == first).then_some(first)
    }

    /// Count of each colour in the pattern
    #[must_use]
    pub fn colour_counts(&self) -> FxHashMap<Peg, usize> {
        let mut counts = FxHashMap::default();
        for &peg in &self.pegs {
            *counts.entry(peg).or_insert(0) += 1;
        }
        counts
    }
}

impl From<Vec<Peg>> for Pattern {
    fn from(pegs: Vec<Peg>) -> Self {
        Self::new(pegs)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for peg in &self.pegs {
            write!(f, "{peg}")?;
        }
        Ok(())
    }
}
