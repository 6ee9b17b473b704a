//! Codemaker feedback and its calculation
//!
//! Feedback is a bag of keys: one Exact (black) key per peg with the right
//! colour in the right position, one Partial (white) key per peg with the
//! right colour in the wrong position. It says nothing about *which* pegs the
//! keys belong to, so it is stored as two counts.

use super::Pattern;
use rustc_hash::FxHashMap;
use std::fmt;

/// A single feedback key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Right colour, right position (black)
    Exact,
    /// Right colour, wrong position (white)
    Partial,
}

impl Key {
    /// Code used in the classic board notation
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Exact => 'b',
            Self::Partial => 'w',
        }
    }
}

/// Feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    exact: usize,
    partial: usize,
}

/// Error type for unparseable feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    InvalidKey(char),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey(c) => {
                write!(f, "'{c}' is not a feedback key (use b for black, w for white)")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

impl Feedback {
    /// Build feedback from key counts
    #[must_use]
    pub const fn new(exact: usize, partial: usize) -> Self {
        Self { exact, partial }
    }

    /// Feedback for a fully correct guess of the given length
    #[must_use]
    pub const fn perfect(pattern_length: usize) -> Self {
        Self::new(pattern_length, 0)
    }

    /// Score `guess` against `secret` using classic Mastermind rules
    ///
    /// # Algorithm
    /// 1. First pass: every position where the pegs agree is an Exact key.
    ///    Those pegs are consumed on both sides.
    /// 2. Second pass: the unconsumed secret pegs form a colour pool. Each
    ///    unconsumed guess peg whose colour is still in the pool is a Partial
    ///    key and takes one peg out of the pool.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Feedback, GameConfig, Pattern};
    ///
    /// let config = GameConfig::new(4, 6).unwrap();
    /// let guess = Pattern::parse("rgby", &config).unwrap();
    /// let secret = Pattern::parse("rbgc", &config).unwrap();
    ///
    /// // r exact; g and b present elsewhere; y absent
    /// assert_eq!(Feedback::evaluate(&guess, &secret), Feedback::new(1, 2));
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Pattern, secret: &Pattern) -> Self {
        debug_assert_eq!(guess.len(), secret.len(), "Patterns must be equal length");

        let mut exact = 0;
        let mut unmatched = Vec::with_capacity(guess.len());
        let mut pool: FxHashMap<_, usize> = FxHashMap::default();

        for (&g, &s) in guess.pegs().iter().zip(secret.pegs()) {
            if g == s {
                exact += 1;
            } else {
                unmatched.push(g);
                *pool.entry(s).or_insert(0) += 1;
            }
        }

        let mut partial = 0;
        for peg in unmatched {
            if let Some(count) = pool.get_mut(&peg)
                && *count > 0
            {
                *count -= 1;
                partial += 1;
            }
        }

        Self { exact, partial }
    }

    /// Parse feedback in board notation
    ///
    /// Accepts `b`/`B` for Exact and `w`/`W` for Partial in any order;
    /// whitespace is ignored. `-`, `none` or an empty string mean no keys.
    ///
    /// # Errors
    /// Returns `FeedbackError::InvalidKey` for any other character.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Feedback;
    ///
    /// assert_eq!(Feedback::parse("bwb").unwrap(), Feedback::new(2, 1));
    /// assert_eq!(Feedback::parse("none").unwrap(), Feedback::default());
    /// assert!(Feedback::parse("bx").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, FeedbackError> {
        let trimmed = text.trim();
        if trimmed.eq_ignore_ascii_case("none") {
            return Ok(Self::default());
        }

        let mut feedback = Self::default();
        for c in trimmed.chars().filter(|c| !c.is_whitespace()) {
            match c.to_ascii_lowercase() {
                'b' => feedback.exact += 1,
                'w' => feedback.partial += 1,
                '-' | '_' => {}
                other => return Err(FeedbackError::InvalidKey(other)),
            }
        }
        Ok(feedback)
    }

    /// Number of Exact keys
    #[inline]
    #[must_use]
    pub const fn exact(self) -> usize {
        self.exact
    }

    /// Number of Partial keys
    #[inline]
    #[must_use]
    pub const fn partial(self) -> usize {
        self.partial
    }

    /// Total number of keys
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.exact + self.partial
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Check whether this feedback means the guess was the secret
    #[inline]
    #[must_use]
    pub const fn is_solved(self, pattern_length: usize) -> bool {
        self.exact == pattern_length && self.partial == 0
    }

    /// The keys of this feedback, Exact keys first
    pub fn keys(self) -> impl Iterator<Item = Key> {
        std::iter::repeat_n(Key::Exact, self.exact)
            .chain(std::iter::repeat_n(Key::Partial, self.partial))
    }
}

impl FromIterator<Key> for Feedback {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut feedback = Self::default();
        for key in iter {
            match key {
                Key::Exact => feedback.exact += 1,
                Key::Partial => feedback.partial += 1,
            }
        }
        feedback
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        for key in self.keys() {
            write!(f, "{}", key.code())?;
        }
        Ok(())
    }
}
