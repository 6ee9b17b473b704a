//! Single-observation candidate generation
//!
//! Feedback keys carry no position, so each key is expanded into every
//! single-slot hypothesis it could stand for. A hypothesis is a
//! [`PartialCandidate`] with exactly one slot filled.

use crate::core::{Key, Pattern, Peg};
use rustc_hash::FxHashSet;

/// A pattern under construction: each slot holds a peg or is still open
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartialCandidate {
    slots: Vec<Option<Peg>>,
}

impl PartialCandidate {
    /// All slots open
    #[must_use]
    pub fn empty(length: usize) -> Self {
        Self {
            slots: vec![None; length],
        }
    }

    /// One peg placed at `position`, everything else open
    ///
    /// # Panics
    /// Panics if `position >= length`
    #[must_use]
    pub fn single(length: usize, position: usize, peg: Peg) -> Self {
        let mut candidate = Self::empty(length);
        candidate.slots[position] = Some(peg);
        candidate
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Option<Peg>] {
        &self.slots
    }

    /// Check whether every slot holds a peg
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Pegs placed so far
    pub fn assigned(&self) -> impl Iterator<Item = Peg> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// Fill this candidate's open slot with the hypothesis's peg
    ///
    /// Uses the first position where the hypothesis holds a peg and this
    /// candidate is open. Returns `None` when there is no such position.
    ///
    /// ```text
    /// [r _ _ _] merges into [_ g b y] → [r g b y]
    /// [r _ _ _] cannot merge into [c g b _]
    /// ```
    #[must_use]
    pub fn merge(&self, hypothesis: &Self) -> Option<Self> {
        let position = hypothesis
            .slots
            .iter()
            .zip(&self.slots)
            .position(|(new, current)| new.is_some() && current.is_none())?;

        let mut merged = self.clone();
        merged.slots[position] = hypothesis.slots[position];
        Some(merged)
    }

    /// Convert to a pattern if every slot is filled
    #[must_use]
    pub fn into_pattern(self) -> Option<Pattern> {
        self.slots
            .into_iter()
            .collect::<Option<Vec<Peg>>>()
            .map(Pattern::new)
    }
}

/// Every single-slot hypothesis one feedback key could represent
///
/// - `Exact`: some peg of the guess is in place, so one hypothesis per
///   position `i` keeping `guess[i]` at `i`.
/// - `Partial`: some peg of the guess belongs elsewhere, so one hypothesis per
///   ordered pair `(i, j)` with `guess[i] != guess[j]`, moving `guess[i]` to
///   `j`. Same-colour pairs are skipped; that placement would be an Exact key.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{GameConfig, Key, Pattern};
/// use mastermind_solver::solver::generator::candidates_for_key;
///
/// let config = GameConfig::new(4, 6).unwrap();
/// let guess = Pattern::parse("rgby", &config).unwrap();
///
/// assert_eq!(candidates_for_key(&guess, Key::Exact).len(), 4);
/// assert_eq!(candidates_for_key(&guess, Key::Partial).len(), 12);
/// ```
#[must_use]
pub fn candidates_for_key(guess: &Pattern, key: Key) -> FxHashSet<PartialCandidate> {
    let length = guess.len();
    let pegs = guess.pegs();

    match key {
        Key::Exact => pegs
            .iter()
            .enumerate()
            .map(|(i, &peg)| PartialCandidate::single(length, i, peg))
            .collect(),
        Key::Partial => pegs
            .iter()
            .flat_map(move |&peg| {
                pegs.iter()
                    .enumerate()
                    .filter(move |&(_, &other)| other != peg)
                    .map(move |(j, _)| PartialCandidate::single(length, j, peg))
            })
            .collect(),
    }
}
