//! Candidate merging and consistency filtering
//!
//! Turns one (guess, feedback) observation into the full set of patterns that
//! observation allows, and holds the running candidate set between turns.

use super::generator::{PartialCandidate, candidates_for_key};
use crate::core::{Feedback, Pattern, Peg};
use log::debug;
use rand::Rng;
use rand::seq::IteratorRandom;
use rustc_hash::{FxHashMap, FxHashSet};

/// Patterns not yet ruled out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    patterns: FxHashSet<Pattern>,
}

impl CandidateSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, pattern: &Pattern) -> bool {
        self.patterns.contains(pattern)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    /// Patterns present in both sets
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        small
            .patterns
            .iter()
            .filter(|p| large.contains(p))
            .cloned()
            .collect()
    }

    /// Pick any member
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Pattern> {
        self.patterns.iter().choose(rng)
    }

    /// Members in sorted order, for stable display
    #[must_use]
    pub fn sorted(&self) -> Vec<&Pattern> {
        let mut patterns: Vec<&Pattern> = self.patterns.iter().collect();
        patterns.sort();
        patterns
    }
}

impl FromIterator<Pattern> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Pattern>>(iter: I) -> Self {
        Self {
            patterns: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for CandidateSet {
    type Item = Pattern;
    type IntoIter = std::collections::hash_set::IntoIter<Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.into_iter()
    }
}

/// All patterns consistent with a single observation
///
/// # Algorithm
/// 1. Seed with `L` fully open partial candidates.
/// 2. For every feedback key, expand it into its hypotheses and merge each
///    hypothesis into each running partial candidate, deduplicating after
///    every key. Partial candidates already holding more of some colour than
///    the guess does are dropped on the spot: they cannot survive step 3.
/// 3. Keep only candidates whose colour multiset equals the guess's.
/// 4. Drop candidates with open slots.
///
/// Step 3 assumes the secret uses the guess's colours. That holds for every
/// guess the deduction strategy makes after colour discovery.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Feedback, GameConfig, Pattern};
/// use mastermind_solver::solver::merge_and_filter;
///
/// let config = GameConfig::new(3, 3).unwrap();
/// let guess = Pattern::parse("rgb", &config).unwrap();
///
/// // One peg in place, two swapped: r in place leaves "rbg"; likewise "bgr", "grb".
/// let candidates = merge_and_filter(&guess, Feedback::new(1, 2));
/// assert_eq!(candidates.len(), 3);
/// assert!(candidates.contains(&Pattern::parse("rbg", &config).unwrap()));
/// ```
#[must_use]
pub fn merge_and_filter(guess: &Pattern, feedback: Feedback) -> CandidateSet {
    let length = guess.len();
    let target = guess.colour_counts();

    let mut partials: FxHashSet<PartialCandidate> =
        std::iter::repeat_n(PartialCandidate::empty(length), length).collect();

    for key in feedback.keys() {
        let hypotheses = candidates_for_key(guess, key);
        partials = merge(&hypotheses, &partials, &target);
        debug!("{key:?} key for {guess}: {} partial candidates", partials.len());

        if partials.is_empty() {
            break;
        }
    }

    partials
        .into_iter()
        .filter_map(PartialCandidate::into_pattern)
        .filter(|pattern| pattern.colour_counts() == target)
        .collect()
}

/// Merge every hypothesis into every running partial candidate
fn merge(
    hypotheses: &FxHashSet<PartialCandidate>,
    partials: &FxHashSet<PartialCandidate>,
    target: &FxHashMap<Peg, usize>,
) -> FxHashSet<PartialCandidate> {
    partials
        .iter()
        .flat_map(|partial| hypotheses.iter().filter_map(|h| partial.merge(h)))
        .filter(|merged| fits_within(merged, target))
        .collect()
}

/// Check that no colour is used more often than `target` allows
fn fits_within(candidate: &PartialCandidate, target: &FxHashMap<Peg, usize>) -> bool {
    let mut used: FxHashMap<Peg, usize> = FxHashMap::default();
    candidate.assigned().all(|peg| {
        let count = used.entry(peg).or_insert(0);
        *count += 1;
        *count <= target.get(&peg).copied().unwrap_or(0)
    })
}
