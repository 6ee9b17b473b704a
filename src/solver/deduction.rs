//! Phased deduction strategy
//!
//! Drives a game from the codebreaker's side:
//! 1. Colour discovery: one monochrome guess per palette colour reveals how
//!    many of that colour the secret holds. The last colour's count is
//!    inferred rather than tried.
//! 2. Initial arrangement: guess the discovered colours as-is; its feedback
//!    seeds the candidate set.
//! 3. Refinement: guess any remaining candidate and intersect the running set
//!    with what the new feedback allows.

use super::error::SolverError;
use super::merger::{CandidateSet, merge_and_filter};
use super::phase::Phase;
use crate::core::{Feedback, GameConfig, Pattern, Peg};
use log::{debug, warn};
use rand::Rng;

/// Codebreaker that deduces the secret one observation at a time
///
/// The random source picks among equally valid candidates during refinement
/// and draws secrets when playing codemaker. Seed it for reproducible games.
pub struct DeductionStrategy<R> {
    config: GameConfig,
    rng: R,
    phase: Phase,
    colours_tried: usize,
    discovered: Vec<Peg>,
    candidates: Option<CandidateSet>,
    turns_used: usize,
}

impl<R: Rng> DeductionStrategy<R> {
    /// Create a strategy for a fresh game
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Feedback, GameConfig, Pattern};
    /// use mastermind_solver::solver::DeductionStrategy;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let config = GameConfig::new(4, 6).unwrap();
    /// let secret = Pattern::parse("bgrr", &config).unwrap();
    /// let mut strategy = DeductionStrategy::new(config, StdRng::seed_from_u64(1));
    ///
    /// for _ in 0..config.max_turns() {
    ///     let guess = strategy.next_guess().unwrap();
    ///     let feedback = Feedback::evaluate(&guess, &secret);
    ///     if feedback.is_solved(config.pattern_length()) {
    ///         break;
    ///     }
    ///     strategy.observe(&guess, feedback).unwrap();
    /// }
    /// assert!(strategy.candidates().is_some_and(|c| c.contains(&secret)));
    /// ```
    pub const fn new(config: GameConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            phase: Phase::ColorDiscovery,
            colours_tried: 0,
            discovered: Vec::new(),
            candidates: None,
            turns_used: 0,
        }
    }

    /// Forget everything learned and start over
    pub fn reset(&mut self) {
        self.phase = Phase::ColorDiscovery;
        self.colours_tried = 0;
        self.discovered.clear();
        self.candidates = None;
        self.turns_used = 0;
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Colours found so far, in discovery order
    #[inline]
    #[must_use]
    pub fn discovered_colours(&self) -> &[Peg] {
        &self.discovered
    }

    /// Running candidate set, once the initial arrangement has been scored
    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> Option<&CandidateSet> {
        self.candidates.as_ref()
    }

    /// Size of the running candidate set
    ///
    /// `Some(0)` in any phase once feedback has proved inconsistent.
    #[must_use]
    pub fn current_candidate_count(&self) -> Option<usize> {
        self.candidates.as_ref().map(CandidateSet::len)
    }

    /// Number of observations made this game
    #[inline]
    #[must_use]
    pub const fn turns_used(&self) -> usize {
        self.turns_used
    }

    /// Draw a random secret over the configured palette
    pub fn choose_secret(&mut self) -> Pattern {
        Pattern::random(&self.config, &mut self.rng)
    }

    /// The guess for the current phase
    ///
    /// Calling this repeatedly without an `observe` in between may return a
    /// different candidate during refinement, but never one already ruled out.
    ///
    /// # Errors
    /// Returns `SolverError::Exhausted` if the turn budget is spent or the
    /// candidate set is empty, including after any `InconsistentFeedback`.
    pub fn next_guess(&mut self) -> Result<Pattern, SolverError> {
        if self.turns_used >= self.config.max_turns() || self.is_inconsistent() {
            return Err(self.exhausted());
        }

        match self.phase {
            Phase::ColorDiscovery => self
                .discovery_guess()
                .ok_or_else(|| self.exhausted()),
            Phase::InitialArrangement => Ok(self.arrangement_guess()),
            Phase::Refinement => {
                let candidates = self.candidates.as_ref().ok_or_else(|| self.exhausted())?;
                candidates
                    .choose(&mut self.rng)
                    .cloned()
                    .ok_or_else(|| self.exhausted())
            }
        }
    }

    /// Record the feedback for a guess and advance
    ///
    /// # Errors
    /// - `Configuration` if the guess has the wrong length
    /// - `UnexpectedGuess` if the guess is not the one this phase makes
    /// - `InconsistentFeedback` if no pattern fits everything observed so far;
    ///   the candidate set is left empty and later guesses are `Exhausted`
    ///
    /// A rejected guess with the wrong length or the wrong shape for the
    /// phase does not use a turn.
    pub fn observe(&mut self, guess: &Pattern, feedback: Feedback) -> Result<(), SolverError> {
        let length = self.config.pattern_length();
        self.config.check_length(guess.len())?;
        self.check_expected(guess)?;

        self.turns_used += 1;
        if self.is_inconsistent() || feedback.len() > length {
            return Err(self.inconsistent());
        }

        match self.phase {
            Phase::ColorDiscovery => self.discover(feedback),
            Phase::InitialArrangement => self.arrange(guess, feedback),
            Phase::Refinement => self.refine(guess, feedback),
        }
    }

    fn discovery_guess(&self) -> Option<Pattern> {
        let colour = *self.config.palette().get(self.colours_tried)?;
        Some(Pattern::monochrome(colour, self.config.pattern_length()))
    }

    fn arrangement_guess(&self) -> Pattern {
        Pattern::new(self.discovered.clone())
    }

    /// Discovery and arrangement each allow exactly one guess
    fn check_expected(&self, guess: &Pattern) -> Result<(), SolverError> {
        let expected = match self.phase {
            Phase::ColorDiscovery => self.discovery_guess().ok_or_else(|| self.exhausted())?,
            Phase::InitialArrangement => self.arrangement_guess(),
            Phase::Refinement => return Ok(()),
        };

        if *guess == expected {
            Ok(())
        } else {
            Err(SolverError::UnexpectedGuess {
                expected,
                actual: guess.clone(),
            })
        }
    }

    fn discover(&mut self, feedback: Feedback) -> Result<(), SolverError> {
        let length = self.config.pattern_length();
        let palette = self.config.palette();
        let colour = palette[self.colours_tried];

        // Exact and Partial are indistinguishable for a monochrome guess
        let count = feedback.len();
        if self.discovered.len() + count > length {
            return Err(self.inconsistent());
        }
        self.discovered.extend(std::iter::repeat_n(colour, count));
        self.colours_tried += 1;
        debug!("{} × {count}, {}/{length} pegs known", colour.name(), self.discovered.len());

        if self.colours_tried == palette.len() - 1 {
            let last = palette[self.colours_tried];
            let remaining = length - self.discovered.len();
            self.discovered.extend(std::iter::repeat_n(last, remaining));
            debug!("{} × {remaining} inferred", last.name());
        }

        if self.discovered.len() == length {
            self.advance();
        }
        Ok(())
    }

    fn arrange(&mut self, guess: &Pattern, feedback: Feedback) -> Result<(), SolverError> {
        let candidates = merge_and_filter(guess, feedback);
        debug!("{guess} scored {feedback}: {} candidates", candidates.len());
        self.replace_candidates(candidates)?;
        self.advance();
        Ok(())
    }

    fn refine(&mut self, guess: &Pattern, feedback: Feedback) -> Result<(), SolverError> {
        let observed = merge_and_filter(guess, feedback);
        let refined = self
            .candidates
            .as_ref()
            .map_or_else(CandidateSet::new, |running| running.intersect(&observed));

        debug!(
            "{guess} scored {feedback}: {} → {} candidates",
            self.current_candidate_count().unwrap_or(0),
            refined.len()
        );
        self.replace_candidates(refined)
    }

    fn replace_candidates(&mut self, candidates: CandidateSet) -> Result<(), SolverError> {
        if candidates.is_empty() {
            return Err(self.inconsistent());
        }
        self.candidates = Some(candidates);
        Ok(())
    }

    /// An empty candidate set ends the game, whatever the phase
    fn is_inconsistent(&self) -> bool {
        self.candidates.as_ref().is_some_and(CandidateSet::is_empty)
    }

    fn advance(&mut self) {
        let next = self.phase.next();
        debug!("phase {} → {next}", self.phase);
        self.phase = next;
    }

    fn inconsistent(&mut self) -> SolverError {
        warn!("inconsistent feedback on turn {}", self.turns_used);
        self.candidates = Some(CandidateSet::new());
        SolverError::InconsistentFeedback {
            turn: self.turns_used,
        }
    }

    const fn exhausted(&self) -> SolverError {
        SolverError::Exhausted {
            turns_used: self.turns_used,
        }
    }
}
