//! Pattern solving command
//!
//! Solves a known secret and returns the full solution path.

use crate::core::{Feedback, GameConfig, Pattern};
use crate::solver::{DeductionStrategy, Phase, SolverError};
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for solving a pattern
pub struct SolveConfig {
    pub secret: String,
    pub game: GameConfig,
    pub seed: Option<u64>,
}

impl SolveConfig {
    #[must_use]
    pub fn new(secret: String) -> Self {
        Self {
            secret,
            game: GameConfig::default(),
            seed: None,
        }
    }
}

/// Result of solving a pattern
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub secret: Pattern,
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub guess: Pattern,
    pub feedback: Feedback,
    pub phase: Phase,
    pub candidates_before: Option<usize>,
    pub candidates_after: Option<usize>,
}

/// Parse the secret and solve it
///
/// # Errors
///
/// Returns an error if the secret does not fit the game configuration, or if
/// the solver reports inconsistent feedback.
pub fn solve_pattern(config: &SolveConfig) -> Result<SolveResult> {
    let secret = Pattern::parse(&config.secret, &config.game)
        .with_context(|| format!("Invalid secret '{}'", config.secret))?;

    let rng = config
        .seed
        .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);

    Ok(solve_secret(&secret, config.game, rng)?)
}

/// Run the deduction strategy against a known secret
///
/// Stops at the first perfect feedback or when the turn budget runs out.
///
/// # Errors
///
/// Returns `SolverError` if the strategy rejects an observation. With
/// feedback from the real evaluator this signals a solver bug.
pub fn solve_secret(
    secret: &Pattern,
    config: GameConfig,
    rng: StdRng,
) -> Result<SolveResult, SolverError> {
    config.check_length(secret.len())?;

    let mut strategy = DeductionStrategy::new(config, rng);
    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_turns() {
        let candidates_before = strategy.current_candidate_count();
        let phase = strategy.phase();

        let guess = strategy.next_guess()?;
        let feedback = Feedback::evaluate(&guess, secret);
        let solved = feedback.is_solved(config.pattern_length());

        if !solved {
            strategy.observe(&guess, feedback)?;
        }

        guesses.push(GuessStep {
            guess,
            feedback,
            phase,
            candidates_before,
            candidates_after: strategy.current_candidate_count(),
        });

        if solved {
            return Ok(SolveResult {
                success: true,
                guesses,
                secret: secret.clone(),
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        secret: secret.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(text: &str) -> SolveResult {
        let mut config = SolveConfig::new(text.to_string());
        config.seed = Some(5);
        solve_pattern(&config).unwrap()
    }

    #[test]
    fn solve_pattern_succeeds() {
        let result = solve("bgyr");
        assert!(result.success);
        assert_eq!(result.guesses.last().unwrap().guess, result.secret);
        assert!(result.guesses.len() <= 12);
    }

    #[test]
    fn solve_records_phases_in_order() {
        let result = solve("cmmy");
        let phases: Vec<Phase> = result.guesses.iter().map(|g| g.phase).collect();

        assert_eq!(phases[0], Phase::ColorDiscovery);
        assert!(phases.windows(2).all(|w| w[0] as u8 <= w[1] as u8));
        assert_eq!(
            phases.iter().filter(|&&p| p == Phase::InitialArrangement).count(),
            1
        );
    }

    #[test]
    fn candidate_counts_never_grow() {
        let result = solve("yrgy");
        for step in &result.guesses {
            if let (Some(before), Some(after)) = (step.candidates_before, step.candidates_after) {
                assert!(after <= before);
            }
        }
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        let config = SolveConfig::new("rgbq".to_string());
        assert!(solve_pattern(&config).is_err());

        let config = SolveConfig::new("rgbyr".to_string());
        assert!(solve_pattern(&config).is_err());
    }

    #[test]
    fn solve_with_small_budget() {
        let config = GameConfig::with_turns(4, 6, 3).unwrap();
        let secret = Pattern::parse("yyyy", &config).unwrap();

        let result = solve_secret(&secret, config, StdRng::seed_from_u64(0)).unwrap();
        assert!(!result.success);
        assert_eq!(result.guesses.len(), 3);
    }

    #[test]
    fn monochrome_secret_found_during_discovery() {
        let result = solve("gggg");
        assert!(result.success);
        assert_eq!(result.guesses.len(), 2);
        assert_eq!(result.guesses[1].phase, Phase::ColorDiscovery);
    }
}
