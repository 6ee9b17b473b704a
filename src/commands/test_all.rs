//! Test all secrets - comprehensive solver evaluation
//!
//! Runs the solver against every possible secret and generates statistics.

use super::solve::solve_secret;
use crate::core::{GameConfig, Pattern};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Share of secrets that must be solved within the turn budget
pub const CONVERGENCE_TARGET: f64 = 99.0;

/// Result from testing a single secret
#[derive(Debug, Clone)]
pub struct SecretTestResult {
    pub secret: Pattern,
    pub num_guesses: usize,
    pub success: bool,
    /// The solver rejected true feedback for this secret
    pub inconsistent: bool,
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub config: GameConfig,
    pub total_secrets: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub worst_secrets: Vec<(Pattern, usize)>,
    pub unsolved_secrets: Vec<Pattern>,
    /// Secrets for which true feedback was reported as inconsistent
    pub inconsistent_secrets: Vec<Pattern>,
}

impl TestAllStatistics {
    /// Percentage of secrets solved within the turn budget
    #[must_use]
    pub fn solved_percentage(&self) -> f64 {
        if self.total_secrets == 0 {
            return 0.0;
        }
        self.solved as f64 / self.total_secrets as f64 * 100.0
    }

    #[must_use]
    pub fn meets_target(&self) -> bool {
        self.solved_percentage() >= CONVERGENCE_TARGET
    }
}

/// Run solver on every secret (or the first `limit`)
///
/// Each secret gets its own solver seeded from `seed` and the secret's index.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
#[must_use]
pub fn run_test_all(
    config: GameConfig,
    limit: Option<usize>,
    seed: u64,
    show_progress: bool,
) -> TestAllStatistics {
    let secrets: Vec<Pattern> = Pattern::all(&config)
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    info!("testing {} secrets", secrets.len());

    let pb = if show_progress {
        let pb = ProgressBar::new(secrets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let total_start = Instant::now();

    let mut results: Vec<SecretTestResult> = secrets
        .par_iter()
        .enumerate()
        .map(|(index, secret)| {
            let rng = StdRng::seed_from_u64(seed ^ index as u64);
            let result = match solve_secret(secret, config, rng) {
                Ok(solved) => SecretTestResult {
                    secret: secret.clone(),
                    num_guesses: solved.guesses.len(),
                    success: solved.success,
                    inconsistent: false,
                },
                Err(e) => {
                    warn!("{secret}: {e}");
                    SecretTestResult {
                        secret: secret.clone(),
                        num_guesses: 0,
                        success: false,
                        inconsistent: true,
                    }
                }
            };
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");
    results.sort_by(|a, b| a.secret.cmp(&b.secret));

    let total_time = total_start.elapsed();
    summarise(config, &results, total_time)
}

fn summarise(
    config: GameConfig,
    results: &[SecretTestResult],
    total_time: Duration,
) -> TestAllStatistics {
    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
    for result in results.iter().filter(|r| r.success) {
        *guess_distribution.entry(result.num_guesses).or_insert(0) += 1;
    }

    let solved_count = results.iter().filter(|r| r.success).count();
    let inconsistent_secrets: Vec<Pattern> = results
        .iter()
        .filter(|r| r.inconsistent)
        .map(|r| r.secret.clone())
        .collect();
    let unsolved_secrets: Vec<Pattern> = results
        .iter()
        .filter(|r| !r.success && !r.inconsistent)
        .map(|r| r.secret.clone())
        .collect();

    let total_guesses: usize = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.num_guesses)
        .sum();
    let average_guesses = if solved_count > 0 {
        total_guesses as f64 / solved_count as f64
    } else {
        0.0
    };

    let max_guesses = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.num_guesses)
        .max()
        .unwrap_or(0);

    let min_guesses = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.num_guesses)
        .min()
        .unwrap_or(0);

    let mut worst_secrets: Vec<(Pattern, usize)> = results
        .iter()
        .filter(|r| r.success)
        .map(|r| (r.secret.clone(), r.num_guesses))
        .collect();
    worst_secrets.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_secrets.truncate(10);

    TestAllStatistics {
        config,
        total_secrets: results.len(),
        solved: solved_count,
        failed: results.len() - solved_count,
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses,
        min_guesses,
        worst_secrets,
        unsolved_secrets,
        inconsistent_secrets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_game_fully_solved() {
        let config = GameConfig::new(3, 3).unwrap();
        let stats = run_test_all(config, None, 0, false);

        assert_eq!(stats.total_secrets, 27);
        assert_eq!(stats.solved, 27);
        assert!(stats.inconsistent_secrets.is_empty());
        assert!(stats.unsolved_secrets.is_empty());
        assert!(stats.meets_target());
        assert!((stats.solved_percentage() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn limit_restricts_secrets() {
        let stats = run_test_all(GameConfig::default(), Some(40), 1, false);

        assert_eq!(stats.total_secrets, 40);
        let distribution_sum: usize = stats.guess_distribution.values().sum();
        assert_eq!(distribution_sum, stats.solved);
        assert!(stats.min_guesses <= stats.max_guesses);
    }

    #[test]
    fn worst_secrets_sorted_descending() {
        let stats = run_test_all(GameConfig::default(), Some(60), 2, false);

        assert!(stats.worst_secrets.len() <= 10);
        assert!(stats.worst_secrets.windows(2).all(|w| w[0].1 >= w[1].1));
        if let Some((_, worst)) = stats.worst_secrets.first() {
            assert_eq!(*worst, stats.max_guesses);
        }
    }

    #[test]
    fn tight_budget_reports_unsolved() {
        let config = GameConfig::with_turns(4, 6, 2).unwrap();
        let stats = run_test_all(config, Some(50), 0, false);

        assert!(!stats.unsolved_secrets.is_empty());
        assert_eq!(stats.unsolved_secrets.len() + stats.solved, 50);
        assert!(!stats.meets_target());
    }

    #[test]
    fn empty_statistics() {
        let stats = summarise(GameConfig::default(), &[], Duration::ZERO);
        assert_eq!(stats.total_secrets, 0);
        assert!(stats.solved_percentage().abs() < f64::EPSILON);
    }
}
