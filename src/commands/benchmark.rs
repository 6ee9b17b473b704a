//! Benchmark command
//!
//! Tests solver performance across random secrets.

use super::solve::solve_secret;
use crate::core::{GameConfig, Pattern};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    pub failed: usize,
    /// Games where the solver rejected true feedback
    pub inconsistent: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Run benchmark on `games` random secrets
///
/// Secrets are drawn from `seed`, and game `i` gets its own solver RNG derived
/// from `seed` and `i`, so results do not depend on thread scheduling.
#[must_use]
pub fn run_benchmark(config: GameConfig, games: usize, seed: u64) -> BenchmarkResult {
    let start = Instant::now();

    let mut rng = StdRng::seed_from_u64(seed);
    let secrets: Vec<Pattern> = (0..games)
        .map(|_| Pattern::random(&config, &mut rng))
        .collect();

    // None marks an inconsistent game
    let outcomes: Vec<Option<(bool, usize)>> = secrets
        .par_iter()
        .enumerate()
        .map(|(index, secret)| {
            let rng = StdRng::seed_from_u64(seed ^ index as u64);
            solve_secret(secret, config, rng)
                .ok()
                .map(|result| (result.success, result.guesses.len()))
        })
        .collect();

    let mut solved = 0;
    let mut failed = 0;
    let mut inconsistent = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for outcome in outcomes {
        match outcome {
            Some((true, guesses)) => {
                solved += 1;
                total_guesses += guesses;
                min_guesses = min_guesses.min(guesses);
                max_guesses = max_guesses.max(guesses);
                *distribution.entry(guesses).or_insert(0) += 1;
            }
            Some((false, _)) => failed += 1,
            None => inconsistent += 1,
        }
    }

    let duration = start.elapsed();
    info!("benchmark: {solved}/{games} solved in {duration:.2?}");

    BenchmarkResult {
        total_games: games,
        solved,
        failed,
        inconsistent,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        duration,
        games_per_second: games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn benchmark_runs() {
        let result = run_benchmark(GameConfig::default(), 20, 7);

        assert_eq!(result.total_games, 20);
        assert_eq!(result.solved, 20);
        assert_eq!(result.inconsistent, 0);
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= 12);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let result = run_benchmark(GameConfig::new(3, 4).unwrap(), 30, 1);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        assert_eq!(result.solved + result.failed + result.inconsistent, 30);
    }

    #[test]
    fn benchmark_is_reproducible() {
        let first = run_benchmark(GameConfig::default(), 15, 99);
        let second = run_benchmark(GameConfig::default(), 15, 99);

        assert_eq!(first.total_guesses, second.total_guesses);
        assert_eq!(first.distribution, second.distribution);
    }

    #[test]
    fn benchmark_no_games() {
        let result = run_benchmark(GameConfig::default(), 0, 0);

        assert_eq!(result.total_games, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
        assert!(result.average_guesses.abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let result = run_benchmark(GameConfig::default(), 25, 3);

        // Average should be between min and max
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);

        for &guess_count in result.distribution.keys() {
            assert!((1..=12).contains(&guess_count));
        }
    }
}
