//! Command implementations

pub mod assist;
pub mod benchmark;
pub mod play;
pub mod solve;
pub mod test_all;

pub use assist::{AssistOutcome, run_assist};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::{Role, run_duel, run_play, run_versus};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_pattern, solve_secret};
pub use test_all::{CONVERGENCE_TARGET, TestAllStatistics, run_test_all};
