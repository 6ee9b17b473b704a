//! Mastermind solving engine
//!
//! Feedback-driven candidate reconstruction plus the phased strategy that
//! decides what to guess next.

mod deduction;
mod error;
pub mod generator;
mod merger;
mod phase;

pub use deduction::DeductionStrategy;
pub use error::SolverError;
pub use generator::{PartialCandidate, candidates_for_key};
pub use merger::{CandidateSet, merge_and_filter};
pub use phase::Phase;
