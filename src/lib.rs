//! Mastermind Solver
//!
//! A Mastermind codebreaker that discovers the secret's colours with
//! monochrome guesses, then narrows the arrangement by rebuilding every
//! pattern consistent with each feedback and intersecting the results.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Feedback, GameConfig, Pattern};
//!
//! let config = GameConfig::new(4, 6).unwrap();
//! let guess = Pattern::parse("rgby", &config).unwrap();
//! let secret = Pattern::parse("ygcr", &config).unwrap();
//!
//! // g in place; r and y elsewhere
//! let feedback = Feedback::evaluate(&guess, &secret);
//! assert_eq!(feedback, Feedback::new(1, 2));
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Players and the game loop
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
