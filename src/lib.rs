//! WORDLE Solver
//!
//! Solves WORDLE puzzles with pluggable guess strategies: uniform random
//! (`rnd`), per-letter positional entropy (`mil`), and whole-word response
//! entropy (`miw`).
//!
//! # Quick Start
//!
//! ```rust
//! use wordlesolver::core::{FeedbackCode, Word};
//! use wordlesolver::solver::{SolverSession, StrategyKind, Turn};
//!
//! let words: Vec<Word> = ["VIDEO", "OLDEN", "CRANE"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//!
//! let solution = Word::new("VIDEO").unwrap();
//! let strategy = StrategyKind::from_name("miw").unwrap();
//! let mut session = SolverSession::new(&words, strategy);
//!
//! let mut feedback: Option<FeedbackCode> = None;
//! loop {
//!     match session.next_guess(feedback.as_ref()).unwrap() {
//!         Turn::Solved => break,
//!         Turn::Exhausted => panic!("ran out of candidates"),
//!         Turn::Guess(word) => feedback = Some(FeedbackCode::score(&solution, &word)),
//!     }
//! }
//! ```

// Core domain types
pub mod core;

// Solving engine and strategies
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
