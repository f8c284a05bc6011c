//! The guess-selection engine
//!
//! Feedback folding, candidate pruning, selection strategies and the
//! session state machine that ties them together.

mod constraints;
mod error;
mod session;
pub mod strategy;

pub use constraints::ConstraintState;
pub use error::SolverError;
pub use session::{SolverSession, Turn};
pub use strategy::{
    LetterEntropyStrategy, RandomStrategy, Strategy, StrategyKind, WordEntropyStrategy,
};
