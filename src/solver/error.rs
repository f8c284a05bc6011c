//! Solver error type

use crate::core::{FeedbackError, WordError};
use std::fmt;

/// Errors reported by the solving engine
///
/// Both variants are caller contract violations: the current call aborts
/// instead of producing a plausible-looking wrong guess. An exhausted
/// candidate set is NOT an error; it surfaces as a normal
/// [`Turn::Exhausted`](crate::solver::Turn::Exhausted) result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Malformed word or feedback (wrong length or alphabet), or feedback
    /// supplied before any word was played
    InvalidInput(String),
    /// A new observation contradicts previously accumulated constraints,
    /// e.g. feedback fed back for the wrong word
    ConflictingFeedback(String),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::ConflictingFeedback(msg) => write!(f, "Conflicting feedback: {msg}"),
        }
    }
}

impl std::error::Error for SolverError {}

impl From<WordError> for SolverError {
    fn from(err: WordError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

impl From<FeedbackError> for SolverError {
    fn from(err: FeedbackError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
