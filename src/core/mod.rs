//! Core domain types
//!
//! The fundamental domain types with zero external dependencies: words,
//! feedback clues, and the codec that scores a guess against a solution.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackCode, FeedbackError};
pub use word::{WORD_LEN, Word, WordError};
