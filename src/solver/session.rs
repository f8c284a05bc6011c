//! One puzzle attempt, driven turn by turn
//!
//! A `SolverSession` owns the per-attempt state: the shrinking candidate
//! set, the accumulated constraints, the last word played and the try
//! counter. The driver loop is:
//!
//! 1. Call [`SolverSession::next_guess`] with `None` to start an attempt.
//! 2. Play the suggested word in some game engine and obtain its feedback.
//! 3. Call `next_guess` again with the feedback code.
//! 4. Repeat until the turn reports solved (or the candidates run out).

use super::constraints::ConstraintState;
use super::error::SolverError;
use super::strategy::{Strategy, StrategyKind};
use crate::core::{FeedbackCode, Word};

/// Outcome of one `next_guess` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// A word to play next
    Guess(Word),
    /// The previous feedback was all-Match; the puzzle is solved
    Solved,
    /// No candidate is consistent with the feedback so far. A normal
    /// outcome, not an error: the caller decides whether to abort.
    Exhausted,
}

impl Turn {
    /// True once the puzzle is solved
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Solved)
    }

    /// The suggested word, if this turn produced one
    #[must_use]
    pub const fn word(&self) -> Option<&Word> {
        match self {
            Self::Guess(word) => Some(word),
            Self::Solved | Self::Exhausted => None,
        }
    }
}

/// Solves one puzzle attempt against a fixed dictionary
///
/// The dictionary is shared read-only; every session owns an independent
/// candidate set and constraint state, so sessions can run in parallel
/// without any locking.
pub struct SolverSession<'a> {
    dictionary: &'a [Word],
    strategy: StrategyKind,
    opening_word: Option<Word>,
    candidates: Vec<Word>,
    constraints: ConstraintState,
    last_played: Option<Word>,
    tries: usize,
}

impl<'a> SolverSession<'a> {
    /// Create a session over `dictionary` using the given strategy
    #[must_use]
    pub fn new(dictionary: &'a [Word], strategy: StrategyKind) -> Self {
        Self {
            dictionary,
            strategy,
            opening_word: None,
            candidates: dictionary.to_vec(),
            constraints: ConstraintState::new(),
            last_played: None,
            tries: 0,
        }
    }

    /// Configure a precomputed opening word
    ///
    /// Skips the first (expensive) strategy evaluation when playing many
    /// games: the session plays this word on every fresh attempt.
    #[must_use]
    pub fn with_opening_word(mut self, word: Word) -> Self {
        self.opening_word = Some(word);
        self
    }

    /// Candidates still consistent with the feedback received so far
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Number of guesses suggested in the current attempt
    #[must_use]
    pub const fn tries(&self) -> usize {
        self.tries
    }

    /// The most recent word suggested by this session
    #[must_use]
    pub const fn last_played(&self) -> Option<&Word> {
        self.last_played.as_ref()
    }

    /// Restore the initial state for a new attempt
    pub fn reset(&mut self) {
        self.candidates = self.dictionary.to_vec();
        self.constraints = ConstraintState::new();
        self.last_played = None;
        self.tries = 0;
    }

    /// Advance the attempt by one turn
    ///
    /// `feedback == None` starts a fresh attempt (state is reset and the
    /// opening word, if configured, is played). An all-Match code ends the
    /// attempt with [`Turn::Solved`]. Any other code is folded into the
    /// constraints, the candidates are pruned, and the strategy picks the
    /// next word; an empty candidate set yields [`Turn::Exhausted`].
    ///
    /// # Errors
    /// - `SolverError::InvalidInput` if feedback arrives before any word
    ///   was played in this attempt.
    /// - `SolverError::ConflictingFeedback` if the feedback contradicts
    ///   earlier observations.
    pub fn next_guess(&mut self, feedback: Option<&FeedbackCode>) -> Result<Turn, SolverError> {
        let fresh = feedback.is_none();

        match feedback {
            None => self.reset(),
            Some(code) if code.is_all_match() => return Ok(Turn::Solved),
            Some(code) => {
                let played = self.last_played.as_ref().ok_or_else(|| {
                    SolverError::InvalidInput(
                        "feedback received before any word was played".to_string(),
                    )
                })?;

                self.constraints = self.constraints.apply(played, code)?;
                let constraints = &self.constraints;
                self.candidates.retain(|w| constraints.admits(w));
            }
        }

        let next = if fresh && self.opening_word.is_some() {
            self.opening_word.clone()
        } else {
            self.strategy.select(&self.candidates).cloned()
        };

        match next {
            Some(word) => {
                self.last_played = Some(word.clone());
                self.tries += 1;
                Ok(Turn::Guess(word))
            }
            None => Ok(Turn::Exhausted),
        }
    }
}
