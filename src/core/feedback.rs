//! Feedback code calculation and representation
//!
//! A feedback code records the per-position clue for one guess, using the
//! textual "gyx" notation:
//! - `g` = the letter occupies the same position in the solution
//! - `y` = the letter occurs somewhere in the solution, but not here
//! - `x` = the letter does not occur in the solution at all
//!
//! Scoring is deliberately simple: every position independently tests
//! membership in the whole solution string. A letter that repeats in the
//! guess can therefore produce more `y` marks than the solution has copies
//! of that letter. Benchmark numbers depend on this exact definition, so it
//! must not be swapped for the duplicate-capped variant.

use super::{WORD_LEN, Word};
use std::fmt;

/// One position's clue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Right letter, right position (`g`)
    Match,
    /// Right letter, wrong position (`y`)
    Present,
    /// Letter not in the solution (`x`)
    Absent,
}

impl Feedback {
    /// The single-character wire form of this clue
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Match => 'g',
            Self::Present => 'y',
            Self::Absent => 'x',
        }
    }

    /// Parse a single clue character (case-insensitive)
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            'g' | 'G' => Some(Self::Match),
            'y' | 'Y' => Some(Self::Present),
            'x' | 'X' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Error type for malformed feedback strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    InvalidLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Feedback must be exactly {WORD_LEN} symbols, got {len}")
            }
            Self::InvalidSymbol(c) => write!(f, "Invalid feedback symbol '{c}', expected g/y/x"),
        }
    }
}

impl std::error::Error for FeedbackError {}

/// Feedback for a whole guess: one clue per letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackCode([Feedback; WORD_LEN]);

impl FeedbackCode {
    /// All greens (solved)
    pub const ALL_MATCH: Self = Self([Feedback::Match; WORD_LEN]);

    /// Score `guess` against `solution`
    ///
    /// For position i: equal letters give `Match`; otherwise a letter found
    /// anywhere in the solution gives `Present`; otherwise `Absent`. Both
    /// arguments are validated `Word`s, so no length check is needed here.
    ///
    /// # Examples
    /// ```
    /// use wordlesolver::core::{FeedbackCode, Word};
    ///
    /// let solution = Word::new("VIDEO").unwrap();
    /// let guess = Word::new("OLDEN").unwrap();
    /// let code = FeedbackCode::score(&solution, &guess);
    /// assert_eq!(code.to_string(), "yxggy");
    /// ```
    #[must_use]
    pub fn score(solution: &Word, guess: &Word) -> Self {
        let mut clues = [Feedback::Absent; WORD_LEN];

        for (i, clue) in clues.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            *clue = if solution.char_at(i) == letter {
                Feedback::Match
            } else if solution.has_letter(letter) {
                Feedback::Present
            } else {
                Feedback::Absent
            };
        }

        Self(clues)
    }

    /// Check if this code signals a solved puzzle (all `Match`)
    #[inline]
    #[must_use]
    pub fn is_all_match(&self) -> bool {
        self.0.iter().all(|&c| c == Feedback::Match)
    }

    /// The per-position clues
    #[inline]
    #[must_use]
    pub const fn clues(&self) -> &[Feedback; WORD_LEN] {
        &self.0
    }

    /// Parse a code from its textual "gyx" form
    ///
    /// # Errors
    /// Returns `FeedbackError` for a wrong-length string or a character
    /// outside the g/y/x alphabet.
    ///
    /// # Examples
    /// ```
    /// use wordlesolver::core::FeedbackCode;
    ///
    /// let code = FeedbackCode::parse("yxggy").unwrap();
    /// assert!(!code.is_all_match());
    /// assert!(FeedbackCode::parse("ggggg").unwrap().is_all_match());
    /// assert!(FeedbackCode::parse("gyz").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, FeedbackError> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LEN {
            return Err(FeedbackError::InvalidLength(chars.len()));
        }

        let mut clues = [Feedback::Absent; WORD_LEN];
        for (clue, c) in clues.iter_mut().zip(chars) {
            *clue = Feedback::from_symbol(c).ok_or(FeedbackError::InvalidSymbol(c))?;
        }

        Ok(Self(clues))
    }
}

impl fmt::Display for FeedbackCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for clue in &self.0 {
            write!(f, "{}", clue.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for FeedbackCode {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
