//! Accumulated letter constraints and candidate pruning
//!
//! `ConstraintState` folds the feedback received during one attempt into
//! three kinds of facts: letters confirmed at a position, letters known to
//! be present but banned from a position, and letters excluded from the
//! whole word. Pruning is a direct structural predicate over these facts;
//! no pattern compilation is involved.

use super::SolverError;
use crate::core::{Feedback, FeedbackCode, WORD_LEN, Word};
use rustc_hash::FxHashSet;

/// Constraints accumulated from all feedback in one attempt
///
/// Invariants (enforced by [`ConstraintState::apply`]):
/// - a confirmed letter never appears in that position's misplaced set or
///   in the global exclusions;
/// - an excluded letter never becomes confirmed or misplaced later, and
///   vice versa. Feedback for one puzzle is monotonically consistent, so a
///   violation means the caller fed back clues for the wrong word.
#[derive(Debug, Clone, Default)]
pub struct ConstraintState {
    /// Per-position confirmed letter ("g" clues)
    confirmed: [Option<u8>; WORD_LEN],
    /// Per-position letters known present but not here ("y" clues)
    misplaced: [FxHashSet<u8>; WORD_LEN],
    /// Letters absent from the whole word ("x" clues)
    excluded: FxHashSet<u8>,
}

impl ConstraintState {
    /// Empty state: nothing confirmed, nothing excluded
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one (guess, feedback) observation into the constraints
    ///
    /// Returns the tightened state, leaving `self` untouched so the history
    /// can be replayed from scratch.
    ///
    /// # Errors
    /// Returns `SolverError::ConflictingFeedback` when the observation
    /// contradicts previously recorded facts.
    pub fn apply(&self, guess: &Word, code: &FeedbackCode) -> Result<Self, SolverError> {
        let mut next = self.clone();

        for (i, (&letter, &clue)) in guess.chars().iter().zip(code.clues()).enumerate() {
            let ch = letter as char;
            match clue {
                Feedback::Match => {
                    if let Some(prev) = next.confirmed[i]
                        && prev != letter
                    {
                        return Err(SolverError::ConflictingFeedback(format!(
                            "position {i} is already confirmed as '{}', got '{ch}'",
                            prev as char
                        )));
                    }
                    if next.misplaced[i].contains(&letter) || next.excluded.contains(&letter) {
                        return Err(SolverError::ConflictingFeedback(format!(
                            "'{ch}' was previously ruled out for position {i}"
                        )));
                    }
                    next.confirmed[i] = Some(letter);
                }
                Feedback::Present => {
                    if next.excluded.contains(&letter) {
                        return Err(SolverError::ConflictingFeedback(format!(
                            "'{ch}' was previously excluded from the word"
                        )));
                    }
                    if next.confirmed[i] == Some(letter) {
                        return Err(SolverError::ConflictingFeedback(format!(
                            "'{ch}' is confirmed at position {i} but now reported misplaced"
                        )));
                    }
                    next.misplaced[i].insert(letter);
                }
                Feedback::Absent => {
                    if next.confirmed.contains(&Some(letter))
                        || next.misplaced.iter().any(|set| set.contains(&letter))
                    {
                        return Err(SolverError::ConflictingFeedback(format!(
                            "'{ch}' was previously seen in the word but now reported absent"
                        )));
                    }
                    next.excluded.insert(letter);
                }
            }
        }

        Ok(next)
    }

    /// Test a single word against the accumulated constraints
    ///
    /// A word is admitted iff:
    /// 1. every confirmed position holds exactly its confirmed letter;
    /// 2. every unconfirmed position avoids that position's misplaced set
    ///    and the global exclusions;
    /// 3. every misplaced letter occurs somewhere in the word.
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        for i in 0..WORD_LEN {
            let letter = word.char_at(i);
            match self.confirmed[i] {
                Some(confirmed) => {
                    if letter != confirmed {
                        return false;
                    }
                }
                None => {
                    if self.misplaced[i].contains(&letter) || self.excluded.contains(&letter) {
                        return false;
                    }
                }
            }
        }

        self.misplaced
            .iter()
            .flatten()
            .all(|&letter| word.has_letter(letter))
    }

    /// Keep only the words consistent with the constraints
    ///
    /// Pure filter: applying it twice yields the same set as once, and the
    /// output is always a subset of the input.
    #[must_use]
    pub fn prune(&self, words: &[Word]) -> Vec<Word> {
        words.iter().filter(|w| self.admits(w)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn code(s: &str) -> FeedbackCode {
        FeedbackCode::parse(s).unwrap()
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| word(s)).collect()
    }

    #[test]
    fn apply_records_all_clue_kinds() {
        let state = ConstraintState::new()
            .apply(&word("CRANE"), &code("gyxxy"))
            .unwrap();

        // C confirmed at 0; R misplaced at 1; A and N excluded; E misplaced at 4
        assert!(state.admits(&word("CIDER")));
        assert!(!state.admits(&word("PRICE"))); // P at 0 contradicts confirmed C
        assert!(!state.admits(&word("CREST"))); // R sits in its banned position
        assert!(!state.admits(&word("CURVE"))); // E sits in its banned position
    }

    #[test]
    fn admits_requires_confirmed_position() {
        let state = ConstraintState::new()
            .apply(&word("CRANE"), &code("gxxxx"))
            .unwrap();

        assert!(state.admits(&word("CLOUD")));
        assert!(!state.admits(&word("SLATE"))); // no C at position 0 (and excluded letters)
    }

    #[test]
    fn admits_rejects_misplaced_letter_at_same_position() {
        let state = ConstraintState::new()
            .apply(&word("CRANE"), &code("yxxxx"))
            .unwrap();

        // C is in the word but not at position 0
        assert!(!state.admits(&word("CLOUD")));
        assert!(state.admits(&word("MUSIC")));
    }

    #[test]
    fn admits_requires_misplaced_letters_somewhere() {
        let state = ConstraintState::new()
            .apply(&word("CRANE"), &code("yxxxx"))
            .unwrap();

        // No C at all
        assert!(!state.admits(&word("PILOT")));
    }

    #[test]
    fn admits_rejects_excluded_letters() {
        let state = ConstraintState::new()
            .apply(&word("CRANE"), &code("xxxxx"))
            .unwrap();

        assert!(!state.admits(&word("CLOUD"))); // contains C
        assert!(!state.admits(&word("SPORT"))); // contains R
        assert!(state.admits(&word("PILOT")));
    }

    #[test]
    fn exclusions_only_constrain_open_positions() {
        let state = ConstraintState::new()
            .apply(&word("SLATE"), &code("gxxxx"))
            .unwrap();

        // L, A, T, E are out; the confirmed S at position 0 stays required
        assert!(state.admits(&word("SHOWN")));
        assert!(!state.admits(&word("SHINE"))); // contains excluded E
        assert!(!state.admits(&word("CROWN"))); // missing the confirmed S
    }

    #[test]
    fn conflict_match_contradicts_confirmed() {
        let state = ConstraintState::new()
            .apply(&word("CRANE"), &code("gxxxx"))
            .unwrap();

        let err = state.apply(&word("BRAVO"), &code("gxxxx")).unwrap_err();
        assert!(matches!(err, SolverError::ConflictingFeedback(_)));
    }

    #[test]
    fn conflict_match_on_excluded_letter() {
        let state = ConstraintState::new()
            .apply(&word("CRANE"), &code("xxxxx"))
            .unwrap();

        let err = state.apply(&word("CLOUD"), &code("gxxxx")).unwrap_err();
        assert!(matches!(err, SolverError::ConflictingFeedback(_)));
    }

    #[test]
    fn conflict_match_on_misplaced_letter() {
        let state = ConstraintState::new()
            .apply(&word("CRANE"), &code("yxxxx"))
            .unwrap();

        // C was reported misplaced at position 0, now claimed matched there
        let err = state.apply(&word("CLOUD"), &code("gxxxx")).unwrap_err();
        assert!(matches!(err, SolverError::ConflictingFeedback(_)));
    }

    #[test]
    fn conflict_present_on_excluded_letter() {
        let state = ConstraintState::new()
            .apply(&word("CRANE"), &code("xxxxx"))
            .unwrap();

        let err = state.apply(&word("CLOUD"), &code("yxxxx")).unwrap_err();
        assert!(matches!(err, SolverError::ConflictingFeedback(_)));
    }

    #[test]
    fn conflict_absent_on_confirmed_letter() {
        let state = ConstraintState::new()
            .apply(&word("CRANE"), &code("gxxxx"))
            .unwrap();

        let err = state.apply(&word("CLOUD"), &code("xxxxx")).unwrap_err();
        assert!(matches!(err, SolverError::ConflictingFeedback(_)));
    }

    #[test]
    fn apply_does_not_mutate_receiver() {
        let base = ConstraintState::new();
        let _tightened = base.apply(&word("CRANE"), &code("gyxxy")).unwrap();

        // Base state still admits everything
        assert!(base.admits(&word("PILOT")));
        assert!(base.admits(&word("CRANE")));
    }

    #[test]
    fn prune_is_idempotent() {
        let state = ConstraintState::new()
            .apply(&word("CRANE"), &code("xyxxg"))
            .unwrap();

        let pool = words(&["PRICE", "WROTE", "SPORE", "SLATE", "CLOUD"]);
        let once = state.prune(&pool);
        let twice = state.prune(&once);

        assert_eq!(once, twice);
    }

    #[test]
    fn prune_output_is_subset() {
        let state = ConstraintState::new()
            .apply(&word("SLATE"), &code("xxyxx"))
            .unwrap();

        let pool = words(&["CRANE", "PRICE", "ABOUT", "PIANO", "MUSIC"]);
        let pruned = state.prune(&pool);

        assert!(pruned.len() <= pool.len());
        for w in &pruned {
            assert!(pool.contains(w));
        }
    }

    #[test]
    fn empty_state_admits_everything() {
        let state = ConstraintState::new();
        let pool = words(&["CRANE", "SLATE", "PILOT"]);
        assert_eq!(state.prune(&pool), pool);
    }
}
