//! Guess selection strategies
//!
//! A strategy picks the next word to play out of the current candidate set.
//! Three variants are registered, addressed by the short names the CLI and
//! drivers use: `rnd`, `mil` and `miw`.

use crate::core::{FeedbackCode, WORD_LEN, Word};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;

/// A strategy for selecting the next guess from the candidate pool
///
/// Returns `None` when the candidate pool is empty (or, for the entropy
/// variants, when no candidate improves on the starting score, which only
/// happens on an empty pool).
pub trait Strategy {
    fn select<'a>(&mut self, candidates: &'a [Word]) -> Option<&'a Word>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection by name while keeping static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyKind {
    /// Uniform random pick (`rnd`)
    Random(RandomStrategy),
    /// Per-position letter information maximization (`mil`)
    LetterEntropy(LetterEntropyStrategy),
    /// Whole-word partition entropy maximization (`miw`)
    WordEntropy(WordEntropyStrategy),
}

impl StrategyKind {
    /// Resolve a strategy from its registered name
    ///
    /// Supported names: "rnd", "mil", "miw". Returns `None` for anything
    /// else; resolution happens at configuration time, never mid-game.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "rnd" => Some(Self::Random(RandomStrategy::new())),
            "mil" => Some(Self::LetterEntropy(LetterEntropyStrategy)),
            "miw" => Some(Self::WordEntropy(WordEntropyStrategy)),
            _ => None,
        }
    }

    /// The registered name of this strategy
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Random(_) => "rnd",
            Self::LetterEntropy(_) => "mil",
            Self::WordEntropy(_) => "miw",
        }
    }
}

impl Strategy for StrategyKind {
    fn select<'a>(&mut self, candidates: &'a [Word]) -> Option<&'a Word> {
        match self {
            Self::Random(s) => s.select(candidates),
            Self::LetterEntropy(s) => s.select(candidates),
            Self::WordEntropy(s) => s.select(candidates),
        }
    }
}

/// Uniform random selection from the candidates
///
/// Non-deterministic by default; seedable for reproducible tests.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a strategy with a fixed seed
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn select<'a>(&mut self, candidates: &'a [Word]) -> Option<&'a Word> {
        candidates.choose(&mut self.rng)
    }
}

/// Picks the word maximizing the summed information of its letters
///
/// For every (position, letter) pair the strategy estimates three smoothed
/// probabilities over the candidate set: the letter matches that position,
/// the letter is present elsewhere, or the letter is absent. Counts start
/// at 1 with `N = candidates + 1` so no probability is ever zero. The score
/// of a word is the sum of the 3-outcome Shannon entropies of its five
/// letters; duplicate letters contribute once per position.
///
/// This is a per-letter approximation: it never looks at the joint feedback
/// of a whole guess, which keeps it O(N) per call.
#[derive(Debug, Clone, Copy)]
pub struct LetterEntropyStrategy;

impl Strategy for LetterEntropyStrategy {
    fn select<'a>(&mut self, candidates: &'a [Word]) -> Option<&'a Word> {
        let info = letter_information(candidates);

        let mut best: Option<&Word> = None;
        let mut best_score = 0.0;

        for word in candidates {
            let score: f64 = word
                .chars()
                .iter()
                .enumerate()
                .map(|(i, &letter)| info[i][(letter - b'A') as usize])
                .sum();

            // Strict comparison: the earlier word wins exact ties
            if score > best_score {
                best_score = score;
                best = Some(word);
            }
        }

        best
    }
}

/// Per-position, per-letter smoothed 3-outcome entropy over the candidates
fn letter_information(candidates: &[Word]) -> [[f64; 26]; WORD_LEN] {
    // "+1" to avoid log2(0)
    let n = (candidates.len() + 1) as f64;
    let mut info = [[0.0f64; 26]; WORD_LEN];

    for (i, row) in info.iter_mut().enumerate() {
        for (slot, letter) in row.iter_mut().zip(b'A'..=b'Z') {
            let (mut g, mut y, mut x) = (1u32, 1u32, 1u32);

            for word in candidates {
                if word.char_at(i) == letter {
                    g += 1;
                } else if word.has_letter(letter) {
                    y += 1;
                } else {
                    x += 1;
                }
            }

            let (pg, py, px) = (f64::from(g) / n, f64::from(y) / n, f64::from(x) / n);
            *slot = -(pg * pg.log2() + py * py.log2() + px * px.log2());
        }
    }

    info
}

/// Picks the word whose feedback partitions the candidates most evenly
///
/// For each candidate guess, every candidate solution is bucketed by the
/// feedback code the guess would receive against it; the score is the
/// Shannon entropy of the bucket sizes. O(N²) codec calls per selection,
/// run sequentially: correctness over speed for dictionaries of a few
/// thousand words.
#[derive(Debug, Clone, Copy)]
pub struct WordEntropyStrategy;

impl Strategy for WordEntropyStrategy {
    fn select<'a>(&mut self, candidates: &'a [Word]) -> Option<&'a Word> {
        let n = candidates.len() as f64;

        let mut best: Option<&Word> = None;
        let mut best_score = 0.0;

        for guess in candidates {
            let mut partitions: FxHashMap<FeedbackCode, usize> = FxHashMap::default();
            for solution in candidates {
                *partitions
                    .entry(FeedbackCode::score(solution, guess))
                    .or_insert(0) += 1;
            }

            let score: f64 = partitions
                .values()
                .map(|&count| {
                    let p = count as f64 / n;
                    -p * p.log2()
                })
                .sum();

            // Non-strict comparison: the later word wins exact ties. This
            // also selects the sole member of a singleton candidate set,
            // whose partition entropy is zero.
            if score >= best_score {
                best_score = score;
                best = Some(guess);
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| Word::new(*s).unwrap()).collect()
    }

    #[test]
    fn from_name_resolves_registered_strategies() {
        assert!(matches!(
            StrategyKind::from_name("rnd"),
            Some(StrategyKind::Random(_))
        ));
        assert!(matches!(
            StrategyKind::from_name("mil"),
            Some(StrategyKind::LetterEntropy(_))
        ));
        assert!(matches!(
            StrategyKind::from_name("miw"),
            Some(StrategyKind::WordEntropy(_))
        ));
        assert!(StrategyKind::from_name("entropy").is_none());
        assert!(StrategyKind::from_name("").is_none());
    }

    #[test]
    fn name_round_trips() {
        for name in ["rnd", "mil", "miw"] {
            assert_eq!(StrategyKind::from_name(name).unwrap().name(), name);
        }
    }

    #[test]
    fn all_strategies_return_none_on_empty_pool() {
        let empty: Vec<Word> = vec![];
        for name in ["rnd", "mil", "miw"] {
            let mut strategy = StrategyKind::from_name(name).unwrap();
            assert!(strategy.select(&empty).is_none(), "strategy {name}");
        }
    }

    #[test]
    fn all_strategies_pick_the_single_candidate() {
        let pool = words(&["CRANE"]);
        for name in ["rnd", "mil", "miw"] {
            let mut strategy = StrategyKind::from_name(name).unwrap();
            assert_eq!(
                strategy.select(&pool).unwrap().text(),
                "CRANE",
                "strategy {name}"
            );
        }
    }

    #[test]
    fn random_is_deterministic_with_seed() {
        let pool = words(&["CRANE", "SLATE", "PILOT", "MUSIC", "ABOUT"]);

        let mut a = RandomStrategy::with_seed(42);
        let mut b = RandomStrategy::with_seed(42);

        for _ in 0..10 {
            assert_eq!(a.select(&pool), b.select(&pool));
        }
    }

    #[test]
    fn random_picks_from_pool() {
        let pool = words(&["CRANE", "SLATE", "PILOT"]);
        let mut strategy = RandomStrategy::new();

        for _ in 0..20 {
            let pick = strategy.select(&pool).unwrap();
            assert!(pool.contains(pick));
        }
    }

    #[test]
    fn letter_entropy_scores_duplicate_letters_independently() {
        // A splits this pool close to evenly at every position, so AAAAA
        // collects that entropy five times over. No per-word deduplication
        // is applied; repeated letters each count.
        let pool = words(&["AAAAA", "CRANE", "SLOTH", "PRIME"]);
        let mut strategy = LetterEntropyStrategy;

        assert_eq!(strategy.select(&pool).unwrap().text(), "AAAAA");
    }

    #[test]
    fn letter_entropy_keeps_earlier_word_on_tie() {
        // The pool is mirror-symmetric: both words score identically, so the
        // strict comparison must keep the first one.
        let pool = words(&["ABCDE", "EDCBA"]);
        let mut strategy = LetterEntropyStrategy;

        assert_eq!(strategy.select(&pool).unwrap().text(), "ABCDE");
    }

    #[test]
    fn word_entropy_keeps_later_word_on_tie() {
        // Same mirror-symmetric pool: both words partition it identically,
        // and the non-strict comparison lets the later one overwrite.
        let pool = words(&["ABCDE", "EDCBA"]);
        let mut strategy = WordEntropyStrategy;

        assert_eq!(strategy.select(&pool).unwrap().text(), "EDCBA");
    }

    #[test]
    fn word_entropy_prefers_the_best_splitter() {
        // CCCCC lumps the other three words into one bucket (0.81 bits);
        // each AAAXX variant separates all four candidates (2 bits), and the
        // last of those equal scorers wins the >= update.
        let pool = words(&["AAAAA", "AAAAB", "AAABB", "CCCCC"]);
        let mut strategy = WordEntropyStrategy;

        let pick = strategy.select(&pool).unwrap();
        assert_ne!(pick.text(), "CCCCC");
        assert_eq!(pick.text(), "AAABB");
    }

    #[test]
    fn word_entropy_scores_partition_sizes() {
        // Two words that fully distinguish each other: picking either yields
        // a two-bucket partition, entropy 1 bit; the selection must succeed.
        let pool = words(&["ABCDE", "FGHIJ"]);
        let mut strategy = WordEntropyStrategy;

        assert!(strategy.select(&pool).is_some());
    }

    #[test]
    fn letter_information_is_positive() {
        let pool = words(&["CRANE", "SLATE"]);
        let info = letter_information(&pool);

        for row in &info {
            for &value in row {
                assert!(value > 0.0);
            }
        }
    }
}
