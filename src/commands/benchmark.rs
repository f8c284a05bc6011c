//! Benchmark command
//!
//! Solves every dictionary word with a given strategy and aggregates the
//! tries distribution. Sessions are fully independent (each owns its
//! candidate set and constraints), so they run in parallel over a shared
//! read-only dictionary.

use crate::core::{FeedbackCode, Word};
use crate::solver::{SolverError, SolverSession, Strategy, StrategyKind, Turn};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Tries a puzzle is allowed before it counts as not solved
pub const TRY_LIMIT: usize = 6;

/// Result of benchmarking one strategy over a word list
pub struct BenchmarkResult {
    pub strategy: String,
    pub opening_word: Option<String>,
    pub total_words: usize,
    pub total_tries: usize,
    pub average_tries: f64,
    /// Words needing more than [`TRY_LIMIT`] tries
    pub over_limit: usize,
    /// Words the engine could not solve at all (exhausted candidates)
    pub unsolved: usize,
    /// tries → number of words solved in exactly that many tries
    pub distribution: HashMap<usize, usize>,
    pub hardest_word: Option<(String, usize)>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Solve one puzzle to completion, returning the number of tries
///
/// `None` means the candidate set ran out before the solution was found,
/// which cannot happen when the feedback is generated consistently but is
/// still absorbed as a normal outcome so the batch keeps going.
fn solve_one(
    words: &[Word],
    strategy: &StrategyKind,
    opening: Option<&Word>,
    solution: &Word,
) -> Result<Option<usize>, SolverError> {
    let mut session = SolverSession::new(words, strategy.clone());
    if let Some(word) = opening {
        session = session.with_opening_word(word.clone());
    }

    let mut feedback: Option<FeedbackCode> = None;
    let mut tries = 0;

    loop {
        match session.next_guess(feedback.as_ref())? {
            Turn::Solved => return Ok(Some(tries)),
            Turn::Exhausted => return Ok(None),
            Turn::Guess(word) => {
                tries += 1;
                feedback = Some(FeedbackCode::score(solution, &word));
            }
        }
    }
}

/// Benchmark one strategy across `words`, using every word as a solution
///
/// The opening word is computed once up front (or taken from
/// `forced_opening`) and reused by every session; this is what saves the
/// O(N²) first-move evaluation from being repeated per puzzle.
///
/// # Errors
/// Propagates `SolverError` from the engine; with internally generated
/// feedback this only fires on a bug in the caller's wiring.
pub fn run_benchmark(
    words: &[Word],
    strategy: &StrategyKind,
    forced_opening: Option<&Word>,
    show_progress: bool,
) -> Result<BenchmarkResult, SolverError> {
    let opening = match forced_opening {
        Some(word) => Some(word.clone()),
        None => strategy.clone().select(words).cloned(),
    };

    let pb = if show_progress {
        let pb = ProgressBar::new(words.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let outcomes: Result<Vec<(String, Option<usize>)>, SolverError> = words
        .par_iter()
        .map(|solution| {
            let tries = solve_one(words, strategy, opening.as_ref(), solution);
            pb.inc(1);
            tries.map(|t| (solution.text().to_string(), t))
        })
        .collect();
    let outcomes = outcomes?;

    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_words = words.len();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut total_tries = 0;
    let mut over_limit = 0;
    let mut unsolved = 0;
    let mut hardest_word: Option<(String, usize)> = None;

    for (word, tries) in outcomes {
        match tries {
            Some(tries) => {
                *distribution.entry(tries).or_insert(0) += 1;
                total_tries += tries;
                if tries > TRY_LIMIT {
                    over_limit += 1;
                }
                if hardest_word.as_ref().is_none_or(|(_, worst)| tries > *worst) {
                    hardest_word = Some((word, tries));
                }
            }
            None => unsolved += 1,
        }
    }

    let solved = total_words - unsolved;

    Ok(BenchmarkResult {
        strategy: strategy.name().to_string(),
        opening_word: opening.map(|w| w.text().to_string()),
        total_words,
        total_tries,
        average_tries: if solved > 0 {
            total_tries as f64 / solved as f64
        } else {
            0.0
        },
        over_limit,
        unsolved,
        distribution,
        hardest_word,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| Word::new(*s).unwrap()).collect()
    }

    fn pool() -> Vec<Word> {
        words(&[
            "CRANE", "SLATE", "PILOT", "MUSIC", "ABOUT", "PRIME", "SHOUT", "TRAIN", "FROST",
            "BADGE",
        ])
    }

    #[test]
    fn benchmark_solves_every_word() {
        let pool = pool();
        let strategy = StrategyKind::from_name("miw").unwrap();

        let result = run_benchmark(&pool, &strategy, None, false).unwrap();

        assert_eq!(result.total_words, pool.len());
        assert_eq!(result.unsolved, 0);
        assert!(result.average_tries >= 1.0);
    }

    #[test]
    fn benchmark_distribution_sums_to_solved_words() {
        let pool = pool();
        let strategy = StrategyKind::from_name("mil").unwrap();

        let result = run_benchmark(&pool, &strategy, None, false).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_words - result.unsolved);
    }

    #[test]
    fn benchmark_with_forced_opening_word() {
        let pool = pool();
        let strategy = StrategyKind::from_name("mil").unwrap();
        let forced = Word::new("CRANE").unwrap();

        let result = run_benchmark(&pool, &strategy, Some(&forced), false).unwrap();

        assert_eq!(result.opening_word.as_deref(), Some("CRANE"));
        assert_eq!(result.unsolved, 0);
    }

    #[test]
    fn benchmark_empty_word_list() {
        let pool: Vec<Word> = vec![];
        let strategy = StrategyKind::from_name("miw").unwrap();

        let result = run_benchmark(&pool, &strategy, None, false).unwrap();

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_tries, 0);
        assert!(result.hardest_word.is_none());
        assert!(result.opening_word.is_none());
    }

    #[test]
    fn benchmark_tracks_hardest_word() {
        let pool = pool();
        let strategy = StrategyKind::from_name("miw").unwrap();

        let result = run_benchmark(&pool, &strategy, None, false).unwrap();

        let (_, worst) = result.hardest_word.unwrap();
        assert!(worst >= 1);
        assert!(
            result
                .distribution
                .keys()
                .all(|&tries| tries <= worst)
        );
    }

    #[test]
    fn benchmark_random_strategy_terminates() {
        let pool = pool();
        let strategy = StrategyKind::Random(crate::solver::RandomStrategy::with_seed(7));

        let result = run_benchmark(&pool, &strategy, None, false).unwrap();
        assert_eq!(result.unsolved, 0);
    }
}
