//! WORDLE Solver - CLI
//!
//! Solves, plays and benchmarks WORDLE puzzles with pluggable strategies.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use wordlesolver::{
    commands::{run_benchmark, run_player, run_solver},
    core::Word,
    output::print_benchmark_result,
    solver::StrategyKind,
    wordlists::{WORDS, loader::load_from_file, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordlesolver",
    about = "WORDLE solver with random and information-maximizing strategies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: miw (default), mil, rnd
    #[arg(short, long, global = true, default_value = "miw")]
    strategy: String,

    /// Path to a custom word list (one 5-letter word per line)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive solver: suggests words, reads gyx responses back (default)
    Solve {
        /// Override the opening word
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },

    /// Play a game: the machine picks a word and scores your guesses
    Play,

    /// Benchmark a strategy over every word in the dictionary
    Benchmark {
        /// Override the opening word
        #[arg(short = 'f', long)]
        first_word: Option<String>,

        /// Benchmark all three strategies instead of just one
        #[arg(short, long)]
        all: bool,
    },
}

/// Load the word list from the -w flag, or the embedded dictionary
fn load_words(wordlist: Option<&str>) -> Result<Vec<Word>> {
    let words = match wordlist {
        Some(path) => load_from_file(path)?,
        None => words_from_slice(WORDS),
    };

    if words.is_empty() {
        return Err(anyhow!("the word list is empty"));
    }
    Ok(words)
}

fn resolve_strategy(name: &str) -> Result<StrategyKind> {
    StrategyKind::from_name(name)
        .ok_or_else(|| anyhow!("unknown strategy '{name}' (expected one of: rnd, mil, miw)"))
}

/// Resolve an opening-word override against the dictionary
fn resolve_first_word(first_word: Option<&str>, words: &[Word]) -> Result<Option<Word>> {
    let Some(text) = first_word else {
        return Ok(None);
    };

    let word = Word::new(text)?;
    if !words.contains(&word) {
        return Err(anyhow!("'{}' is not in the word list", word.text()));
    }
    Ok(Some(word))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_words(cli.wordlist.as_deref())?;

    // Default to the interactive solver if no command given
    let command = cli.command.unwrap_or(Commands::Solve { first_word: None });

    match command {
        Commands::Solve { first_word } => {
            let strategy = resolve_strategy(&cli.strategy)?;
            let opening = resolve_first_word(first_word.as_deref(), &words)?;
            run_solver(&words, strategy, opening).map_err(|e| anyhow!(e))
        }
        Commands::Play => run_player(&words).map_err(|e| anyhow!(e)),
        Commands::Benchmark { first_word, all } => {
            let opening = resolve_first_word(first_word.as_deref(), &words)?;
            let strategies: Vec<StrategyKind> = if all {
                ["rnd", "mil", "miw"]
                    .iter()
                    .filter_map(|name| StrategyKind::from_name(name))
                    .collect()
            } else {
                vec![resolve_strategy(&cli.strategy)?]
            };

            for strategy in &strategies {
                println!(
                    "\nBenchmarking '{}' over {} words...",
                    strategy.name(),
                    words.len()
                );
                let result = run_benchmark(&words, strategy, opening.as_ref(), true)
                    .map_err(|e| anyhow!(e.to_string()))?;
                print_benchmark_result(&result);
            }
            Ok(())
        }
    }
}
