//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{BenchmarkResult, TRY_LIMIT};
use colored::Colorize;

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "BENCHMARK:".bright_cyan().bold(),
        result.strategy.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    if let Some(opening) = &result.opening_word {
        println!("   Opening word:     {}", opening.bright_yellow());
    }
    println!(
        "   Average tries:    {}",
        format!("{:.4}", result.average_tries)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Over {} tries:     {} ({:.1}%)",
        TRY_LIMIT,
        result.over_limit,
        percent(result.over_limit, result.total_words)
    );
    if result.unsolved > 0 {
        println!(
            "   Unsolved:         {}",
            format!("{}", result.unsolved).red()
        );
    }
    if let Some((word, tries)) = &result.hardest_word {
        println!(
            "   Hardest word:     {} ({} tries)",
            word.bright_yellow(),
            format!("{tries}").yellow()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_tries = result.distribution.keys().copied().max().unwrap_or(0);
    let max_count = result.distribution.values().copied().max().unwrap_or(0);

    for tries in 1..=max_tries {
        let count = result.distribution.get(&tries).copied().unwrap_or(0);
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        let line = format!(
            "   {tries:2}: {bar} {count:4} ({:5.1}%)",
            percent(count, result.total_words)
        );
        if tries > TRY_LIMIT {
            println!("{}", line.red());
        } else {
            println!("{line}");
        }
    }
    println!();
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        (part as f64 / whole as f64) * 100.0
    }
}
