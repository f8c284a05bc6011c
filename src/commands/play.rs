//! Interactive play mode
//!
//! Flips the roles of the solver mode: the program picks a secret word and
//! scores the user's guesses, printing the gyx response after each one.

use crate::core::{Feedback, FeedbackCode, Word};
use crate::solver::{RandomStrategy, Strategy};
use colored::Colorize;
use std::io::{self, Write};

/// Tries the player gets before the solution is revealed
const PLAY_TRY_LIMIT: usize = 6;

/// One line of user input, already interpreted
enum Guess {
    Word(Word),
    NewGame,
    Quit,
}

/// Run the interactive play loop
///
/// # Errors
///
/// Returns an error on I/O failures reading user input, or if the
/// dictionary is empty.
pub fn run_player(words: &[Word]) -> Result<(), String> {
    let mut picker = RandomStrategy::new();

    println!("\n{}", "─".repeat(70));
    println!("Playing WORDLE against the machine.");
    println!("{}", "─".repeat(70));
    println!(
        "\nI picked a 5 letter word. You have {PLAY_TRY_LIMIT} tries to find it.\n\
         \nAfter each guess you get a response:\n\
         \x20   - g - right letter in the right place (green)\n\
         \x20   - y - right letter in the wrong place (yellow)\n\
         \x20   - x - wrong letter (gray)\n\
         \nCommands: 'quit' to give up, 'new' to restart with a fresh word.\n"
    );

    let mut solution = pick_solution(&mut picker, words)?;
    let mut tries = 0;

    loop {
        match read_guess(words, tries + 1)? {
            Guess::Quit => {
                println!(
                    "\nThe word was {}. Better luck next time!\n",
                    solution.text().bright_yellow().bold()
                );
                return Ok(());
            }
            Guess::NewGame => {
                solution = pick_solution(&mut picker, words)?;
                tries = 0;
                println!("\nNew game started!\n");
            }
            Guess::Word(guess) => {
                tries += 1;
                let code = FeedbackCode::score(&solution, &guess);
                println!("          {}", colorize_response(&code));

                if code.is_all_match() {
                    println!("\n{}", format!("Done in {tries} tries!").green().bold());
                    return Ok(());
                }

                if tries >= PLAY_TRY_LIMIT {
                    println!(
                        "\n{} The word was {}.\n",
                        "Out of tries!".red().bold(),
                        solution.text().bright_yellow().bold()
                    );
                    return Ok(());
                }
            }
        }
    }
}

fn pick_solution(picker: &mut RandomStrategy, words: &[Word]) -> Result<Word, String> {
    picker
        .select(words)
        .cloned()
        .ok_or_else(|| "The word list is empty".to_string())
}

/// Read a dictionary word from the user, re-prompting on invalid input
fn read_guess(words: &[Word], try_no: usize) -> Result<Guess, String> {
    loop {
        let input = read_line(&format!("Try #{try_no}"))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(Guess::Quit),
            "new" | "n" => return Ok(Guess::NewGame),
            _ => {}
        }

        match Word::new(&input) {
            Ok(word) if words.contains(&word) => return Ok(Guess::Word(word)),
            Ok(word) => println!("{} {} is not in the word list", "✗".red(), word.text()),
            Err(err) => println!("{} {err}", "✗".red()),
        }
    }
}

/// Render a response with WORDLE colors in addition to the gyx letters
fn colorize_response(code: &FeedbackCode) -> String {
    code.clues()
        .iter()
        .map(|clue| match clue {
            Feedback::Match => "g".on_green().black().to_string(),
            Feedback::Present => "y".on_yellow().black().to_string(),
            Feedback::Absent => "x".on_bright_black().white().to_string(),
        })
        .collect()
}

/// Read a trimmed line from stdin with a prompt
fn read_line(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
