//! Interactive solver mode
//!
//! Suggests words to play in a real game and reads the gyx responses back,
//! one line per turn. Malformed responses are re-prompted here in the
//! driver; the engine itself never retries.

use crate::core::{FeedbackCode, Word};
use crate::solver::{SolverError, SolverSession, StrategyKind, Turn};
use colored::Colorize;
use std::io::{self, Write};

/// One line of user input, already interpreted
enum Response {
    Code(FeedbackCode),
    NewGame,
    Quit,
}

/// Run the interactive solver loop
///
/// # Errors
///
/// Returns an error on I/O failures reading user input.
pub fn run_solver(
    words: &[Word],
    strategy: StrategyKind,
    opening: Option<Word>,
) -> Result<(), String> {
    println!("\n{}", "─".repeat(70));
    println!("Solving WORDLE with the '{}' strategy.", strategy.name());
    println!("{}", "─".repeat(70));
    println!(
        "\nPlay the suggested word in some game engine and type the response back.\n\
         \nWhen typing the response use:\n\
         \x20   - g - for a right letter in the right place (green)\n\
         \x20   - y - for a right letter in the wrong place (yellow)\n\
         \x20   - x - for a wrong letter (gray)\n\
         \nFor example:\n\
         \x20   If the solution is:   DRINK\n\
         \x20   and we try:           FROND\n\
         \x20   the response will be: xgxgy\n\
         \nCommands: 'quit' to exit, 'new' to start over.\n"
    );

    let mut session = SolverSession::new(words, strategy);
    if let Some(word) = opening {
        session = session.with_opening_word(word);
    }

    let mut feedback: Option<FeedbackCode> = None;
    let mut turn_no = 0;

    loop {
        turn_no += 1;

        let turn = loop {
            match session.next_guess(feedback.as_ref()) {
                Ok(turn) => break turn,
                Err(err @ SolverError::ConflictingFeedback(_)) => {
                    // The call aborted without touching the state; ask for
                    // the response to the same word again.
                    println!("{} {err}", "✗".red());
                    match read_response()? {
                        Response::Code(code) => feedback = Some(code),
                        Response::NewGame => {
                            feedback = None;
                            turn_no = 1;
                            println!("\nNew game started!\n");
                        }
                        Response::Quit => return Ok(()),
                    }
                }
                Err(err) => return Err(err.to_string()),
            }
        };

        match turn {
            Turn::Solved => {
                println!("\n{}", format!("Done in {turn_no} tries!").green().bold());
                return Ok(());
            }
            Turn::Exhausted => {
                println!("\n{}", "Can't solve it, sorry!".red());
                println!("No dictionary word is consistent with those responses.\n");
                return Ok(());
            }
            Turn::Guess(word) => {
                println!(
                    "Try #{turn_no}: {}   {}",
                    word.text().bright_yellow().bold(),
                    format!("({} candidates)", session.candidates().len()).bright_black()
                );

                match read_response()? {
                    Response::Code(code) => feedback = Some(code),
                    Response::NewGame => {
                        feedback = None;
                        turn_no = 0;
                        println!("\nNew game started!\n");
                    }
                    Response::Quit => {
                        println!("\nBye!\n");
                        return Ok(());
                    }
                }
            }
        }
    }
}

/// Read one gyx response, re-prompting on malformed input
fn read_response() -> Result<Response, String> {
    loop {
        let input = read_line("Response")?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => return Ok(Response::Quit),
            "new" | "n" => return Ok(Response::NewGame),
            _ => match FeedbackCode::parse(&input) {
                Ok(code) => return Ok(Response::Code(code)),
                Err(err) => println!("{} {err}", "✗".red()),
            },
        }
    }
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
