//! Shared guess loop for the plain-terminal game modes

use crate::core::{GameSession, HintTracker};
use crate::output::tile_row;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// How an interactive round ended
pub(crate) enum RoundEnd {
    /// The session reached Won or Lost
    Completed,
    /// The player quit mid-game
    Quit,
}

/// Drive one session to completion (or until the player quits)
///
/// Reads guesses from stdin, echoes colored tile rows, and handles the
/// `hint` and `quit` commands. Rejected guesses re-prompt without using up
/// an attempt.
pub(crate) fn play_round(session: &mut GameSession, hints: &mut HintTracker) -> Result<RoundEnd> {
    loop {
        let prompt = format!(
            "Guess {}/{}",
            session.attempts() + 1,
            session.max_guesses()
        );
        let input = get_user_input(&prompt)?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(RoundEnd::Quit),
            "hint" | "h" => {
                give_hint(session, hints);
                continue;
            }
            "" => continue,
            _ => match session.submit_guess(&input) {
                Ok(evaluation) => {
                    println!("\n  {}\n", tile_row(evaluation));
                }
                Err(rejection) => {
                    println!("❌ {rejection}\n");
                    continue;
                }
            },
        }

        if session.is_over() {
            return Ok(RoundEnd::Completed);
        }
    }
}

fn give_hint(session: &GameSession, hints: &mut HintTracker) {
    match hints.pick(session, &mut rand::rng()) {
        Some(hint) => {
            println!(
                "\n💡 Letter {} is at position {}. {} {} remaining.\n",
                hint.letter.to_string().bright_yellow().bold(),
                hint.position + 1,
                hints.hints_remaining(),
                if hints.hints_remaining() == 1 {
                    "hint"
                } else {
                    "hints"
                }
            );
        }
        None if hints.hints_remaining() == 0 => {
            println!("\nNo hints left this game.\n");
        }
        None => {
            println!("\nNothing left to reveal - every position is already solved.\n");
        }
    }
}

/// Get user input with a prompt
pub(crate) fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
