//! Practice mode command
//!
//! Endless random words. Each finished round is prepended to the rolling
//! practice history; stats and streaks are daily-only and untouched here.

use super::round::{RoundEnd, get_user_input, play_round};
use crate::core::{GameConfig, GameSession, HintTracker};
use crate::output::print_completion;
use crate::records::{GameResult, now_millis};
use crate::store::ResultStore;
use crate::words::WordBank;
use anyhow::Result;
use colored::Colorize;

/// Run practice games in the plain terminal until the player stops
///
/// # Errors
///
/// Returns an error if reading input or persisting the history fails.
pub fn run_practice(
    bank: &WordBank,
    store: &mut dyn ResultStore,
    config: &GameConfig,
) -> Result<()> {
    let mut results = store.load_practice();

    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(" {} ", "PRACTICE MODE".bright_cyan().bold());
    println!("{}", "═".repeat(60).bright_cyan());
    println!("\nRandom words, as many rounds as you like.");
    println!("Commands: 'hint' to reveal a letter, 'quit' to exit.\n");

    loop {
        let target = bank.random(&mut rand::rng()).clone();
        let mut session = GameSession::new(target, config);
        let mut hints = HintTracker::new(config.max_hints);

        match play_round(&mut session, &mut hints)? {
            RoundEnd::Quit => break,
            RoundEnd::Completed => {
                print_completion(&session);

                if let Some(result) = GameResult::from_session(&session, now_millis()) {
                    results.insert(0, result);
                    store.save_practice(&results)?;
                }

                print_recent(&results);

                match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                    "yes" | "y" => println!("\n🔄 New word!\n"),
                    _ => break,
                }
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Show the most recent practice results, newest first
fn print_recent(results: &[GameResult]) {
    if results.is_empty() {
        return;
    }

    println!("  {}", "Recent games:".bright_cyan().bold());
    for result in results.iter().take(5) {
        let verdict = if result.won {
            format!(
                "{} {}",
                result.attempts,
                if result.attempts == 1 { "try" } else { "tries" }
            )
            .green()
        } else {
            "failed".to_string().red()
        };
        println!("    {} - {}", result.word.bright_white().bold(), verdict);
    }
    println!();
}
