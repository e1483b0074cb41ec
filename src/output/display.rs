//! Display functions for command results

use super::formatters::{distribution_bar, share_strip, tile_row};
use crate::core::{Evaluation, GameSession, GameStatus, Word};
use crate::records::{DailyResult, GameResult};
use crate::stats::Stats;
use chrono::{Local, TimeZone};
use colored::Colorize;

/// Print the board of a finished or in-progress session
pub fn print_board(session: &GameSession) {
    println!();
    for evaluation in session.evaluations() {
        println!("  {}", tile_row(evaluation));
    }
    println!();
}

/// Print the final board and banner for a completed session
pub fn print_completion(session: &GameSession) {
    print_board(session);

    match session.status() {
        GameStatus::Won => {
            let attempts = session.attempts();
            println!("\n{}", "═".repeat(60).bright_cyan());
            println!(
                "{}",
                "    🎉 Congratulations! 🎉    ".bright_green().bold()
            );
            println!("{}", "═".repeat(60).bright_cyan());

            let performance = match attempts {
                1 => "🏆 Hole in one! Extraordinary!",
                2 => "🔥 Magnificent! Two guesses!",
                3 => "✨ Splendid! Three guesses!",
                4 => "👏 Great job! Four guesses!",
                5 => "🎉 Nice work! Five guesses!",
                _ => "😅 Phew! Got it on the last try!",
            };
            println!("\n  {}", performance.bright_yellow().bold());
            println!(
                "\n  You found the word {} in {} {}",
                session.target().text().bright_green().bold(),
                attempts.to_string().bright_cyan().bold(),
                if attempts == 1 { "try" } else { "tries" }
            );
        }
        GameStatus::Lost => {
            println!("\n{}", "═".repeat(60).bright_cyan());
            println!("{}", "    Game Over    ".bright_red().bold());
            println!("{}", "═".repeat(60).bright_cyan());
            println!(
                "\n  The word was {}",
                session.target().text().bright_red().bold()
            );
            println!("  Better luck next time!");
        }
        GameStatus::InProgress => {}
    }

    println!("\n  Share strip:");
    for line in share_strip(session.evaluations()).lines() {
        println!("    {line}");
    }
    println!();
}

/// Print a previously saved daily result
///
/// The board is reconstructed by re-evaluating the saved guesses against
/// the saved word.
pub fn print_daily_result(result: &DailyResult) {
    println!("\n{}", "─".repeat(60).cyan());
    if result.won {
        println!(
            "  ✅ {} in {} {}!",
            "Solved".bright_green().bold(),
            result.attempts,
            if result.attempts == 1 { "try" } else { "tries" }
        );
    } else {
        println!(
            "  ❌ {} - the word was {}",
            "Not solved".bright_red().bold(),
            result.word.bright_yellow().bold()
        );
    }
    println!("{}", "─".repeat(60).cyan());

    if let Ok(target) = Word::with_length(&result.word, result.word.len()) {
        println!();
        for guess in &result.guesses {
            if let Ok(guess) = Word::with_length(guess, target.len()) {
                println!("  {}", tile_row(&Evaluation::of(&target, &guess)));
            }
        }
    }

    println!("\n  Come back tomorrow for a new word.");
    println!("  (Use 'wordle reset' to discard this result and replay.)\n");
}

/// Print the statistics report
pub fn print_stats_report(stats: &Stats, practice: &[GameResult]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n  Current streak:  {}",
        stats.current_streak.to_string().bright_yellow().bold()
    );
    println!(
        "  Max streak:      {}",
        stats.max_streak.to_string().bright_yellow().bold()
    );
    println!("  Games played:    {}", stats.total_games);
    println!(
        "  Win rate:        {:.0}%",
        stats.win_rate() * 100.0
    );

    println!("\n  {}", "Guess distribution:".bright_cyan().bold());
    if stats.has_games() {
        let max_bucket = stats.attempts.max_bucket();
        for attempts in 1..=stats.attempts.max_guesses() {
            let count = stats.attempts.wins_in(attempts);
            println!(
                "  {attempts:>4}  [{}] {count}",
                distribution_bar(count, max_bucket, 24).green()
            );
        }
        let fails = stats.attempts.failures();
        println!(
            "  fail  [{}] {fails}",
            distribution_bar(fails, max_bucket, 24).red()
        );
    } else {
        println!("  Play some games to see your guess distribution!");
    }

    print_practice_summary(practice);
}

fn print_practice_summary(practice: &[GameResult]) {
    println!("\n  {}", "Practice games:".bright_cyan().bold());
    if practice.is_empty() {
        println!("  Play some practice games to see your history!\n");
        return;
    }

    let won = practice.iter().filter(|r| r.won).count();
    println!("  {} played, {} won", practice.len(), won);

    for result in practice.iter().take(5) {
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
        println!(
            "    {} - {} ({})",
            result.word.bright_white().bold(),
            verdict,
            format_timestamp(result.timestamp)
        );
    }
    println!();
}

fn format_timestamp(millis: i64) -> String {
    Local
        .timestamp_millis_opt(millis)
        .single()
        .map_or_else(|| "unknown time".to_string(), |t| t.format("%H:%M").to_string())
}
