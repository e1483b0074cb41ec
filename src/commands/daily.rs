//! Daily puzzle command
//!
//! One word per calendar day. A completed game is persisted and shown
//! instead of a fresh board until the day rolls over (or the result is
//! discarded with `reset`).

use super::round::{RoundEnd, play_round};
use crate::core::{GameConfig, GameSession, HintTracker};
use crate::output::{print_completion, print_daily_result};
use crate::records::{DailyResult, date_key, today};
use crate::stats::{GameOutcome, Stats};
use crate::store::ResultStore;
use crate::words::WordBank;
use anyhow::Result;
use colored::Colorize;

/// Run the daily puzzle in the plain terminal
///
/// # Errors
///
/// Returns an error if reading input or persisting the result fails.
pub fn run_daily(
    bank: &WordBank,
    store: &mut dyn ResultStore,
    config: &GameConfig,
) -> Result<()> {
    let date = today();
    let key = date_key(date);

    // Already played today: show the saved result instead of a new board
    if let Some(saved) = store.load_daily(&key) {
        print_daily_result(&saved);
        return Ok(());
    }

    let target = bank.daily(date).clone();
    let mut session = GameSession::new(target, config);
    let mut hints = HintTracker::new(config.max_hints);

    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(" {} ", "DAILY WORDLE".bright_cyan().bold());
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\nGuess the {}-letter word in {} tries.",
        config.word_length, config.max_guesses
    );
    println!("Commands: 'hint' to reveal a letter, 'quit' to exit.\n");

    match play_round(&mut session, &mut hints)? {
        RoundEnd::Quit => {
            println!("\n👋 Come back later - today's word will wait for you.\n");
            Ok(())
        }
        RoundEnd::Completed => {
            print_completion(&session);
            finish_daily(store, &session, date)
        }
    }
}

/// Persist the finished game: fold it into the stats and save the snapshot
fn finish_daily(
    store: &mut dyn ResultStore,
    session: &GameSession,
    date: chrono::NaiveDate,
) -> Result<()> {
    let Some(completion) = session.completion() else {
        return Ok(());
    };

    let stats = store
        .load_stats()
        .unwrap_or_else(|| Stats::new(session.max_guesses()));
    let baseline = stats.baseline();

    let updated = stats.apply(&GameOutcome::from(&completion));
    store.save_stats(&updated)?;

    if let Some(result) = DailyResult::from_session(session, date, baseline) {
        store.save_daily(&result)?;
    }

    println!(
        "  Current streak: {}   Max streak: {}\n",
        updated.current_streak.to_string().bright_yellow().bold(),
        updated.max_streak
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    // The interactive loop reads stdin, so command tests exercise the
    // persistence path directly
    #[test]
    fn finish_daily_saves_result_and_stats() {
        let config = GameConfig::default();
        let bank = WordBank::builtin();
        let date = today();

        let mut session = GameSession::new(bank.daily(date).clone(), &config);
        let winning = session.target().text().to_string();
        session.submit_guess(&winning).unwrap();

        let mut store = MemoryStore::new();
        finish_daily(&mut store, &session, date).unwrap();

        let saved = store.load_daily(&date_key(date)).unwrap();
        assert!(saved.won);
        assert_eq!(saved.attempts, 1);
        assert_eq!(saved.word, winning);

        let stats = store.load_stats().unwrap();
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.attempts.wins_in(1), 1);
    }

    #[test]
    fn finish_daily_retains_streak_baseline() {
        let config = GameConfig::default();
        let date = today();

        // Seed existing stats with one win
        let mut store = MemoryStore::new();
        let prior = Stats::default().apply(&GameOutcome {
            won: true,
            attempts: 4,
        });
        store.save_stats(&prior).unwrap();

        let bank = WordBank::builtin();
        let mut session = GameSession::new(bank.daily(date).clone(), &config);
        let winning = session.target().text().to_string();
        session.submit_guess(&winning).unwrap();

        finish_daily(&mut store, &session, date).unwrap();

        let saved = store.load_daily(&date_key(date)).unwrap();
        assert_eq!(saved.streak_before, prior.baseline());

        let stats = store.load_stats().unwrap();
        assert_eq!(stats.current_streak, 2);
    }
}
