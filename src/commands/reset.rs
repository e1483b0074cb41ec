//! Reset command
//!
//! Discards today's completed daily game: the saved result is removed and
//! its stats contribution reversed exactly, using the streak pre-image
//! retained in the record.

use crate::records::{date_key, today};
use crate::store::ResultStore;
use anyhow::Result;
use colored::Colorize;

/// Discard today's daily result so the puzzle can be replayed
///
/// # Errors
///
/// Returns an error if the store cannot be updated.
pub fn run_reset(store: &mut dyn ResultStore) -> Result<()> {
    let key = date_key(today());

    let Some(result) = store.load_daily(&key) else {
        println!("\nNo completed daily game for today - nothing to reset.\n");
        return Ok(());
    };

    store.clear_daily()?;

    if let Some(stats) = store.load_stats() {
        let reverted = stats.undo(&result.outcome(), result.streak_before);
        store.save_stats(&reverted)?;
    }

    println!(
        "\n🔄 Today's game ({}) was discarded. Run {} to play again.\n",
        result.word.bright_yellow().bold(),
        "wordle play".bright_cyan()
    );
    Ok(())
}
