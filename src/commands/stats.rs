//! Statistics report command

use crate::output::print_stats_report;
use crate::store::ResultStore;
use anyhow::Result;

/// Print streaks, win rate, guess distribution, and practice history
///
/// # Errors
///
/// Currently infallible; the signature matches the other commands.
pub fn run_stats(store: &dyn ResultStore) -> Result<()> {
    let stats = store.load_stats().unwrap_or_default();
    let practice = store.load_practice();

    print_stats_report(&stats, &practice);
    Ok(())
}
