//! Result persistence
//!
//! The store is an injected collaborator: game flows talk to the
//! [`ResultStore`] trait and never to the filesystem directly. One record
//! holds today's daily result, one the rolling stats, one the practice
//! history.
//!
//! Load paths never fail hard: a missing, malformed, or stale record reads
//! as absent and the game proceeds as if no prior state existed.

mod json;
mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

use crate::records::{DailyResult, GameResult};
use crate::stats::Stats;
use std::io;

/// Key-value persistence for game results and statistics
pub trait ResultStore {
    /// Today's daily result, if one was saved for `date_key`
    ///
    /// A record from another day is stale and reads as `None`.
    fn load_daily(&self, date_key: &str) -> Option<DailyResult>;

    /// Persist a completed daily game
    ///
    /// # Errors
    /// Returns an I/O error if the record cannot be written.
    fn save_daily(&mut self, result: &DailyResult) -> io::Result<()>;

    /// Discard the saved daily result, if any
    ///
    /// # Errors
    /// Returns an I/O error if the record cannot be removed.
    fn clear_daily(&mut self) -> io::Result<()>;

    /// The rolling statistics, if any were saved
    fn load_stats(&self) -> Option<Stats>;

    /// Persist the rolling statistics
    ///
    /// # Errors
    /// Returns an I/O error if the record cannot be written.
    fn save_stats(&mut self, stats: &Stats) -> io::Result<()>;

    /// All saved practice results, most recent first
    fn load_practice(&self) -> Vec<GameResult>;

    /// Persist the practice history
    ///
    /// # Errors
    /// Returns an I/O error if the record cannot be written.
    fn save_practice(&mut self, results: &[GameResult]) -> io::Result<()>;
}
