//! In-memory store
//!
//! Holds the same records as the file store without touching the disk.
//! Used by tests and available for ephemeral play.

use super::ResultStore;
use crate::records::{DailyResult, GameResult};
use crate::stats::Stats;
use std::io;

/// Store that keeps everything in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    daily: Option<DailyResult>,
    stats: Option<Stats>,
    practice: Vec<GameResult>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultStore for MemoryStore {
    fn load_daily(&self, date_key: &str) -> Option<DailyResult> {
        self.daily
            .as_ref()
            .filter(|result| result.is_for(date_key))
            .cloned()
    }

    fn save_daily(&mut self, result: &DailyResult) -> io::Result<()> {
        self.daily = Some(result.clone());
        Ok(())
    }

    fn clear_daily(&mut self) -> io::Result<()> {
        self.daily = None;
        Ok(())
    }

    fn load_stats(&self) -> Option<Stats> {
        self.stats.clone()
    }

    fn save_stats(&mut self, stats: &Stats) -> io::Result<()> {
        self.stats = Some(stats.clone());
        Ok(())
    }

    fn load_practice(&self) -> Vec<GameResult> {
        self.practice.clone()
    }

    fn save_practice(&mut self, results: &[GameResult]) -> io::Result<()> {
        self.practice = results.to_vec();
        Ok(())
    }
}
