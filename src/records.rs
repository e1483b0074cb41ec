//! Completed-game snapshots
//!
//! Once a session reaches a terminal state an immutable record is derived
//! from it and handed to the store; the session itself is discarded. Daily
//! games produce a [`DailyResult`] keyed by calendar day, practice games a
//! timestamped [`GameResult`].

use crate::core::GameSession;
use crate::stats::{GameOutcome, StreakBaseline};
use chrono::{Datelike, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Key for one calendar day, e.g. `"2026-8-7"`
///
/// Month and day are 1-based and unpadded; the same key feeds the daily
/// word seed, so the format is load-bearing.
#[must_use]
pub fn date_key(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

/// Today's date in the local timezone
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Milliseconds since the epoch, for practice-game timestamps
#[must_use]
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Snapshot of a completed daily game
///
/// `streak_before` retains the stats pre-image so discarding the result
/// can reverse its stats contribution exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyResult {
    pub word: String,
    pub won: bool,
    pub attempts: usize,
    pub date: String,
    pub guesses: Vec<String>,
    #[serde(default)]
    pub streak_before: StreakBaseline,
}

impl DailyResult {
    /// Derive the snapshot from a terminal session
    ///
    /// Returns `None` while the session is still in progress.
    #[must_use]
    pub fn from_session(
        session: &GameSession,
        date: NaiveDate,
        streak_before: StreakBaseline,
    ) -> Option<Self> {
        let completion = session.completion()?;

        Some(Self {
            word: session.target().text().to_string(),
            won: completion.won,
            attempts: completion.attempts,
            date: date_key(date),
            guesses: completion.guesses,
            streak_before,
        })
    }

    /// The outcome this result contributed to the stats
    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        GameOutcome {
            won: self.won,
            attempts: self.attempts,
        }
    }

    /// Whether this result belongs to the given day
    #[must_use]
    pub fn is_for(&self, key: &str) -> bool {
        self.date == key
    }
}

/// Snapshot of a completed practice game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub word: String,
    pub attempts: usize,
    pub won: bool,
    /// Milliseconds since the epoch
    pub timestamp: i64,
    pub guesses: Vec<String>,
}

impl GameResult {
    /// Derive the snapshot from a terminal session
    ///
    /// Returns `None` while the session is still in progress.
    #[must_use]
    pub fn from_session(session: &GameSession, timestamp: i64) -> Option<Self> {
        let completion = session.completion()?;

        Some(Self {
            word: session.target().text().to_string(),
            attempts: completion.attempts,
            won: completion.won,
            timestamp,
            guesses: completion.guesses,
        })
    }
}
