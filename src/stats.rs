//! Statistics aggregation
//!
//! A single rolling `Stats` record per player, updated only by completed
//! sessions. Updates are pure: `apply` and `undo` return new values rather
//! than mutating, and persistence stays the store's job.

use crate::core::{Completion, DEFAULT_MAX_GUESSES};
use serde::{Deserialize, Serialize};

/// The part of a completion that statistics care about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub won: bool,
    pub attempts: usize,
}

impl From<&Completion> for GameOutcome {
    fn from(completion: &Completion) -> Self {
        Self {
            won: completion.won,
            attempts: completion.attempts,
        }
    }
}

/// Streak values captured before an [`apply`](Stats::apply)
///
/// A zeroed or extended streak cannot be reconstructed from the aggregate
/// alone (a win that ties the previous record is ambiguous), so whoever
/// wants to undo a result must retain this pre-image alongside it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakBaseline {
    pub current: u32,
    pub max: u32,
}

/// How many games ended at each attempt count, plus failures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessDistribution {
    /// `wins[i]` is the number of games won in `i + 1` attempts
    wins: Vec<u32>,
    fail: u32,
}

impl Default for GuessDistribution {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_GUESSES)
    }
}

impl GuessDistribution {
    #[must_use]
    pub fn new(max_guesses: usize) -> Self {
        Self {
            wins: vec![0; max_guesses],
            fail: 0,
        }
    }

    /// Games won in exactly `attempts` attempts (1-based)
    #[must_use]
    pub fn wins_in(&self, attempts: usize) -> u32 {
        attempts
            .checked_sub(1)
            .and_then(|i| self.wins.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// Games lost
    #[inline]
    #[must_use]
    pub fn failures(&self) -> u32 {
        self.fail
    }

    /// Highest attempt count tracked
    #[inline]
    #[must_use]
    pub fn max_guesses(&self) -> usize {
        self.wins.len()
    }

    /// Largest single bucket, for scaling distribution bars
    #[must_use]
    pub fn max_bucket(&self) -> u32 {
        self.wins.iter().copied().max().unwrap_or(0).max(self.fail)
    }

    fn record_win(&mut self, attempts: usize) {
        if let Some(slot) = attempts.checked_sub(1).and_then(|i| self.wins.get_mut(i)) {
            *slot += 1;
        }
    }

    fn unrecord_win(&mut self, attempts: usize) {
        if let Some(slot) = attempts.checked_sub(1).and_then(|i| self.wins.get_mut(i)) {
            *slot = slot.saturating_sub(1);
        }
    }

    fn record_fail(&mut self) {
        self.fail += 1;
    }

    fn unrecord_fail(&mut self) {
        self.fail = self.fail.saturating_sub(1);
    }
}

/// Rolling aggregate over all completed daily games
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub current_streak: u32,
    pub max_streak: u32,
    pub total_games: u32,
    pub wins: u32,
    pub attempts: GuessDistribution,
}

impl Stats {
    #[must_use]
    pub fn new(max_guesses: usize) -> Self {
        Self {
            attempts: GuessDistribution::new(max_guesses),
            ..Self::default()
        }
    }

    /// The streak pre-image to retain before applying a result
    #[must_use]
    pub fn baseline(&self) -> StreakBaseline {
        StreakBaseline {
            current: self.current_streak,
            max: self.max_streak,
        }
    }

    /// Fold one completed game into the aggregate
    ///
    /// A win extends the streak and its attempt bucket; a loss breaks the
    /// streak and lands in the fail bucket.
    #[must_use]
    pub fn apply(&self, outcome: &GameOutcome) -> Self {
        let mut next = self.clone();
        next.total_games += 1;

        if outcome.won {
            next.wins += 1;
            next.current_streak += 1;
            next.max_streak = next.max_streak.max(next.current_streak);
            next.attempts.record_win(outcome.attempts);
        } else {
            next.current_streak = 0;
            next.attempts.record_fail();
        }

        next
    }

    /// Reverse the most recent [`apply`](Self::apply) of `outcome`
    ///
    /// `baseline` is the streak pre-image captured (via
    /// [`baseline`](Self::baseline)) before that apply. With it, every
    /// field is restored exactly: `undo(apply(s, r), r, s.baseline()) == s`.
    #[must_use]
    pub fn undo(&self, outcome: &GameOutcome, baseline: StreakBaseline) -> Self {
        let mut prev = self.clone();
        prev.total_games = prev.total_games.saturating_sub(1);

        if outcome.won {
            prev.wins = prev.wins.saturating_sub(1);
            prev.attempts.unrecord_win(outcome.attempts);
        } else {
            prev.attempts.unrecord_fail();
        }

        prev.current_streak = baseline.current;
        prev.max_streak = baseline.max;
        prev
    }

    /// Fraction of games won, in `0.0..=1.0`
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.total_games)
        }
    }

    /// Whether any games have been recorded
    #[inline]
    #[must_use]
    pub fn has_games(&self) -> bool {
        self.total_games > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIN_IN_3: GameOutcome = GameOutcome {
        won: true,
        attempts: 3,
    };
    const LOSS: GameOutcome = GameOutcome {
        won: false,
        attempts: 6,
    };

    #[test]
    fn first_win_from_zero_state() {
        let stats = Stats::default().apply(&WIN_IN_3);

        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 1);
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.wins, 1);
        assert_eq!(stats.attempts.wins_in(3), 1);
        assert_eq!(stats.attempts.failures(), 0);
    }

    #[test]
    fn loss_breaks_streak_and_counts_fail() {
        let stats = Stats::default()
            .apply(&WIN_IN_3)
            .apply(&WIN_IN_3)
            .apply(&LOSS);

        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.attempts.failures(), 1);
    }

    #[test]
    fn max_streak_survives_later_losses() {
        let mut stats = Stats::default();
        for _ in 0..4 {
            stats = stats.apply(&WIN_IN_3);
        }
        stats = stats.apply(&LOSS).apply(&WIN_IN_3);

        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 4);
    }

    #[test]
    fn undo_is_the_exact_inverse_of_apply() {
        // Walk a varied history; at every step undo must return to the
        // previous state exactly
        let history = [WIN_IN_3, WIN_IN_3, LOSS, WIN_IN_3, LOSS, LOSS, WIN_IN_3];

        let mut stats = Stats::default();
        for outcome in history {
            let before = stats.clone();
            let after = before.apply(&outcome);
            assert_eq!(after.undo(&outcome, before.baseline()), before);
            stats = after;
        }
    }

    #[test]
    fn undo_restores_a_tied_record() {
        // Win, loss, win: the second win ties the record of 1 rather than
        // raising it; undo must keep the record at 1
        let before = Stats::default().apply(&WIN_IN_3).apply(&LOSS);
        assert_eq!(before.max_streak, 1);
        assert_eq!(before.current_streak, 0);

        let after = before.apply(&WIN_IN_3);
        assert_eq!(after.max_streak, 1);
        assert_eq!(after.undo(&WIN_IN_3, before.baseline()), before);
    }

    #[test]
    fn undo_restores_a_raised_record() {
        let before = Stats::default().apply(&WIN_IN_3).apply(&WIN_IN_3);
        assert_eq!(before.max_streak, 2);

        let after = before.apply(&WIN_IN_3);
        assert_eq!(after.max_streak, 3);
        assert_eq!(after.undo(&WIN_IN_3, before.baseline()), before);
    }

    #[test]
    fn undo_from_single_game_returns_to_zero_state() {
        let zero = Stats::default();

        let after = zero.apply(&WIN_IN_3);
        assert_eq!(after.undo(&WIN_IN_3, zero.baseline()), zero);

        let after = zero.apply(&LOSS);
        assert_eq!(after.undo(&LOSS, zero.baseline()), zero);
    }

    #[test]
    fn win_rate() {
        let mut stats = Stats::default();
        assert!((stats.win_rate() - 0.0).abs() < f64::EPSILON);

        stats = stats.apply(&WIN_IN_3).apply(&LOSS);
        assert!((stats.win_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn distribution_ignores_out_of_range_attempts() {
        let dist = GuessDistribution::new(6);
        assert_eq!(dist.wins_in(0), 0);
        assert_eq!(dist.wins_in(7), 0);
    }

    #[test]
    fn stats_round_trip_through_json() {
        let stats = Stats::default().apply(&WIN_IN_3).apply(&LOSS);

        let json = serde_json::to_string(&stats).unwrap();
        let parsed: Stats = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, stats);
    }
}
