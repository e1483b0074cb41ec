//! Hint selection
//!
//! A hint reveals one letter of the target at a position the player has
//! neither guessed correctly nor been shown before. Hints are budgeted per
//! session.

use super::evaluation::LetterStatus;
use super::session::GameSession;
use rand::Rng;
use rand::seq::IndexedRandom;

/// A revealed letter/position pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub letter: char,
    /// Zero-based position in the target word
    pub position: usize,
}

/// Tracks revealed positions and enforces the per-session hint budget
#[derive(Debug, Clone)]
pub struct HintTracker {
    revealed: Vec<usize>,
    max_hints: usize,
}

impl HintTracker {
    #[must_use]
    pub fn new(max_hints: usize) -> Self {
        Self {
            revealed: Vec::new(),
            max_hints,
        }
    }

    /// Number of hints used so far
    #[inline]
    #[must_use]
    pub fn hints_used(&self) -> usize {
        self.revealed.len()
    }

    /// Hints still available
    #[inline]
    #[must_use]
    pub fn hints_remaining(&self) -> usize {
        self.max_hints.saturating_sub(self.revealed.len())
    }

    /// Positions already revealed as hints
    #[inline]
    #[must_use]
    pub fn revealed(&self) -> &[usize] {
        &self.revealed
    }

    /// Pick a hint for the current session state
    ///
    /// Chooses uniformly at random among positions that are not correctly
    /// guessed in any submitted guess and have not been revealed before.
    /// Returns `None` when the budget is spent or no eligible position
    /// remains. On success, the chosen position is marked as revealed so it
    /// is not repeated.
    pub fn pick<R: Rng + ?Sized>(&mut self, session: &GameSession, rng: &mut R) -> Option<Hint> {
        if self.revealed.len() >= self.max_hints {
            return None;
        }

        let target = session.target();

        // Positions the player already has right
        let mut solved = vec![false; target.len()];
        for evaluation in session.evaluations() {
            for (i, mark) in evaluation.marks().iter().enumerate() {
                if mark.status == LetterStatus::Correct {
                    solved[i] = true;
                }
            }
        }

        let candidates: Vec<usize> = (0..target.len())
            .filter(|&i| !solved[i] && !self.revealed.contains(&i))
            .collect();

        let position = *candidates.choose(rng)?;
        self.revealed.push(position);

        Some(Hint {
            letter: target.letter_at(position),
            position,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, Word};

    fn session(target: &str) -> GameSession {
        GameSession::new(Word::new(target).unwrap(), &GameConfig::default())
    }

    #[test]
    fn hint_reveals_a_target_letter() {
        let session = session("dream");
        let mut tracker = HintTracker::new(3);

        let hint = tracker.pick(&session, &mut rand::rng()).unwrap();
        assert_eq!(hint.letter, session.target().letter_at(hint.position));
        assert_eq!(tracker.hints_used(), 1);
        assert_eq!(tracker.hints_remaining(), 2);
    }

    #[test]
    fn hints_never_repeat_a_position() {
        let session = session("dream");
        let mut tracker = HintTracker::new(5);
        let mut seen = Vec::new();

        for _ in 0..5 {
            let hint = tracker.pick(&session, &mut rand::rng()).unwrap();
            assert!(!seen.contains(&hint.position));
            seen.push(hint.position);
        }

        // Every position is revealed now
        assert!(tracker.pick(&session, &mut rand::rng()).is_none());
    }

    #[test]
    fn budget_is_enforced() {
        let session = session("dream");
        let mut tracker = HintTracker::new(3);

        for _ in 0..3 {
            assert!(tracker.pick(&session, &mut rand::rng()).is_some());
        }
        assert!(tracker.pick(&session, &mut rand::rng()).is_none());
        assert_eq!(tracker.hints_remaining(), 0);
    }

    #[test]
    fn correctly_guessed_positions_are_skipped() {
        let mut session = session("dream");
        // DRAMA gets D and R correct
        session.submit_guess("drama").unwrap();

        let mut tracker = HintTracker::new(5);
        for _ in 0..3 {
            let hint = tracker.pick(&session, &mut rand::rng()).unwrap();
            assert!(hint.position >= 2, "positions 0 and 1 are already solved");
        }

        // Only E, A, M positions were eligible
        assert!(tracker.pick(&session, &mut rand::rng()).is_none());
    }

    #[test]
    fn no_hint_when_word_fully_solved() {
        let mut session = session("dream");
        session.submit_guess("dream").unwrap();

        let mut tracker = HintTracker::new(3);
        assert!(tracker.pick(&session, &mut rand::rng()).is_none());
        assert_eq!(tracker.hints_used(), 0);
    }
}
