//! Core game logic
//!
//! This module contains the fundamental domain types with no I/O: word
//! validation, guess evaluation, the game session state machine, and hint
//! selection. Everything here is pure and deterministic (hints take the
//! random generator as a parameter).

mod evaluation;
mod hint;
mod session;
mod word;

pub use evaluation::{Evaluation, LetterMark, LetterStatus};
pub use hint::{Hint, HintTracker};
pub use session::{
    Completion, DEFAULT_MAX_GUESSES, DEFAULT_MAX_HINTS, GameConfig, GameSession, GameStatus,
    GuessRejection,
};
pub use word::{DEFAULT_WORD_LENGTH, Word, WordError};
