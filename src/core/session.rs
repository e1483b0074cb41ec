//! Game session state machine
//!
//! A session starts `InProgress` with an empty guess history, accepts
//! validated guesses one at a time, and transitions to `Won` on an exact
//! match or `Lost` when the guess budget is spent. Terminal states absorb:
//! once over, every further submission is rejected.

use super::evaluation::{Evaluation, LetterStatus};
use super::word::{DEFAULT_WORD_LENGTH, Word, WordError};
use rustc_hash::FxHashMap;
use std::fmt;

/// Maximum guesses per game when no explicit configuration is given
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Maximum hints per game when no explicit configuration is given
pub const DEFAULT_MAX_HINTS: usize = 3;

/// Policy values for one game
///
/// These are policy, not structure: everything downstream reads lengths and
/// budgets from here rather than hardcoding the classic 5/6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_guesses: usize,
    pub max_hints: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_guesses: DEFAULT_MAX_GUESSES,
            max_hints: DEFAULT_MAX_HINTS,
        }
    }
}

/// Progress of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Why a submitted guess was not accepted
///
/// Rejections are local: the session state is unchanged and the caller
/// simply re-prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessRejection {
    /// The session is already Won or Lost
    GameOver,
    WrongLength { expected: usize, actual: usize },
    InvalidCharacters,
}

impl fmt::Display for GuessRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "The game is already over"),
            Self::WrongLength { expected, actual } => {
                write!(f, "Guess must be exactly {expected} letters, got {actual}")
            }
            Self::InvalidCharacters => write!(f, "Guess may only contain letters"),
        }
    }
}

impl std::error::Error for GuessRejection {}

impl From<WordError> for GuessRejection {
    fn from(err: WordError) -> Self {
        match err {
            WordError::InvalidLength { expected, actual } => {
                Self::WrongLength { expected, actual }
            }
            WordError::NonAscii | WordError::InvalidCharacters => Self::InvalidCharacters,
        }
    }
}

/// Completion event emitted when a session reaches a terminal state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub won: bool,
    pub attempts: usize,
    pub guesses: Vec<String>,
}

/// One game in progress (or finished)
///
/// The session owns its guess history during play; once terminal, an
/// immutable snapshot is derived for persistence and the session can be
/// discarded.
#[derive(Debug, Clone)]
pub struct GameSession {
    target: Word,
    guesses: Vec<Word>,
    evaluations: Vec<Evaluation>,
    status: GameStatus,
    max_guesses: usize,
}

impl GameSession {
    /// Start a new session for `target`
    ///
    /// The target word is the Word Source's responsibility; a target whose
    /// length disagrees with the configured word length is a precondition
    /// violation, caught in debug builds.
    #[must_use]
    pub fn new(target: Word, config: &GameConfig) -> Self {
        debug_assert_eq!(
            target.len(),
            config.word_length,
            "target length must match the configured word length"
        );

        Self {
            target,
            guesses: Vec::new(),
            evaluations: Vec::new(),
            status: GameStatus::InProgress,
            max_guesses: config.max_guesses,
        }
    }

    /// Submit one guess
    ///
    /// On acceptance the guess is normalized to uppercase, appended to the
    /// history, and evaluated; the session then transitions to `Won` if the
    /// guess equals the target, to `Lost` if this was the final allowed
    /// guess, and stays `InProgress` otherwise.
    ///
    /// # Errors
    /// Returns `GuessRejection` (with no state change) if the session is
    /// already over, or the input has the wrong length or non-letter
    /// characters.
    pub fn submit_guess(&mut self, raw: &str) -> Result<&Evaluation, GuessRejection> {
        if self.status != GameStatus::InProgress {
            return Err(GuessRejection::GameOver);
        }

        let guess = Word::with_length(raw, self.target.len())?;
        let evaluation = Evaluation::of(&self.target, &guess);
        let won = evaluation.is_winning();

        self.guesses.push(guess);
        self.evaluations.push(evaluation);

        if won {
            self.status = GameStatus::Won;
        } else if self.guesses.len() == self.max_guesses {
            self.status = GameStatus::Lost;
        }

        // Just pushed, so last() is always Some here
        Ok(self
            .evaluations
            .last()
            .expect("evaluation was pushed above"))
    }

    /// The word being guessed
    #[inline]
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the session has reached Won or Lost
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Submitted guesses, in submission order
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Evaluations, one per submitted guess, in submission order
    #[inline]
    #[must_use]
    pub fn evaluations(&self) -> &[Evaluation] {
        &self.evaluations
    }

    /// Number of guesses used so far
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.guesses.len()
    }

    /// Guesses still available
    #[inline]
    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.max_guesses - self.guesses.len()
    }

    /// Total guesses allowed in this session
    #[inline]
    #[must_use]
    pub fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// The completion event, once the session is terminal
    ///
    /// Returns `None` while the session is still in progress.
    #[must_use]
    pub fn completion(&self) -> Option<Completion> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won | GameStatus::Lost => Some(Completion {
                won: self.status == GameStatus::Won,
                attempts: self.guesses.len(),
                guesses: self
                    .guesses
                    .iter()
                    .map(|word| word.text().to_string())
                    .collect(),
            }),
        }
    }

    /// Best-known status per guessed letter, across all submitted guesses
    ///
    /// Correct beats Present beats Absent; a letter never downgrades. This
    /// is the rule the on-screen keyboard colors by.
    #[must_use]
    pub fn letter_hints(&self) -> FxHashMap<char, LetterStatus> {
        let mut hints: FxHashMap<char, LetterStatus> = FxHashMap::default();

        for evaluation in &self.evaluations {
            for mark in evaluation.marks() {
                let entry = hints.entry(mark.letter).or_insert(mark.status);
                *entry = match (*entry, mark.status) {
                    (LetterStatus::Correct, _) | (_, LetterStatus::Correct) => {
                        LetterStatus::Correct
                    }
                    (LetterStatus::Present, _) | (_, LetterStatus::Present) => {
                        LetterStatus::Present
                    }
                    (LetterStatus::Absent, LetterStatus::Absent) => LetterStatus::Absent,
                };
            }
        }

        hints
    }
}
