//! Word selection
//!
//! The bank is the game's word source: a deterministic pick per calendar
//! day for the daily puzzle, and a uniform random pick for practice.

use crate::core::Word;
use crate::records::date_key;
use chrono::NaiveDate;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

use super::embedded::ANSWERS;
use super::loader::words_from_slice;

/// Error type for word bank construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordBankError {
    Empty,
}

impl fmt::Display for WordBankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word list contains no usable words"),
        }
    }
}

impl std::error::Error for WordBankError {}

/// A non-empty pool of answer words
#[derive(Debug, Clone)]
pub struct WordBank {
    words: Vec<Word>,
}

impl WordBank {
    /// Create a bank from a list of words
    ///
    /// # Errors
    /// Returns `WordBankError::Empty` if the list has no words: an empty
    /// bank could never start a session.
    pub fn new(words: Vec<Word>) -> Result<Self, WordBankError> {
        if words.is_empty() {
            return Err(WordBankError::Empty);
        }
        log::debug!("word bank holds {} words", words.len());
        Ok(Self { words })
    }

    /// The bank backed by the embedded answer list
    ///
    /// # Panics
    /// Will not panic - the embedded list is generated at build time and
    /// verified non-empty by tests.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(words_from_slice(ANSWERS)).expect("embedded answer list is never empty")
    }

    /// Number of words in the bank
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; construction rejects empty lists
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in the bank
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// The word for a given calendar day
    ///
    /// Deterministic: the day key's byte sum picks an index, so every call
    /// for the same date (and the same bank) yields the same word.
    #[must_use]
    pub fn daily(&self, date: NaiveDate) -> &Word {
        let key = date_key(date);
        let seed: usize = key.bytes().map(usize::from).sum();
        let index = seed % self.words.len();
        log::debug!("daily word for {key} is index {index}");
        &self.words[index]
    }

    /// A uniformly random word, for practice games
    ///
    /// # Panics
    /// Will not panic - the bank is never empty.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        self.words
            .choose(rng)
            .expect("word bank is never empty")
    }
}
