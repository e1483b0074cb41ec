//! Word lists and word selection
//!
//! Provides the embedded answer list compiled into the binary, a loader for
//! custom lists, and the [`WordBank`] that picks the daily or practice word.

mod bank;
mod embedded;
pub mod loader;

pub use bank::{WordBank, WordBankError};
pub use embedded::{ANSWERS, ANSWERS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        // All answers should be 5 letters, lowercase
        for &word in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn answers_contain_no_duplicates() {
        let unique: std::collections::HashSet<_> = ANSWERS.iter().collect();
        assert_eq!(unique.len(), ANSWERS.len());
    }

    #[test]
    fn original_daily_words_are_present() {
        for word in ["world", "happy", "smile", "beach", "dream"] {
            assert!(
                ANSWERS.contains(&word),
                "expected '{word}' in the answer list"
            );
        }
    }
}
