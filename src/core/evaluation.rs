//! Guess evaluation
//!
//! Evaluating a guess against the target word produces one status per
//! letter:
//! - Correct: letter matches the target at that position
//! - Present: letter occurs in the target at a different position
//! - Absent: letter does not occur (or all its occurrences are used up)

use super::Word;

/// Status of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    Correct,
    Present,
    Absent,
}

/// One guessed letter together with its status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterMark {
    pub letter: char,
    pub status: LetterStatus,
}

/// The evaluated form of one guess: an ordered row of letter marks
///
/// Order matches the guess, so the row renders directly as a board line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    marks: Vec<LetterMark>,
}

impl Evaluation {
    /// Evaluate `guess` against `target`
    ///
    /// This implements Wordle's exact feedback rules, including proper
    /// handling of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark all exact matches (Correct) and remove each from
    ///    the pool of available target letters
    /// 2. Second pass: mark present-but-wrong-position (Present) from the
    ///    remaining pool; everything else is Absent
    ///
    /// A letter appearing once in the target and twice in the guess yields
    /// exactly one Correct/Present and one Absent, never two Present.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Evaluation, LetterStatus, Word};
    ///
    /// let target = Word::new("slate").unwrap();
    /// let guess = Word::new("crane").unwrap();
    /// let eval = Evaluation::of(&target, &guess);
    ///
    /// // C(absent) R(absent) A(correct) N(absent) E(correct)
    /// assert_eq!(eval.marks()[2].status, LetterStatus::Correct);
    /// assert_eq!(eval.marks()[4].status, LetterStatus::Correct);
    /// assert_eq!(eval.correct_count(), 2);
    /// ```
    #[must_use]
    pub fn of(target: &Word, guess: &Word) -> Self {
        debug_assert_eq!(
            target.len(),
            guess.len(),
            "target and guess must be the same length"
        );

        let len = guess.len();
        let mut statuses = vec![LetterStatus::Absent; len];
        let mut available = target.letter_counts();

        // First pass: exact position matches
        for i in 0..len {
            if guess.bytes()[i] == target.bytes()[i] {
                statuses[i] = LetterStatus::Correct;

                // Remove from the available pool
                if let Some(count) = available.get_mut(&guess.bytes()[i]) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: right letter, wrong position
        for i in 0..len {
            if statuses[i] != LetterStatus::Correct {
                let letter = guess.bytes()[i];
                if let Some(count) = available.get_mut(&letter)
                    && *count > 0
                {
                    statuses[i] = LetterStatus::Present;
                    *count -= 1;
                }
            }
        }

        let marks = guess
            .bytes()
            .iter()
            .zip(statuses)
            .map(|(&letter, status)| LetterMark {
                letter: letter as char,
                status,
            })
            .collect();

        Self { marks }
    }

    /// The per-letter marks, in guess order
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[LetterMark] {
        &self.marks
    }

    /// Number of letters in the evaluated guess
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Whether the evaluation holds no marks (never true in practice)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Whether every letter is Correct (the guess equals the target)
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.marks
            .iter()
            .all(|mark| mark.status == LetterStatus::Correct)
    }

    /// Count the number of Correct marks
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.marks
            .iter()
            .filter(|mark| mark.status == LetterStatus::Correct)
            .count()
    }

    /// Convert the row to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks
            .iter()
            .map(|mark| match mark.status {
                LetterStatus::Correct => '🟩',
                LetterStatus::Present => '🟨',
                LetterStatus::Absent => '⬜',
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statuses(target: &str, guess: &str) -> Vec<LetterStatus> {
        let target = Word::new(target).unwrap();
        let guess = Word::new(guess).unwrap();
        Evaluation::of(&target, &guess)
            .marks()
            .iter()
            .map(|mark| mark.status)
            .collect()
    }

    #[test]
    fn all_absent_when_no_letters_shared() {
        let eval = statuses("fghij", "abcde");
        assert!(eval.iter().all(|&s| s == LetterStatus::Absent));
    }

    #[test]
    fn all_correct_when_guess_equals_target() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let target = Word::new(word).unwrap();
            let eval = Evaluation::of(&target, &target);
            assert!(eval.is_winning(), "{word} vs itself must be all Correct");
            assert_eq!(eval.correct_count(), 5);
        }
    }

    #[test]
    fn classic_example() {
        // CRANE vs SLATE: A and E are correct, R is absent (SLATE has no R)
        assert_eq!(
            statuses("slate", "crane"),
            vec![
                LetterStatus::Absent,
                LetterStatus::Absent,
                LetterStatus::Correct,
                LetterStatus::Absent,
                LetterStatus::Correct,
            ]
        );
    }

    #[test]
    fn duplicate_letters_in_guess_consume_target_pool() {
        // SPEED vs ERASE: S yellow, P gray, both E's yellow, D gray
        assert_eq!(
            statuses("erase", "speed"),
            vec![
                LetterStatus::Present,
                LetterStatus::Absent,
                LetterStatus::Present,
                LetterStatus::Present,
                LetterStatus::Absent,
            ]
        );
    }

    #[test]
    fn duplicate_letters_green_takes_priority() {
        // ROBOT vs FLOOR: first O yellow, second O green
        assert_eq!(
            statuses("floor", "robot"),
            vec![
                LetterStatus::Present,
                LetterStatus::Present,
                LetterStatus::Absent,
                LetterStatus::Correct,
                LetterStatus::Absent,
            ]
        );
    }

    #[test]
    fn single_target_letter_guessed_twice_yields_one_present() {
        // GLORY has one L; guessing LULLS gives exactly one Present L.
        let eval = statuses("glory", "lulls");
        let present_ls = eval
            .iter()
            .zip("LULLS".chars())
            .filter(|&(s, c)| c == 'L' && *s == LetterStatus::Present)
            .count();
        let absent_ls = eval
            .iter()
            .zip("LULLS".chars())
            .filter(|&(s, c)| c == 'L' && *s == LetterStatus::Absent)
            .count();
        assert_eq!(present_ls, 1);
        assert_eq!(absent_ls, 2);
    }

    #[test]
    fn lemon_against_smile() {
        // L, E, M all occur in SMILE but at other positions; O and N do not occur
        assert_eq!(
            statuses("smile", "lemon"),
            vec![
                LetterStatus::Present,
                LetterStatus::Present,
                LetterStatus::Present,
                LetterStatus::Absent,
                LetterStatus::Absent,
            ]
        );
    }

    #[test]
    fn pappy_against_happy() {
        // A, both middle P's, and Y match exactly; the leading P finds the
        // target's P pool already consumed by the exact matches
        assert_eq!(
            statuses("happy", "pappy"),
            vec![
                LetterStatus::Absent,
                LetterStatus::Correct,
                LetterStatus::Correct,
                LetterStatus::Correct,
                LetterStatus::Correct,
            ]
        );
    }

    #[test]
    fn correct_plus_present_never_exceeds_target_count() {
        let cases = [
            ("happy", "pappy"),
            ("erase", "speed"),
            ("floor", "robot"),
            ("aaaaa", "aabbb"),
            ("abbey", "babes"),
        ];

        for (target, guess) in cases {
            let target_word = Word::new(target).unwrap();
            let guess_word = Word::new(guess).unwrap();
            let eval = Evaluation::of(&target_word, &guess_word);

            for letter in b'A'..=b'Z' {
                let in_target = target_word
                    .bytes()
                    .iter()
                    .filter(|&&b| b == letter)
                    .count();
                let marked = eval
                    .marks()
                    .iter()
                    .filter(|mark| {
                        mark.letter as u8 == letter && mark.status != LetterStatus::Absent
                    })
                    .count();
                assert!(
                    marked <= in_target,
                    "{guess} vs {target}: letter {} marked {marked} times but target has {in_target}",
                    letter as char
                );
            }
        }
    }

    #[test]
    fn correct_count_matches_exact_positions() {
        let target = Word::new("crate").unwrap();
        let guess = Word::new("crane").unwrap();
        let eval = Evaluation::of(&target, &guess);
        assert_eq!(eval.correct_count(), 4); // C R A _ E
        assert!(!eval.is_winning());
    }

    #[test]
    fn emoji_row() {
        let target = Word::new("slate").unwrap();
        let guess = Word::new("crane").unwrap();
        let eval = Evaluation::of(&target, &guess);
        assert_eq!(eval.to_emoji(), "⬜⬜🟩⬜🟩");

        let win = Evaluation::of(&target, &target);
        assert_eq!(win.to_emoji(), "🟩🟩🟩🟩🟩");
    }
}
