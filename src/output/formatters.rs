//! Formatting utilities for terminal output

use crate::core::{Evaluation, LetterStatus};
use colored::Colorize;

/// Format an evaluated guess as a row of colored tiles
#[must_use]
pub fn tile_row(evaluation: &Evaluation) -> String {
    evaluation
        .marks()
        .iter()
        .map(|mark| {
            let tile = format!(" {} ", mark.letter);
            let colored = match mark.status {
                LetterStatus::Correct => tile.black().on_green(),
                LetterStatus::Present => tile.black().on_yellow(),
                LetterStatus::Absent => tile.white().on_bright_black(),
            };
            format!("{colored}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a whole game as a spoiler-free emoji strip
///
/// One line per guess, e.g. "⬜🟨⬜🟩⬜".
#[must_use]
pub fn share_strip(evaluations: &[Evaluation]) -> String {
    evaluations
        .iter()
        .map(Evaluation::to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format one guess-distribution bucket as a bar
///
/// Scaled against the fullest bucket so the largest bar fills `width`.
#[must_use]
pub fn distribution_bar(count: u32, max_bucket: u32, width: usize) -> String {
    if max_bucket == 0 {
        return "░".repeat(width);
    }
    create_progress_bar(f64::from(count), f64::from(max_bucket), width)
}
