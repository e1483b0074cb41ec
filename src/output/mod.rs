//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_board, print_completion, print_daily_result, print_stats_report};
pub use formatters::{share_strip, tile_row};
