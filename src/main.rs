//! Wordle Game - CLI
//!
//! Daily word-guessing game with TUI and plain-terminal modes, practice
//! games, hints, and persistent statistics.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_game::{
    commands::{run_daily, run_practice, run_reset, run_stats},
    core::GameConfig,
    interactive::{App, run_tui},
    store::JsonFileStore,
    words::{WordBank, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Daily Wordle game for the terminal with practice mode, hints, and statistics",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or a path to a custom file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Directory for saved results (defaults to the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Today's puzzle in the TUI (default)
    Play,

    /// Practice mode in the TUI (random words, no streaks)
    Practice,

    /// Play in the plain terminal, no TUI
    Simple {
        /// Practice mode instead of today's puzzle
        #[arg(short, long)]
        practice: bool,
    },

    /// Show streaks, win rate, and the guess distribution
    Stats,

    /// Discard today's completed game so it can be replayed
    Reset,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let bank = load_bank(&cli.wordlist)?;
    let config = GameConfig::default();

    let data_dir = cli
        .data_dir
        .or_else(JsonFileStore::default_dir)
        .context("could not determine a data directory; pass --data-dir")?;
    let mut store = JsonFileStore::new(&data_dir)
        .with_context(|| format!("could not open data directory {}", data_dir.display()))?;

    // Default to the daily TUI if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_tui(App::new_daily(&bank, &mut store, config)),
        Commands::Practice => run_tui(App::new_practice(&bank, &mut store, config)),
        Commands::Simple { practice } => {
            if practice {
                run_practice(&bank, &mut store, &config)
            } else {
                run_daily(&bank, &mut store, &config)
            }
        }
        Commands::Stats => run_stats(&store),
        Commands::Reset => run_reset(&mut store),
    }
}

/// Load the word bank based on the -w flag
fn load_bank(wordlist: &str) -> Result<WordBank> {
    match wordlist {
        "builtin" => Ok(WordBank::builtin()),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("could not read wordlist '{path}'"))?;
            WordBank::new(words)
                .with_context(|| format!("wordlist '{path}' has no usable words"))
        }
    }
}
