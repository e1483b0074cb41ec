//! TUI application state and logic

use crate::core::{GameConfig, GameSession, GameStatus, HintTracker, Word};
use crate::records::{DailyResult, GameResult, date_key, now_millis, today};
use crate::stats::{GameOutcome, Stats};
use crate::store::ResultStore;
use crate::words::WordBank;
use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Which puzzle the app is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Daily { date: NaiveDate },
    Practice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<'a> {
    pub bank: &'a WordBank,
    pub store: &'a mut dyn ResultStore,
    pub config: GameConfig,
    pub mode: GameMode,
    pub session: GameSession,
    pub hints: HintTracker,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Stats,
    pub practice_history: Vec<GameResult>,
    pub input_mode: InputMode,
    pub should_quit: bool,
    /// Set once the current session's outcome has been saved
    persisted: bool,
}

impl<'a> App<'a> {
    /// Start (or resume) today's daily puzzle
    pub fn new_daily(
        bank: &'a WordBank,
        store: &'a mut dyn ResultStore,
        config: GameConfig,
    ) -> Self {
        let date = today();
        let stats = store
            .load_stats()
            .unwrap_or_else(|| Stats::new(config.max_guesses));
        let saved = store.load_daily(&date_key(date));

        let mut app = Self {
            bank,
            store,
            config,
            mode: GameMode::Daily { date },
            session: GameSession::new(bank.daily(date).clone(), &config),
            hints: HintTracker::new(config.max_hints),
            input_buffer: String::new(),
            messages: Vec::new(),
            stats,
            practice_history: Vec::new(),
            input_mode: InputMode::Typing,
            should_quit: false,
            persisted: false,
        };

        if let Some(result) = saved {
            app.resume_finished(&result);
        } else {
            app.add_message("Guess today's word!", MessageStyle::Info);
            app.add_message(
                "Type letters, Enter submits, TAB reveals a hint.",
                MessageStyle::Info,
            );
        }

        app
    }

    /// Start a practice session with a random word
    pub fn new_practice(
        bank: &'a WordBank,
        store: &'a mut dyn ResultStore,
        config: GameConfig,
    ) -> Self {
        let stats = store
            .load_stats()
            .unwrap_or_else(|| Stats::new(config.max_guesses));
        let practice_history = store.load_practice();

        let mut app = Self {
            bank,
            store,
            config,
            mode: GameMode::Practice,
            session: GameSession::new(bank.random(&mut rand::rng()).clone(), &config),
            hints: HintTracker::new(config.max_hints),
            input_buffer: String::new(),
            messages: Vec::new(),
            stats,
            practice_history,
            input_mode: InputMode::Typing,
            should_quit: false,
            persisted: false,
        };

        app.add_message("Practice mode - random words, no streaks.", MessageStyle::Info);
        app.add_message(
            "Type letters, Enter submits, TAB reveals a hint.",
            MessageStyle::Info,
        );

        app
    }

    /// Rebuild the board of an already-finished daily game
    ///
    /// The saved guesses are replayed against the saved word, which
    /// reproduces the evaluations without persisting anything twice.
    fn resume_finished(&mut self, result: &DailyResult) {
        if let Ok(target) = Word::with_length(&result.word, self.config.word_length) {
            self.session = GameSession::new(target, &self.config);
            for guess in &result.guesses {
                if self.session.submit_guess(guess).is_err() {
                    log::warn!("saved daily result has an unplayable guess: {guess}");
                    break;
                }
            }
        }

        self.persisted = true;
        self.input_mode = InputMode::GameOver;

        if result.won {
            self.add_message("Already solved today - well done!", MessageStyle::Success);
        } else {
            self.add_message(
                &format!("Today's word was {}.", result.word),
                MessageStyle::Info,
            );
        }
        self.add_message(
            "Come back tomorrow for a new word. Press 'q' to quit.",
            MessageStyle::Info,
        );
    }

    /// Append a typed letter to the input row
    pub fn push_letter(&mut self, letter: char) {
        if self.input_mode != InputMode::Typing {
            return;
        }
        if self.input_buffer.len() < self.config.word_length && letter.is_ascii_alphabetic() {
            self.input_buffer.push(letter.to_ascii_uppercase());
        }
    }

    /// Remove the last typed letter
    pub fn pop_letter(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the current input row as a guess
    pub fn submit(&mut self) {
        let input = self.input_buffer.clone();

        match self.session.submit_guess(&input) {
            Ok(_) => {
                self.input_buffer.clear();
                if self.session.is_over() {
                    self.finish_game();
                }
            }
            Err(rejection) => {
                self.add_message(&rejection.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Reveal one letter, if the budget allows
    pub fn request_hint(&mut self) {
        if self.session.is_over() {
            return;
        }

        match self.hints.pick(&self.session, &mut rand::rng()) {
            Some(hint) => {
                self.add_message(
                    &format!(
                        "💡 Letter {} is at position {} ({} left)",
                        hint.letter,
                        hint.position + 1,
                        self.hints.hints_remaining()
                    ),
                    MessageStyle::Info,
                );
            }
            None if self.hints.hints_remaining() == 0 => {
                self.add_message("No hints left this game.", MessageStyle::Error);
            }
            None => {
                self.add_message("Every position is already solved!", MessageStyle::Error);
            }
        }
    }

    /// Start the next practice round (no-op for the daily puzzle)
    pub fn next_round(&mut self) {
        if self.mode != GameMode::Practice {
            return;
        }

        self.session = GameSession::new(self.bank.random(&mut rand::rng()).clone(), &self.config);
        self.hints = HintTracker::new(self.config.max_hints);
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Typing;
        self.persisted = false;
        self.add_message("New word!", MessageStyle::Info);
    }

    /// Celebrate or commiserate, then persist the outcome
    fn finish_game(&mut self) {
        self.input_mode = InputMode::GameOver;

        match self.session.status() {
            GameStatus::Won => {
                let celebration = match self.session.attempts() {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it on the last try! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            GameStatus::Lost => {
                self.add_message(
                    &format!("The word was {}.", self.session.target().text()),
                    MessageStyle::Error,
                );
            }
            GameStatus::InProgress => return,
        }

        if let Err(err) = self.persist_outcome() {
            log::warn!("could not save the game result: {err}");
            self.add_message("Could not save the result!", MessageStyle::Error);
        }

        match self.mode {
            GameMode::Practice => {
                self.add_message("Press 'n' for a new word or 'q' to quit.", MessageStyle::Info);
            }
            GameMode::Daily { .. } => {
                self.add_message(
                    "Come back tomorrow for a new word. Press 'q' to quit.",
                    MessageStyle::Info,
                );
            }
        }
    }

    fn persist_outcome(&mut self) -> io::Result<()> {
        if self.persisted {
            return Ok(());
        }

        match self.mode {
            GameMode::Daily { date } => {
                let Some(completion) = self.session.completion() else {
                    return Ok(());
                };
                let baseline = self.stats.baseline();

                self.stats = self.stats.apply(&GameOutcome::from(&completion));
                self.store.save_stats(&self.stats)?;

                if let Some(result) = DailyResult::from_session(&self.session, date, baseline) {
                    self.store.save_daily(&result)?;
                }
            }
            GameMode::Practice => {
                if let Some(result) = GameResult::from_session(&self.session, now_millis()) {
                    self.practice_history.insert(0, result);
                    self.store.save_practice(&self.practice_history)?;
                }
            }
        }

        self.persisted = true;
        Ok(())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.next_round();
                    }
                    _ => {
                        // Board is final; ignore other keys
                    }
                },
                InputMode::Typing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Tab => {
                        app.request_hint();
                    }
                    KeyCode::Enter => {
                        app.submit();
                    }
                    KeyCode::Backspace => {
                        app.pop_letter();
                    }
                    KeyCode::Char(c) => {
                        app.push_letter(c);
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
