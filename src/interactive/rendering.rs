//! TUI rendering with ratatui
//!
//! Board, keyboard, and side panels for the game interface.

use super::app::{App, GameMode, InputMode, MessageStyle};
use crate::core::LetterStatus;
use crate::records::date_key;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Board
            Constraint::Percentage(60), // Keyboard + info
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.mode {
        GameMode::Daily { date } => format!("🗓  DAILY WORDLE - {}", date_key(date)),
        GameMode::Practice => "🎲 WORDLE - Practice Mode".to_string(),
    };

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from("")];

    for row in 0..app.session.max_guesses() {
        let line = if let Some(evaluation) = app.session.evaluations().get(row) {
            // A submitted row: colored tiles
            let mut spans = vec![Span::raw("  ")];
            for mark in evaluation.marks() {
                spans.push(Span::styled(
                    format!(" {} ", mark.letter),
                    tile_style(mark.status),
                ));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        } else if row == app.session.attempts() && !app.session.is_over() {
            // The row being typed
            let mut spans = vec![Span::raw("  ")];
            for i in 0..app.config.word_length {
                let cell = app
                    .input_buffer
                    .chars()
                    .nth(i)
                    .map_or_else(|| " _ ".to_string(), |c| format!(" {c} "));
                spans.push(Span::styled(
                    cell,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        } else {
            // An untouched row
            let mut spans = vec![Span::raw("  ")];
            for _ in 0..app.config.word_length {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        };

        lines.push(line);
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn tile_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),      // Keyboard
            Constraint::Min(5),         // Messages
            Constraint::Percentage(40), // Stats / history
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);

    match app.mode {
        GameMode::Daily { .. } => render_stats(f, app, chunks[2]),
        GameMode::Practice => render_history(f, app, chunks[2]),
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let hints = app.session.letter_hints();

    let mut lines = vec![];
    for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
        let mut spans = vec![Span::raw(" ".repeat(i + 1))];
        for letter in row.chars() {
            let style = match hints.get(&letter) {
                Some(&status) => tile_style(status),
                None => Style::default().fg(Color::White),
            };
            spans.push(Span::styled(format!("{letter}"), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let content = vec![
        Line::from(vec![
            Span::raw("Current streak: "),
            Span::styled(
                app.stats.current_streak.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Max streak:     {}", app.stats.max_streak)),
        Line::from(format!("Games played:   {}", app.stats.total_games)),
        Line::from(format!(
            "Win rate:       {:.0}%",
            app.stats.win_rate() * 100.0
        )),
        Line::from(""),
        Line::from(format!(
            "Hints left:     {}",
            app.hints.hints_remaining()
        )),
    ];

    let stats = Paragraph::new(content).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(stats, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .practice_history
        .iter()
        .take(8)
        .map(|result| {
            let (verdict, style) = if result.won {
                (
                    format!("{} tries", result.attempts),
                    Style::default().fg(Color::Green),
                )
            } else {
                ("failed".to_string(), Style::default().fg(Color::Red))
            };
            ListItem::new(format!("{}  {verdict}", result.word)).style(style)
        })
        .collect();

    let history = List::new(items).block(
        Block::default()
            .title(" Recent Games ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(history, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let current = if app.session.is_over() {
        app.session.attempts()
    } else {
        app.session.attempts() + 1
    };
    let progress = format!("Guess {current}/{}", app.session.max_guesses());
    let progress = Paragraph::new(progress).alignment(Alignment::Center);
    f.render_widget(progress, chunks[0]);

    let help_text = match app.input_mode {
        InputMode::GameOver => match app.mode {
            GameMode::Practice => "q: Quit | n: New Word",
            GameMode::Daily { .. } => "q: Quit",
        },
        InputMode::Typing => "ESC: Quit | Enter: Submit | Backspace: Delete | TAB: Hint",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
