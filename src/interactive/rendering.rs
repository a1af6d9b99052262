//! TUI rendering with ratatui
//!
//! Tile grid, keyboard, and message log for the puzzle interface.

use super::app::{App, Message, MessageStyle};
use crate::core::{Verdict, WORD_LENGTH};
use crate::game::{Keyboard, Session, Status};
use crate::output::formatters::KEY_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Board
            Constraint::Length(5),  // Keyboard
            Constraint::Length(7),  // Messages
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_board(f, &app.session, chunks[1]);
    render_keyboard(f, app.session.keyboard(), chunks[2]);
    render_messages(f, &app.messages, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("DAILY WORD PUZZLE - {}", app.label))
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

fn verdict_style(verdict: Verdict) -> Style {
    match verdict {
        Verdict::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Verdict::WrongLocation => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Verdict::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_board(f: &mut Frame, session: &Session, area: Rect) {
    let mut lines: Vec<Line> = Vec::with_capacity(session.max_attempts() * 2);

    for guess in session.board().guesses() {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for (i, &ch) in guess.word().chars().iter().enumerate() {
            spans.push(Span::styled(
                format!(" {} ", (ch as char).to_ascii_uppercase()),
                verdict_style(guess.feedback().verdict_at(i)),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let mut used = session.board().guess_count();
    if session.status() == Status::InProgress && used < session.max_attempts() {
        let active = session.board().active().as_bytes();
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for i in 0..WORD_LENGTH {
            let span = match active.get(i) {
                Some(&ch) => Span::styled(
                    format!(" {} ", (ch as char).to_ascii_uppercase()),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                ),
                None => Span::styled(" · ", Style::default().fg(Color::DarkGray)),
            };
            spans.push(span);
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
        used += 1;
    }

    for _ in used..session.max_attempts() {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for _ in 0..WORD_LENGTH {
            spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn key_style(keyboard: &Keyboard, ch: char) -> Style {
    match keyboard.verdict_for(ch) {
        Some(verdict) => verdict_style(verdict),
        None => Style::default().fg(Color::White),
    }
}

fn render_keyboard(f: &mut Frame, keyboard: &Keyboard, area: Rect) {
    let lines: Vec<Line> = KEY_ROWS
        .iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for ch in row.chars() {
                spans.push(Span::styled(
                    format!(" {} ", ch.to_ascii_uppercase()),
                    key_style(keyboard, ch),
                ));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard_widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Keyboard "));

    f.render_widget(keyboard_widget, area);
}

fn render_messages(f: &mut Frame, messages: &[Message], area: Rect) {
    let items: Vec<ListItem> = messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let state_text = match app.session.status() {
        Status::InProgress => format!(
            "Guess {}/{}",
            app.session.board().guess_count() + 1,
            app.session.max_attempts()
        ),
        Status::Won => "Solved!".to_string(),
        Status::Lost => "Out of guesses".to_string(),
    };
    let state = Paragraph::new(state_text).alignment(Alignment::Center);
    f.render_widget(state, chunks[0]);

    let mode_text = if app.practice {
        "Mode: Practice"
    } else {
        "Mode: Daily"
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[1]);

    let help_text = if app.session.status() == Status::InProgress {
        "Esc: Quit | Backspace: Delete | Enter: Submit"
    } else if app.practice {
        "q/Esc: Quit | n: New Word"
    } else {
        "q/Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
