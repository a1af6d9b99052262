//! TUI application state and logic

use crate::game::{MAX_ATTEMPTS, Outcome, Session, Status, SubmitResult};
use crate::wordlists::Catalog;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub catalog: &'a Catalog,
    pub label: String,
    pub practice: bool,
    pub messages: Vec<Message>,
    pub should_quit: bool,
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

impl<'a> App<'a> {
    #[must_use]
    pub fn new(
        catalog: &'a Catalog,
        session: Session<'a>,
        label: impl Into<String>,
        practice: bool,
    ) -> Self {
        Self {
            session,
            catalog,
            label: label.into(),
            practice,
            messages: vec![Message {
                text: "Type a five-letter word and press Enter.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    /// Submit the active entry and translate the result into messages
    pub fn handle_submit(&mut self) {
        let Ok(result) = self.session.submit_guess() else {
            // Terminal session; the key handler already gates this path
            return;
        };

        match result {
            SubmitResult::Rejected(reason) => {
                self.add_message(&reason.to_string(), MessageStyle::Error);
            }
            SubmitResult::Scored { outcome, .. } => match outcome {
                Outcome::Won => {
                    self.add_message("You Got it!", MessageStyle::Success);
                    self.add_message(self.end_hint(), MessageStyle::Info);
                }
                Outcome::Lost => {
                    let reveal = self.session.target().text().to_uppercase();
                    self.add_message(&reveal, MessageStyle::Error);
                    self.add_message(self.end_hint(), MessageStyle::Info);
                }
                Outcome::Continue => {}
            },
        }
    }

    /// Start a fresh practice game against a randomly chosen target
    pub fn new_practice_game(&mut self) {
        use rand::prelude::IndexedRandom;

        if let Some(target) = self.catalog.targets().choose(&mut rand::rng()) {
            self.session = Session::new(self.catalog, target.clone(), MAX_ATTEMPTS);
            self.messages.clear();
            self.add_message("New practice word chosen. Good luck!", MessageStyle::Info);
        } else {
            self.add_message("No targets available!", MessageStyle::Error);
        }
    }

    fn end_hint(&self) -> &'static str {
        if self.practice {
            "Press 'n' for a new word or 'q' to quit."
        } else {
            "Press 'q' to quit. Come back tomorrow!"
        }
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
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
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

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Char(c) => {
                    if app.session.status() == Status::InProgress {
                        // Every letter goes to the board; quit is Esc/Ctrl-C
                        app.session.press_letter(c);
                    } else {
                        match c {
                            'q' => app.should_quit = true,
                            'n' if app.practice => app.new_practice_game(),
                            _ => {}
                        }
                    }
                }
                KeyCode::Backspace | KeyCode::Delete => {
                    app.session.delete_letter();
                }
                KeyCode::Enter => {
                    if app.session.status() == Status::InProgress {
                        app.handle_submit();
                    }
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
