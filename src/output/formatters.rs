//! Formatting utilities for terminal output

use crate::core::{Feedback, Verdict, WORD_LENGTH, Word};
use crate::game::Keyboard;
use colored::{ColoredString, Colorize};

/// Rows of a QWERTY keyboard, top to bottom
pub const KEY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

fn paint_tile(cell: &str, verdict: Verdict) -> ColoredString {
    match verdict {
        Verdict::Correct => cell.black().on_bright_green(),
        Verdict::WrongLocation => cell.black().on_bright_yellow(),
        Verdict::Absent => cell.white().on_bright_black(),
    }
}

/// Format a scored guess as a row of colored tiles
#[must_use]
pub fn tile_row(word: &Word, feedback: Feedback) -> String {
    word.chars()
        .iter()
        .enumerate()
        .map(|(i, &ch)| {
            let cell = format!(" {} ", (ch as char).to_ascii_uppercase());
            paint_tile(&cell, feedback.verdict_at(i)).to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format the in-progress entry: typed letters followed by blank cells
#[must_use]
pub fn active_row(active: &str) -> String {
    (0..WORD_LENGTH)
        .map(|i| match active.as_bytes().get(i) {
            Some(&ch) => format!(" {} ", (ch as char).to_ascii_uppercase())
                .bold()
                .to_string(),
            None => " · ".dimmed().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format an unused board row
#[must_use]
pub fn empty_row() -> String {
    (0..WORD_LENGTH)
        .map(|_| " · ".dimmed().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format the three keyboard rows with per-key hint colors
#[must_use]
pub fn keyboard_rows(keyboard: &Keyboard) -> Vec<String> {
    KEY_ROWS
        .iter()
        .map(|row| {
            row.chars()
                .map(|ch| {
                    let key = ch.to_ascii_uppercase().to_string();
                    match keyboard.verdict_for(ch) {
                        Some(Verdict::Correct) => key.black().on_bright_green().to_string(),
                        Some(Verdict::WrongLocation) => key.black().on_bright_yellow().to_string(),
                        Some(Verdict::Absent) => key.bright_black().to_string(),
                        None => key.normal().to_string(),
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}
