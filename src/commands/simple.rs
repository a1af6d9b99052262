//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: one full word per prompt.

use crate::game::{Outcome, RejectReason, Session, Status, SubmitResult};
use crate::output::{print_board, print_keyboard_hints, print_loss, print_win};
use colored::Colorize;
use std::io::{self, Write};

/// Run the line-based game loop until the session ends or the player quits
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(session: &mut Session, label: &str) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Daily Word Puzzle - {label:<24} ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the five-letter word. After each guess:");
    println!("  - Green tile:  right letter, right spot");
    println!("  - Yellow tile: right letter, wrong spot");
    println!("  - Gray tile:   letter not in the word\n");
    println!("Commands: 'quit' to exit\n");

    while session.status() == Status::InProgress {
        print_board(session);
        if !session.keyboard().is_empty() {
            print_keyboard_hints(session.keyboard());
        }

        let attempt = session.board().guess_count() + 1;
        let prompt = format!("Guess {attempt}/{}", session.max_attempts());
        let input = get_user_input(&prompt)?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\nThanks for playing!\n");
                return Ok(());
            }
            word => {
                // Line mode retypes the whole entry each turn
                while session.board().active_len() > 0 {
                    session.delete_letter();
                }
                for ch in word.chars() {
                    session.press_letter(ch);
                }

                match session.submit_guess().map_err(|e| e.to_string())? {
                    SubmitResult::Rejected(reason) => {
                        let hint = match reason {
                            RejectReason::TooShort => "need exactly five letters",
                            RejectReason::NotInWordList => "try another word",
                        };
                        println!("\n{} ({hint})", reason.to_string().bright_red());
                    }
                    SubmitResult::Scored { outcome, .. } => match outcome {
                        Outcome::Won => {
                            print_board(session);
                            print_win(session.board().guess_count(), session.max_attempts());
                        }
                        Outcome::Lost => {
                            print_board(session);
                            print_loss(session.target());
                        }
                        Outcome::Continue => {}
                    },
                }
            }
        }
    }

    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
