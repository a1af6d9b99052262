//! Display functions for game and command output

use super::formatters::{active_row, empty_row, keyboard_rows, tile_row};
use crate::commands::ScoreResult;
use crate::core::Word;
use crate::game::{Keyboard, Session};
use colored::Colorize;

/// Print the board: scored rows, the active entry, then unused rows
pub fn print_board(session: &Session) {
    println!();
    for guess in session.board().guesses() {
        println!("  {}", tile_row(guess.word(), guess.feedback()));
    }

    let mut used = session.board().guess_count();
    if !session.is_over() && used < session.max_attempts() {
        println!("  {}", active_row(session.board().active()));
        used += 1;
    }

    for _ in used..session.max_attempts() {
        println!("  {}", empty_row());
    }
    println!();
}

/// Print the keyboard hint rows, staggered like a real keyboard
pub fn print_keyboard_hints(keyboard: &Keyboard) {
    let rows = keyboard_rows(keyboard);
    println!("  {}", rows[0]);
    println!("   {}", rows[1]);
    println!("     {}", rows[2]);
    println!();
}

/// Print the win banner
pub fn print_win(turns: usize, max_attempts: usize) {
    println!(
        "\n{} Solved in {turns}/{max_attempts} guesses.\n",
        "You Got it!".bright_green().bold()
    );
}

/// Print the loss banner, revealing the answer
pub fn print_loss(target: &Word) {
    println!(
        "\n{} The word was {}.\n",
        "Out of guesses.".bright_red().bold(),
        target.text().to_uppercase().bold()
    );
}

/// Print the result of scoring one guess/target pair
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\n  {} vs {}",
        result.guess.text().to_uppercase().bold(),
        result.target.text().to_uppercase().bold()
    );
    println!("  {}", tile_row(&result.guess, result.feedback));
    println!("  {}\n", result.feedback.to_emoji());
}
