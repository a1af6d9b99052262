//! Terminal output formatting
//!
//! Display utilities for the line-based play mode and CLI results.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_keyboard_hints, print_loss, print_score_result, print_win};
