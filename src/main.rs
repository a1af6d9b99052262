//! Daily word puzzle - CLI
//!
//! Terminal play modes for the daily five-letter word puzzle, plus a one-shot
//! guess scorer.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_daily::{
    commands::{run_simple, score_pair},
    game::{MAX_ATTEMPTS, Session, daily},
    interactive::{App, run_tui},
    output::print_score_result,
    wordlists::{Catalog, DICTIONARY, TARGETS, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Daily five-letter word puzzle with a deterministic date-keyed answer",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Play the puzzle scheduled for a specific date (YYYY-MM-DD) instead of today
    #[arg(short, long, global = true)]
    date: Option<NaiveDate>,

    /// Practice against a randomly chosen target instead of the daily word
    #[arg(short, long, global = true)]
    random: bool,

    /// Path to a custom guess dictionary (one word per line)
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,

    /// Path to a custom answer schedule (one word per line, day order)
    #[arg(long, global = true)]
    answers: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based mode without the TUI
    Simple,

    /// Score a guess against a target word
    Score {
        /// The guessed word
        guess: String,

        /// The target word to score against
        target: String,
    },
}

/// Build the catalog from the embedded lists or the override flags
fn load_catalog(cli: &Cli) -> Result<Catalog> {
    let dictionary = match &cli.dictionary {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("Failed to load dictionary from {}", path.display()))?,
        None => loader::words_from_slice(DICTIONARY),
    };

    let targets = match &cli.answers {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("Failed to load answers from {}", path.display()))?,
        None => loader::words_from_slice(TARGETS),
    };

    Ok(Catalog::new(dictionary, targets))
}

/// Start a session per the mode flags, with a label for the header
fn build_session<'a>(catalog: &'a Catalog, cli: &Cli) -> Result<(Session<'a>, String)> {
    if cli.random {
        use rand::prelude::IndexedRandom;

        let target = catalog
            .targets()
            .choose(&mut rand::rng())
            .context("Answer list is empty")?
            .clone();
        return Ok((Session::new(catalog, target, MAX_ATTEMPTS), "Practice".to_string()));
    }

    let epoch = daily::default_epoch();
    let on = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let index = daily::day_index(on, epoch);

    let session = Session::daily(catalog, on, epoch, MAX_ATTEMPTS).with_context(|| {
        format!("No puzzle scheduled for {on}; pass --answers with a longer schedule")
    })?;

    Ok((session, format!("Puzzle #{index} ({on})")))
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let catalog = load_catalog(&cli)?;
            let (session, label) = build_session(&catalog, &cli)?;
            let app = App::new(&catalog, session, label, cli.random);
            run_tui(app)
        }
        Commands::Simple => {
            let catalog = load_catalog(&cli)?;
            let (mut session, label) = build_session(&catalog, &cli)?;
            run_simple(&mut session, &label).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Score { guess, target } => {
            let result = score_pair(&guess, &target).map_err(|e| anyhow::anyhow!(e))?;
            print_score_result(&result);
            Ok(())
        }
    }
}
