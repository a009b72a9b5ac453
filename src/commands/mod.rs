//! Command handlers for the histclean CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod clean;
pub mod completions;
pub mod config;
pub mod rules;

use anyhow::Result;
use std::io::{self, BufRead, Write};

use histclean::theme::current_theme;

/// Check if the user wants to proceed with an operation.
///
/// Returns true when `auto_confirm` is set or the user answers y/yes.
/// Without a terminal on stdin nothing is asked and the answer is no.
pub fn should_proceed(message: &str, auto_confirm: bool) -> Result<bool> {
    if auto_confirm {
        return Ok(true);
    }

    let theme = current_theme();

    if !atty::is(atty::Stream::Stdin) {
        println!(
            "{}",
            theme.secondary_text("Non-interactive mode: use --yes to apply changes automatically")
        );
        return Ok(false);
    }

    print!("{} [y/N] ", theme.primary_text(message));
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    Ok(is_yes(&input))
}

fn is_yes(input: &str) -> bool {
    let response = input.trim().to_lowercase();
    response == "y" || response == "yes"
}
