//! CLI definitions for histclean
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

/// Build clap styles using our theme colors.
///
/// - Green: headers, usage, command names (accent color)
/// - White: descriptions, placeholders
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "histclean")]
#[command(about = "Clean zsh history: drop noise, apply keep/drop rules, remove duplicates")]
#[command(
    long_about = "histclean - Clean zsh history files.

Reads a zsh history file, removes malformed and noisy lines, applies your
keep and drop rules, removes overlong commands and duplicates (keeping the
first occurrence), and writes the result back after taking a timestamped
backup.

QUICK START:
    histclean clean --dry-run       Preview what would be removed
    histclean clean                 Clean ~/.zsh_history (asks first)
    histclean rules init rules.json Write a sample rule file
    histclean rules check           Show the rules that will be used

Settings: ~/.config/histclean/config.toml
Rules:    ~/.config/histclean/rules.json"
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Show one log line per history entry decision
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean a history file
    #[command(long_about = "Clean a zsh history file.

Each entry is checked in this order:
    1. malformed or noise lines are removed
    2. drop rules remove matching commands
    3. keep rules keep matching commands (even duplicates)
    4. commands longer than --max-length are removed
    5. repeated commands are removed, the first occurrence stays

A backup named <file>.backup_YYYYmmdd_HHMMSS is written next to the
history file before it is replaced.

EXAMPLES:
    histclean clean --dry-run
    histclean clean -f ~/.histfile -l 300 --yes
    histclean clean --rules ./my-rules.json")]
    Clean(CleanArgs),

    /// Manage keep/drop rule files
    #[command(subcommand)]
    Rules(RulesCommands),

    /// Configuration management
    #[command(long_about = "View and initialise histclean settings.

Settings are stored in ~/.config/histclean/config.toml:
    [history] file        history file to clean
    [cleaner] max_length  longest command kept (characters)
    [rules]   file        keep/drop rule file")]
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(long_about = "Generate a shell completion script on stdout.

EXAMPLE:
    histclean completions zsh > ~/.zfunc/_histclean")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct CleanArgs {
    /// History file to clean
    #[arg(short, long, value_name = "FILE", help = "History file (default: settings, $HISTFILE, ~/.zsh_history)")]
    pub file: Option<PathBuf>,

    /// Longest command to keep, in characters
    #[arg(short = 'l', long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub max_length: Option<u64>,

    /// Rule file to use instead of the configured one
    #[arg(short = 'c', long = "rules", value_name = "RULES")]
    pub rules: Option<PathBuf>,

    /// Show statistics without modifying the file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Do not ask for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Subcommand)]
pub enum RulesCommands {
    /// Write a sample rule file
    #[command(long_about = "Write a sample rule file with example keep and drop rules.

EXAMPLE:
    histclean rules init ~/.config/histclean/rules.json --force")]
    Init {
        /// Where to write the rule file
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// List the rules that will be used
    Check {
        /// Rule file to check instead of the configured one
        #[arg(short = 'c', long = "rules", value_name = "RULES")]
        rules: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    Show,
    /// Write the default settings file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
