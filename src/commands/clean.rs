//! Clean command handler

use anyhow::{bail, Context, Result};
use humansize::{format_size, DECIMAL};
use std::fs;
use std::path::Path;

use histclean::cli::CleanArgs;
use histclean::config::{load_rules, LoadedRules};
use histclean::error::{FileError, HistoryError};
use histclean::files::{atomic_write, replace_with_backup, resolve_history_path, Replaced};
use histclean::filter::{DeduplicatingFilter, FilterRun};
use histclean::history::{join_records, HistoryText};
use histclean::theme::current_theme;
use histclean::Config;

use super::should_proceed;

/// Resolve the maximum command length.
///
/// Priority:
/// 1. CLI `--max-length`
/// 2. `[cleaner] max_length` from the settings file
pub fn resolve_max_length(cli_max_length: Option<u64>, config: &Config) -> Result<usize> {
    match cli_max_length {
        Some(n) => {
            validate_max_length(n)?;
            usize::try_from(n).with_context(|| format!("Max length {} is too large", n))
        }
        None => Ok(config.cleaner.max_length),
    }
}

/// Validate that a max length is usable.
pub fn validate_max_length(max_length: u64) -> Result<()> {
    if max_length == 0 {
        bail!("Max length must be greater than 0");
    }
    Ok(())
}

/// Read the history file as raw bytes.
pub fn read_history(path: &Path) -> Result<Vec<u8>, HistoryError> {
    if !path.exists() {
        return Err(HistoryError::NotFound {
            path: path.to_path_buf(),
        });
    }
    fs::read(path).map_err(|source| HistoryError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Run the filter over raw history bytes.
pub fn clean_bytes(bytes: &[u8], loaded: &LoadedRules, max_length: usize) -> (FilterRun, String) {
    let text = HistoryText::from_bytes(bytes);
    let run = DeduplicatingFilter::new(&loaded.rules, max_length)
        .run(text.records.iter().map(String::as_str));
    let cleaned = join_records(run.raw_lines());
    (run, cleaned)
}

/// Back up, clean and rewrite the history file in one step.
///
/// The cleaned content comes from the backup taken here, so anything
/// appended to the history since the summary was shown is kept.
pub fn rewrite_history<W>(
    path: &Path,
    loaded: &LoadedRules,
    max_length: usize,
    write: W,
) -> Result<Replaced<FilterRun>, FileError>
where
    W: FnOnce(&Path, &[u8]) -> Result<(), FileError>,
{
    replace_with_backup(
        path,
        |bytes| {
            let (run, cleaned) = clean_bytes(bytes, loaded, max_length);
            (run, cleaned.into_bytes())
        },
        write,
    )
}

/// Handle the clean command.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &CleanArgs) -> Result<()> {
    let theme = current_theme();
    let config = Config::load().context("Failed to load settings")?;

    let histfile = std::env::var("HISTFILE").ok();
    let history_path = resolve_history_path(
        args.file.as_deref(),
        config.history_file().as_deref(),
        histfile.as_deref(),
    )?;
    let max_length = resolve_max_length(args.max_length, &config)?;
    let loaded = load_rules(args.rules.as_deref(), &config.rules_file())
        .context("Failed to load rule file")?;

    if args.dry_run {
        println!("{}", theme.warning_text("DRY RUN MODE - No changes will be made"));
    }
    print_summary(&history_path, max_length, &loaded);

    if args.dry_run {
        let bytes = read_history(&history_path)?;
        let (run, cleaned) = clean_bytes(&bytes, &loaded, max_length);
        println!();
        println!("{}", run.report.render());
        print_sizes(bytes.len(), cleaned.len());
        println!();
        println!(
            "{}",
            theme.warning_text("DRY RUN: No changes were made to the history file")
        );
        return Ok(());
    }

    if !history_path.exists() {
        return Err(HistoryError::NotFound { path: history_path }.into());
    }

    println!();
    println!("{}", theme.primary_text("This will clean your ZSH history file."));
    println!("{}", theme.primary_text("A backup will be created automatically."));
    if !should_proceed("Do you want to proceed?", args.yes)? {
        println!("{}", theme.primary_text("Operation cancelled."));
        return Ok(());
    }

    let replaced = rewrite_history(&history_path, &loaded, max_length, atomic_write)
        .context("History file was not cleaned")?;

    let report = replaced.output.report.with_backup(&replaced.backup);
    println!();
    println!("{}", report.render());
    print_sizes(replaced.original_len, replaced.written_len);
    println!();
    println!("{}", theme.success_text("ZSH history cleaned successfully!"));
    println!(
        "{}",
        theme.secondary_text(
            "You may need to restart your shell or run 'fc -R' to reload the history."
        )
    );
    Ok(())
}

fn print_summary(history_path: &Path, max_length: usize, loaded: &LoadedRules) {
    let theme = current_theme();
    println!("{}", theme.accent_text("ZSH History Cleaner"));
    println!("History file: {}", history_path.display());
    println!("Max command length: {}", max_length);
    println!("Rules from: {}", loaded.source);
    println!("Keep rules loaded: {}", loaded.rules.keep_rules.len());
    println!("Drop rules loaded: {}", loaded.rules.drop_rules.len());

    for (kind, rule) in loaded.rules.unusable() {
        println!(
            "{}",
            theme.warning_text(&format!(
                "Ignoring {} rule '{}': {}",
                kind,
                rule.pattern(),
                rule.compile_error().unwrap_or("invalid pattern")
            ))
        );
    }
}

fn print_sizes(before: usize, after: usize) {
    println!(
        "File size: {} -> {}",
        format_size(before, DECIMAL),
        format_size(after, DECIMAL)
    );
}
