//! The keep/drop/dedupe decision procedure.
//!
//! Each record is resolved completely before the next one is looked at.
//! The checks run in a fixed order:
//!
//! 1. malformed records are dropped
//! 2. a drop rule match removes the command (outranks keep rules)
//! 3. a keep rule match retains the command and skips steps 4 and 5
//! 4. commands longer than `max_length` are dropped
//! 5. commands whose normalized form was already seen are dropped
//! 6. everything else is retained and its key remembered

use std::collections::HashSet;

use crate::history::{normalize, LineParser, MalformedReason, NormalizedKey, ParsedEntry};
use crate::rules::{Rule, RuleSet};

use super::stats::StatisticsReport;

/// Default maximum command length.
pub const DEFAULT_MAX_LENGTH: usize = 500;

/// Number of characters shown when logging a command.
const PREVIEW_CHARS: usize = 50;

/// What happened to one record.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<'r> {
    Malformed(MalformedReason),
    DroppedByRule(&'r Rule),
    KeptByRule(&'r Rule),
    TooLong { length: usize },
    Duplicate,
    Kept(NormalizedKey),
}

impl Outcome<'_> {
    /// Whether the record ends up in the output.
    pub fn is_retained(&self) -> bool {
        matches!(self, Outcome::KeptByRule(_) | Outcome::Kept(_))
    }
}

/// Decide the fate of one parsed entry. Pure: the caller owns `seen` and
/// records the key carried by [`Outcome::Kept`].
pub fn decide<'r>(
    entry: &ParsedEntry,
    rules: &'r RuleSet,
    max_length: usize,
    seen: &HashSet<NormalizedKey>,
) -> Outcome<'r> {
    let command = match &entry.content {
        Ok(command) => command.as_str(),
        Err(reason) => return Outcome::Malformed(*reason),
    };

    if let Some(rule) = rules.first_drop(command) {
        return Outcome::DroppedByRule(rule);
    }
    if let Some(rule) = rules.first_keep(command) {
        return Outcome::KeptByRule(rule);
    }

    let length = command.chars().count();
    if length > max_length {
        return Outcome::TooLong { length };
    }

    let key = normalize(command);
    if seen.contains(&key) {
        return Outcome::Duplicate;
    }
    Outcome::Kept(key)
}

/// A record that survived filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetainedEntry {
    /// The record exactly as read, timestamp prefix included.
    pub raw_line: String,
    pub command: String,
}

/// Result of a finished filter run.
#[derive(Debug, Clone)]
pub struct FilterRun {
    pub retained: Vec<RetainedEntry>,
    pub report: StatisticsReport,
}

impl FilterRun {
    /// Retained commands in input order.
    pub fn commands(&self) -> Vec<&str> {
        self.retained.iter().map(|e| e.command.as_str()).collect()
    }

    /// Retained records in input order, ready to be written back.
    pub fn raw_lines(&self) -> impl Iterator<Item = &str> {
        self.retained.iter().map(|e| e.raw_line.as_str())
    }
}

/// Single-pass, order-preserving filter. Construct one per run.
pub struct DeduplicatingFilter<'r> {
    rules: &'r RuleSet,
    max_length: usize,
    seen: HashSet<NormalizedKey>,
    retained: Vec<RetainedEntry>,
    report: StatisticsReport,
}

impl<'r> DeduplicatingFilter<'r> {
    pub fn new(rules: &'r RuleSet, max_length: usize) -> Self {
        Self {
            rules,
            max_length,
            seen: HashSet::new(),
            retained: Vec::new(),
            report: StatisticsReport::default(),
        }
    }

    /// Parse and process one raw record.
    pub fn push(&mut self, raw: &str) -> Outcome<'r> {
        let entry = LineParser::parse(raw);
        self.push_entry(entry)
    }

    /// Process one already parsed entry.
    pub fn push_entry(&mut self, entry: ParsedEntry) -> Outcome<'r> {
        let outcome = decide(&entry, self.rules, self.max_length, &self.seen);
        log_outcome(&entry, &outcome);
        self.report.record(&outcome);

        match &outcome {
            Outcome::Kept(key) => {
                self.seen.insert(key.clone());
                self.retain(entry);
            }
            Outcome::KeptByRule(_) => {
                if let Some(command) = entry.command() {
                    self.seen.insert(normalize(command));
                }
                self.retain(entry);
            }
            _ => {}
        }
        outcome
    }

    fn retain(&mut self, entry: ParsedEntry) {
        if let Ok(command) = entry.content {
            self.retained.push(RetainedEntry {
                raw_line: entry.raw_line,
                command,
            });
        }
    }

    /// Freeze the counters and hand back the retained records.
    pub fn finish(self) -> FilterRun {
        FilterRun {
            retained: self.retained,
            report: self.report,
        }
    }

    /// Process every record and finish.
    pub fn run<'a>(mut self, records: impl IntoIterator<Item = &'a str>) -> FilterRun {
        let mut physical = 0;
        for raw in records {
            physical += raw.split('\n').count();
            self.push(raw);
        }
        self.report.set_physical_lines(physical);
        self.finish()
    }
}

/// Filter a sequence of records in one call.
pub fn filter_lines<'a>(
    records: impl IntoIterator<Item = &'a str>,
    rules: &RuleSet,
    max_length: usize,
) -> FilterRun {
    DeduplicatingFilter::new(rules, max_length).run(records)
}

fn log_outcome(entry: &ParsedEntry, outcome: &Outcome<'_>) {
    let preview = preview(entry.command().unwrap_or(&entry.raw_line));
    match outcome {
        Outcome::Malformed(reason) => tracing::debug!("Malformed entry ({}): {}", reason, preview),
        Outcome::DroppedByRule(rule) => {
            tracing::debug!("Removed by drop rule '{}': {}", rule.label(), preview)
        }
        Outcome::KeptByRule(rule) => {
            tracing::debug!("Kept by keep rule '{}': {}", rule.label(), preview)
        }
        Outcome::TooLong { length } => {
            tracing::debug!("Removed long command ({} chars): {}", length, preview)
        }
        Outcome::Duplicate => tracing::debug!("Duplicate removed: {}", preview),
        Outcome::Kept(_) => tracing::trace!("Kept: {}", preview),
    }
}

fn preview(s: &str) -> String {
    let mut chars = s.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
