//! Parsing of single history records.
//!
//! zsh extended history writes `: <epoch>:<duration>;<command>`. Plain
//! history files contain the bare command. Anything that yields no usable
//! command is reported as malformed, never as an error.

use std::fmt;

use super::noise::{NoiseClassifier, NoiseKind};

/// The `: <epoch>:<duration>;` prefix of an extended history record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryTimestamp {
    pub epoch: u64,
    pub duration: u64,
}

/// Why a record produced no command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// Nothing but whitespace.
    Empty,
    /// A timestamp prefix with nothing after it.
    MissingCommand,
    /// Starts like a timestamp prefix but does not follow the grammar.
    CorruptTimestamp,
    /// Tool output rather than a command.
    Noise(NoiseKind),
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::Empty => f.write_str("empty"),
            MalformedReason::MissingCommand => f.write_str("missing command"),
            MalformedReason::CorruptTimestamp => f.write_str("corrupt timestamp"),
            MalformedReason::Noise(kind) => write!(f, "noise ({})", kind.as_str()),
        }
    }
}

/// One parsed history record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    /// Original record text, written back unchanged when retained.
    pub raw_line: String,
    pub timestamp: Option<HistoryTimestamp>,
    /// Trimmed command text, or why there is none.
    pub content: Result<String, MalformedReason>,
}

impl ParsedEntry {
    pub fn command(&self) -> Option<&str> {
        self.content.as_deref().ok()
    }

    pub fn is_valid(&self) -> bool {
        self.content.is_ok()
    }

    pub fn malformed_reason(&self) -> Option<MalformedReason> {
        self.content.as_ref().err().copied()
    }
}

/// Extracts commands from raw history records.
pub struct LineParser;

impl LineParser {
    /// Parse one record. Total: every input yields an entry.
    pub fn parse(raw: &str) -> ParsedEntry {
        let (timestamp, content) = Self::split(raw);
        ParsedEntry {
            raw_line: raw.to_string(),
            timestamp,
            content,
        }
    }

    fn split(raw: &str) -> (Option<HistoryTimestamp>, Result<String, MalformedReason>) {
        if raw.trim().is_empty() {
            return (None, Err(MalformedReason::Empty));
        }

        let (timestamp, body) = match parse_prefix(raw) {
            Prefix::Timestamp(ts, body) => (Some(ts), body),
            Prefix::Corrupt => return (None, Err(MalformedReason::CorruptTimestamp)),
            Prefix::None => (None, raw),
        };

        let command = body.trim();
        if command.is_empty() {
            return (timestamp, Err(MalformedReason::MissingCommand));
        }
        if let Some(kind) = NoiseClassifier::classify(command) {
            return (timestamp, Err(MalformedReason::Noise(kind)));
        }
        (timestamp, Ok(command.to_string()))
    }
}

enum Prefix<'a> {
    Timestamp(HistoryTimestamp, &'a str),
    Corrupt,
    None,
}

/// Match `^: (\d+):(\d+);(.*)$`. Lines that start with `: ` and a digit but
/// break the grammar are corrupt; other `: ` lines are ordinary commands.
fn parse_prefix(raw: &str) -> Prefix<'_> {
    let Some(rest) = raw.strip_prefix(": ") else {
        return Prefix::None;
    };
    if !rest.starts_with(|c: char| c.is_ascii_digit()) {
        return Prefix::None;
    }

    let parsed = rest.split_once(':').and_then(|(epoch, rest)| {
        let (duration, body) = rest.split_once(';')?;
        Some((parse_digits(epoch)?, parse_digits(duration)?, body))
    });

    match parsed {
        Some((epoch, duration, body)) => Prefix::Timestamp(HistoryTimestamp { epoch, duration }, body),
        None => Prefix::Corrupt,
    }
}

fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
