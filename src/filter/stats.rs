//! Counters collected by a filter run.

use std::path::{Path, PathBuf};

use super::engine::Outcome;

/// Width of the `=` rules around the statistics table.
const RULE_WIDTH: usize = 50;

/// Final counters of one filter run.
///
/// Every record lands in exactly one bucket:
/// `total_lines = malformed + dropped_by_rule + kept_by_rule + too_long + duplicates + final_kept`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatisticsReport {
    total_lines: usize,
    physical_lines: usize,
    valid_entries: usize,
    kept_by_rule: usize,
    dropped_by_rule: usize,
    duplicates_removed: usize,
    too_long_removed: usize,
    malformed_removed: usize,
    noise_removed: usize,
    final_kept: usize,
    backup_path: Option<PathBuf>,
}

impl StatisticsReport {
    /// Count one decision.
    pub(crate) fn record(&mut self, outcome: &Outcome<'_>) {
        self.total_lines += 1;
        match outcome {
            Outcome::Malformed(reason) => {
                self.malformed_removed += 1;
                if matches!(reason, crate::history::MalformedReason::Noise(_)) {
                    self.noise_removed += 1;
                }
                return;
            }
            Outcome::DroppedByRule(_) => self.dropped_by_rule += 1,
            Outcome::KeptByRule(_) => self.kept_by_rule += 1,
            Outcome::TooLong { .. } => self.too_long_removed += 1,
            Outcome::Duplicate => self.duplicates_removed += 1,
            Outcome::Kept(_) => self.final_kept += 1,
        }
        self.valid_entries += 1;
    }

    pub(crate) fn set_physical_lines(&mut self, lines: usize) {
        self.physical_lines = lines;
    }

    /// Attach the backup created before the history file was rewritten.
    pub fn with_backup(mut self, path: impl Into<PathBuf>) -> Self {
        self.backup_path = Some(path.into());
        self
    }

    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Physical lines read, counting each line of a multi-line record.
    pub fn physical_lines(&self) -> usize {
        self.physical_lines
    }

    pub fn valid_entries(&self) -> usize {
        self.valid_entries
    }

    pub fn kept_by_rule(&self) -> usize {
        self.kept_by_rule
    }

    pub fn dropped_by_rule(&self) -> usize {
        self.dropped_by_rule
    }

    pub fn duplicates_removed(&self) -> usize {
        self.duplicates_removed
    }

    pub fn too_long_removed(&self) -> usize {
        self.too_long_removed
    }

    /// Includes noise lines.
    pub fn malformed_removed(&self) -> usize {
        self.malformed_removed
    }

    pub fn noise_removed(&self) -> usize {
        self.noise_removed
    }

    /// Entries that passed every check (excludes keep-rule matches).
    pub fn final_kept(&self) -> usize {
        self.final_kept
    }

    /// Entries written to the output.
    pub fn retained(&self) -> usize {
        self.kept_by_rule + self.final_kept
    }

    pub fn removed(&self) -> usize {
        self.total_lines - self.retained()
    }

    pub fn backup_path(&self) -> Option<&Path> {
        self.backup_path.as_deref()
    }

    /// Share of valid entries that did not make it into the output.
    pub fn reduction_percent(&self) -> f64 {
        if self.valid_entries == 0 {
            return 0.0;
        }
        (1.0 - self.retained() as f64 / self.valid_entries as f64) * 100.0
    }

    /// Render the fixed statistics table.
    pub fn render(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let rows = [
            ("Total lines processed:", self.total_lines),
            ("Valid entries found:", self.valid_entries),
            ("Kept by keep rules:", self.kept_by_rule),
            ("Removed by drop rules:", self.dropped_by_rule),
            ("Duplicates removed:", self.duplicates_removed),
            ("Too long commands removed:", self.too_long_removed),
            ("Pattern/malformed removed:", self.malformed_removed),
            ("Final entries kept:", self.retained()),
        ];

        let mut out = String::new();
        out.push_str(&rule);
        out.push('\n');
        out.push_str("ZSH HISTORY CLEANING STATISTICS\n");
        out.push_str(&rule);
        out.push('\n');
        for (label, value) in rows {
            out.push_str(&format!("{:<27}{:>10}\n", label, group_thousands(value)));
        }
        out.push_str(&format!(
            "{:<27}{:>9.1}%\n",
            "Size reduction:",
            self.reduction_percent()
        ));
        if let Some(backup) = &self.backup_path {
            out.push_str(&format!("\n{:<27}{}\n", "Backup saved as:", backup.display()));
        }
        out.push_str(&rule);
        out
    }
}

/// Format a count with `,` thousands separators.
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
