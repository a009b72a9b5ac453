//! Splitting a history file into records.
//!
//! zsh stores a newline inside a command as a backslash at the end of the
//! physical line. Such lines are glued back together here so a multi-line
//! command is filtered as one record.

/// History file contents split into records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryText {
    pub records: Vec<String>,
    pub physical_lines: usize,
}

impl HistoryText {
    /// Decode raw bytes, replacing invalid UTF-8, and split into records.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::parse(&String::from_utf8_lossy(bytes))
    }

    pub fn parse(text: &str) -> Self {
        let mut records: Vec<String> = Vec::new();
        let mut physical_lines = 0;
        let mut continues = false;

        // A trailing newline does not start another line
        let body = text.strip_suffix('\n').unwrap_or(text);
        if text.is_empty() {
            return Self::default();
        }

        // A `\r` before the newline stays on the record so CRLF files are
        // written back as they were read; parsing trims it off the command.
        for line in body.split('\n') {
            physical_lines += 1;

            match records.last_mut() {
                Some(last) if continues => {
                    last.push('\n');
                    last.push_str(line);
                }
                _ => records.push(line.to_string()),
            }
            continues = ends_with_continuation(line.strip_suffix('\r').unwrap_or(line));
        }

        Self {
            records,
            physical_lines,
        }
    }
}

/// An odd number of trailing backslashes escapes the newline.
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

/// Join retained records back into file contents.
pub fn join_records<'a>(records: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(record);
        out.push('\n');
    }
    out
}
