//! Shape-based detection of tool output that ended up in the history file.
//!
//! Progress bars, separator rules and pacman status lines get pasted or
//! mis-recorded into history. [`NoiseClassifier`] recognises them by the
//! shape of the line rather than by exact strings.

/// Consecutive `-` or `=` characters that make a separator rule.
const SEPARATOR_RUN: usize = 20;

/// Consecutive repeats of one character that mark a line as output.
const REPEATED_CHAR_RUN: usize = 16;

/// Consecutive spaces/tabs inside a line that mark column-aligned output.
const WHITESPACE_RUN: usize = 10;

/// Minimum inner width of a `[####    ]` progress bar.
const MIN_BAR_WIDTH: usize = 5;

/// Minimum filled cells in a progress bar.
const MIN_BAR_FILL: usize = 3;

const BAR_CHARS: &[char] = &['#', '=', '-', '>', '.', '*', '|', '█', '░', '▒', '▓', ' '];

const PROGRESS_WORDS: &[&str] = &[
    "checking",
    "downloading",
    "installing",
    "upgrading",
    "resolving",
    "receiving",
    "loading",
    "processing",
    "extracting",
    "unpacking",
    "compressing",
    "done",
    "complete",
    "completed",
    "progress",
];

/// Which noise signature a line matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseKind {
    Separator,
    RepeatedChar,
    ExcessiveWhitespace,
    ProgressBar,
    ProgressPercentage,
}

impl NoiseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoiseKind::Separator => "separator",
            NoiseKind::RepeatedChar => "repeated character",
            NoiseKind::ExcessiveWhitespace => "excessive whitespace",
            NoiseKind::ProgressBar => "progress bar",
            NoiseKind::ProgressPercentage => "progress percentage",
        }
    }
}

/// Structural noise classifier.
pub struct NoiseClassifier;

impl NoiseClassifier {
    /// Returns `true` if the command looks like tool output.
    pub fn is_noise(command: &str) -> bool {
        Self::classify(command).is_some()
    }

    /// Checks run in declaration order of [`NoiseKind`]; the first hit wins.
    pub fn classify(command: &str) -> Option<NoiseKind> {
        let trimmed = command.trim();
        if trimmed.is_empty() {
            return None;
        }
        if Self::has_separator(trimmed) {
            Some(NoiseKind::Separator)
        } else if Self::has_repeated_char(trimmed) {
            Some(NoiseKind::RepeatedChar)
        } else if Self::has_whitespace_run(trimmed) {
            Some(NoiseKind::ExcessiveWhitespace)
        } else if Self::has_progress_bar(trimmed) {
            Some(NoiseKind::ProgressBar)
        } else if Self::has_progress_percentage(trimmed) {
            Some(NoiseKind::ProgressPercentage)
        } else {
            None
        }
    }

    fn has_separator(s: &str) -> bool {
        longest_run(s, |c| c == '-') >= SEPARATOR_RUN || longest_run(s, |c| c == '=') >= SEPARATOR_RUN
    }

    fn has_repeated_char(s: &str) -> bool {
        let mut prev = None;
        let mut run = 0usize;
        for c in s.chars() {
            if Some(c) == prev {
                run += 1;
            } else {
                prev = Some(c);
                run = 1;
            }
            if run >= REPEATED_CHAR_RUN && !c.is_whitespace() {
                return true;
            }
        }
        false
    }

    /// Indentation at the start of continuation lines does not count.
    fn has_whitespace_run(s: &str) -> bool {
        s.lines()
            .any(|line| longest_run(line.trim_start(), |c| c == ' ' || c == '\t') >= WHITESPACE_RUN)
    }

    fn has_progress_bar(s: &str) -> bool {
        let mut rest = s;
        while let Some(open) = rest.find('[') {
            let after = &rest[open + 1..];
            let Some(close) = after.find(']') else {
                return false;
            };
            let inner = &after[..close];
            let width = inner.chars().count();
            let fill = inner.chars().filter(|c| *c != ' ').count();
            if width >= MIN_BAR_WIDTH
                && fill >= MIN_BAR_FILL
                && inner.chars().all(|c| BAR_CHARS.contains(&c))
            {
                return true;
            }
            rest = &after[close + 1..];
        }
        false
    }

    fn has_progress_percentage(s: &str) -> bool {
        has_percent_token(s)
            && (Self::has_progress_bar(s) || has_step_counter(s) || has_progress_word(s))
    }
}

fn longest_run(s: &str, pred: impl Fn(char) -> bool) -> usize {
    let mut best = 0;
    let mut run = 0;
    for c in s.chars() {
        if pred(c) {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }
    best
}

/// `N%` or `N.N%` with one to three integer digits, not glued to a word.
fn has_percent_token(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if c != '%' {
            continue;
        }
        let mut j = i;
        let mut seen_dot = false;
        let mut int_digits = 0;
        while j > 0 {
            let prev = chars[j - 1];
            if prev.is_ascii_digit() {
                int_digits += 1;
            } else if prev == '.' && !seen_dot && int_digits > 0 {
                seen_dot = true;
                int_digits = 0;
            } else {
                break;
            }
            j -= 1;
        }
        let glued = j > 0 && chars[j - 1].is_alphanumeric();
        if (1..=3).contains(&int_digits) && !glued {
            return true;
        }
    }
    false
}

/// A pacman-style `(3/12)` step counter.
fn has_step_counter(s: &str) -> bool {
    s.split('(').skip(1).any(|part| {
        let Some((inside, _)) = part.split_once(')') else {
            return false;
        };
        match inside.split_once('/') {
            Some((a, b)) => {
                !a.is_empty()
                    && !b.is_empty()
                    && a.chars().all(|c| c.is_ascii_digit())
                    && b.chars().all(|c| c.is_ascii_digit())
            }
            None => false,
        }
    })
}

fn has_progress_word(s: &str) -> bool {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .any(|w| PROGRESS_WORDS.contains(&w.to_lowercase().as_str()))
}
