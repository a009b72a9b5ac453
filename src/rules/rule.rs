//! A single keep/drop pattern and its matcher.

use std::fmt;
use std::str::FromStr;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// How a rule's pattern is compared against a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Exact,
    Contains,
    StartsWith,
    EndsWith,
    Regex,
}

impl MatchType {
    /// All match types in the order they are documented.
    pub const ALL: [MatchType; 5] = [
        MatchType::Exact,
        MatchType::Contains,
        MatchType::StartsWith,
        MatchType::EndsWith,
        MatchType::Regex,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::Contains => "contains",
            MatchType::StartsWith => "starts_with",
            MatchType::EndsWith => "ends_with",
            MatchType::Regex => "regex",
        }
    }

    /// One-line explanation used in help output and the sample rule file.
    pub fn help(&self) -> &'static str {
        match self {
            MatchType::Exact => "Match the entire command exactly",
            MatchType::Contains => "Command contains the pattern anywhere",
            MatchType::StartsWith => "Command starts with the pattern",
            MatchType::EndsWith => "Command ends with the pattern",
            MatchType::Regex => "Use regular expression matching",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a rule file names a match type we do not know.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown match type '{0}'")]
pub struct UnknownMatchType(pub String);

impl FromStr for MatchType {
    type Err = UnknownMatchType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MatchType::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownMatchType(s.to_string()))
    }
}

/// Prepared form of a rule's pattern.
///
/// A regex that fails to compile becomes `Never` so the hot loop only ever
/// sees data, never an error.
#[derive(Debug, Clone)]
enum Matcher {
    Text { folded: String },
    Regex(Regex),
    Never { reason: String },
}

/// A keep or drop rule loaded from the rule file.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: String,
    match_type: MatchType,
    case_sensitive: bool,
    description: String,
    matcher: Matcher,
}

impl Rule {
    /// Build a rule. Never fails: an invalid regex yields a rule that matches
    /// nothing and logs one warning here.
    pub fn new(
        pattern: impl Into<String>,
        match_type: MatchType,
        case_sensitive: bool,
        description: impl Into<String>,
    ) -> Self {
        let pattern = pattern.into();
        let matcher = match match_type {
            MatchType::Regex => match RegexBuilder::new(&pattern)
                .case_insensitive(!case_sensitive)
                .build()
            {
                Ok(re) => Matcher::Regex(re),
                Err(e) => {
                    tracing::warn!("Invalid regex pattern '{}', rule disabled: {}", pattern, e);
                    Matcher::Never {
                        reason: e.to_string(),
                    }
                }
            },
            _ => Matcher::Text {
                folded: fold(&pattern, case_sensitive),
            },
        };

        Self {
            pattern,
            match_type,
            case_sensitive,
            description: description.into(),
            matcher,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn match_type(&self) -> MatchType {
        self.match_type
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Text used when reporting which rule fired: the description, or the
    /// pattern when no description was given.
    pub fn label(&self) -> &str {
        if self.description.is_empty() {
            &self.pattern
        } else {
            &self.description
        }
    }

    /// `false` when the pattern failed to compile.
    pub fn is_usable(&self) -> bool {
        !matches!(self.matcher, Matcher::Never { .. })
    }

    pub fn compile_error(&self) -> Option<&str> {
        match &self.matcher {
            Matcher::Never { reason } => Some(reason),
            _ => None,
        }
    }

    /// Check if the command matches this rule.
    ///
    /// An empty pattern matches every command for `contains`, `starts_with`
    /// and `ends_with`, and only the empty command for `exact`.
    pub fn matches(&self, command: &str) -> bool {
        match &self.matcher {
            Matcher::Never { .. } => false,
            Matcher::Regex(re) => re.is_match(command),
            Matcher::Text { folded } => {
                let text = fold(command, self.case_sensitive);
                match self.match_type {
                    MatchType::Exact => text == *folded,
                    MatchType::Contains => text.contains(folded.as_str()),
                    MatchType::StartsWith => text.starts_with(folded.as_str()),
                    MatchType::EndsWith => text.ends_with(folded.as_str()),
                    MatchType::Regex => false,
                }
            }
        }
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
            && self.match_type == other.match_type
            && self.case_sensitive == other.case_sensitive
            && self.description == other.description
    }
}

fn fold(s: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        s.to_string()
    } else {
        s.to_lowercase()
    }
}
