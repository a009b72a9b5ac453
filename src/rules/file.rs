//! JSON rule file schema.
//!
//! ```json
//! { "ignore_list": [ { "pattern": "git commit", "match_type": "starts_with" } ],
//!   "allow_list":  [ { "pattern": "^ls$", "match_type": "regex" } ] }
//! ```
//!
//! `ignore_list` entries become keep rules and `allow_list` entries become
//! drop rules. Entries are converted one at a time so a bad entry is skipped
//! with a warning instead of rejecting the whole document.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::rule::{MatchType, Rule};
use super::set::RuleSet;

/// One rule as written in the rule file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleEntry {
    pub pattern: String,
    pub match_type: String,
    #[serde(default)]
    pub case_sensitive: bool,
    #[serde(default)]
    pub description: String,
}

impl RuleEntry {
    fn new(pattern: &str, match_type: MatchType, description: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            match_type: match_type.as_str().to_string(),
            case_sensitive: false,
            description: description.to_string(),
        }
    }

    fn from_rule(rule: &Rule) -> Self {
        Self {
            pattern: rule.pattern().to_string(),
            match_type: rule.match_type().as_str().to_string(),
            case_sensitive: rule.case_sensitive(),
            description: rule.description().to_string(),
        }
    }
}

/// The rule file document. Lists are kept as raw JSON values until
/// [`RuleFile::into_rule_set`] validates them entry by entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub match_types: Vec<String>,
    #[serde(default)]
    pub ignore_list: Vec<Value>,
    #[serde(default)]
    pub allow_list: Vec<Value>,
}

impl RuleFile {
    /// Parse a rule file document.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Convert into a rule set, skipping invalid entries with a warning.
    pub fn into_rule_set(self) -> RuleSet {
        let keep_rules = convert_list("ignore_list", self.ignore_list);
        let drop_rules = convert_list("allow_list", self.allow_list);
        tracing::info!(
            "Loaded {} keep rules and {} drop rules",
            keep_rules.len(),
            drop_rules.len()
        );
        RuleSet::new(keep_rules, drop_rules)
    }

    /// Document describing an existing rule set.
    pub fn from_rule_set(rules: &RuleSet) -> Self {
        let to_values = |list: &[Rule]| -> Vec<Value> {
            list.iter()
                .filter_map(|r| serde_json::to_value(RuleEntry::from_rule(r)).ok())
                .collect()
        };
        Self {
            description: None,
            match_types: Vec::new(),
            ignore_list: to_values(&rules.keep_rules),
            allow_list: to_values(&rules.drop_rules),
        }
    }

    /// Document written on first run when no rule file exists.
    pub fn builtin() -> Self {
        Self::from_rule_set(&RuleSet::builtin())
    }

    /// Annotated example written by `histclean rules init`.
    pub fn sample() -> Self {
        let keep = [
            RuleEntry::new("git commit", MatchType::StartsWith, "Keep all git commit commands"),
            RuleEntry::new("vim", MatchType::StartsWith, "Keep vim/editor commands"),
            RuleEntry::new("cd ", MatchType::StartsWith, "Keep directory navigation"),
            RuleEntry::new("npm|yarn|pnpm", MatchType::Regex, "Keep package manager commands"),
            RuleEntry::new("docker", MatchType::Contains, "Keep docker commands"),
            RuleEntry::new("sudo systemctl", MatchType::StartsWith, "Keep system service commands"),
        ];
        let drop = [
            RuleEntry::new(
                "error: failed to commit transaction",
                MatchType::Contains,
                "Remove pacman transaction errors",
            ),
            RuleEntry::new(
                "checking.*keyring.*100%",
                MatchType::Regex,
                "Remove pacman progress indicators",
            ),
            RuleEntry::new(
                "exists in filesystem",
                MatchType::Contains,
                "Remove filesystem conflict messages",
            ),
            RuleEntry::new(r"^\s*$", MatchType::Regex, "Remove empty/whitespace-only commands"),
            RuleEntry::new(
                "Errors occurred, no packages were upgraded",
                MatchType::Exact,
                "Remove pacman error summaries",
            ),
            RuleEntry::new("^clear$|^cls$", MatchType::Regex, "Remove screen clearing commands"),
            RuleEntry::new(
                "^ls$|^ll$|^la$",
                MatchType::Regex,
                "Remove basic listing commands (keep ls with arguments)",
            ),
        ];
        let to_values = |entries: &[RuleEntry]| -> Vec<Value> {
            entries
                .iter()
                .filter_map(|e| serde_json::to_value(e).ok())
                .collect()
        };

        Self {
            description: Some("histclean rule configuration".to_string()),
            match_types: MatchType::ALL
                .iter()
                .map(|m| format!("{} - {}", m, m.help()))
                .collect(),
            ignore_list: to_values(&keep),
            allow_list: to_values(&drop),
        }
    }
}

fn convert_list(list_name: &str, values: Vec<Value>) -> Vec<Rule> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match convert_entry(value) {
            Ok(rule) => {
                tracing::debug!("Loaded {} rule: {}", list_name, rule.label());
                Some(rule)
            }
            Err(reason) => {
                tracing::warn!("Skipping {} entry #{}: {}", list_name, index + 1, reason);
                None
            }
        })
        .collect()
}

fn convert_entry(value: Value) -> Result<Rule, String> {
    let entry: RuleEntry = serde_json::from_value(value).map_err(|e| e.to_string())?;
    let match_type: MatchType = entry.match_type.parse().map_err(|e| format!("{}", e))?;
    Ok(Rule::new(
        entry.pattern,
        match_type,
        entry.case_sensitive,
        entry.description,
    ))
}
