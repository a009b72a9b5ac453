//! Keep and drop rule lists.

use super::rule::{MatchType, Rule};

/// Return the first rule (in list order) that matches `command`.
///
/// Evaluation stops at the first match, so only diagnostics depend on order.
pub fn rule_set_matches<'r>(rules: &'r [Rule], command: &str) -> Option<&'r Rule> {
    rules.iter().find(|rule| rule.matches(command))
}

/// Read-only rule configuration for one run.
///
/// Keep rules force retention and bypass the length and duplicate checks.
/// Drop rules force removal and outrank keep rules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    pub keep_rules: Vec<Rule>,
    pub drop_rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(keep_rules: Vec<Rule>, drop_rules: Vec<Rule>) -> Self {
        Self {
            keep_rules,
            drop_rules,
        }
    }

    /// An empty rule set: nothing is forced either way.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rules used when no rule file is available.
    pub fn builtin() -> Self {
        let keep = |pattern: &str, description: &str| {
            Rule::new(pattern, MatchType::StartsWith, false, description)
        };
        Self::new(
            vec![
                keep("git commit", "Keep all git commits"),
                keep("vim", "Keep vim commands"),
                keep("cd ", "Keep directory changes"),
                keep("npm", "Keep npm commands"),
            ],
            vec![
                Rule::new(
                    "error: failed to commit transaction",
                    MatchType::Contains,
                    false,
                    "Remove pacman error messages",
                ),
                Rule::new(
                    "checking.*keyring.*100%",
                    MatchType::Regex,
                    false,
                    "Remove pacman progress messages",
                ),
                Rule::new(
                    "exists in filesystem",
                    MatchType::Contains,
                    false,
                    "Remove filesystem conflict messages",
                ),
                Rule::new(r"^\s*$", MatchType::Regex, false, "Remove empty commands"),
                Rule::new(
                    "Errors occurred, no packages were upgraded",
                    MatchType::Contains,
                    false,
                    "Remove pacman error summaries",
                ),
            ],
        )
    }

    pub fn first_keep(&self, command: &str) -> Option<&Rule> {
        rule_set_matches(&self.keep_rules, command)
    }

    pub fn first_drop(&self, command: &str) -> Option<&Rule> {
        rule_set_matches(&self.drop_rules, command)
    }

    pub fn is_empty(&self) -> bool {
        self.keep_rules.is_empty() && self.drop_rules.is_empty()
    }

    /// Rules whose pattern failed to compile, with their list name.
    pub fn unusable(&self) -> impl Iterator<Item = (&'static str, &Rule)> + '_ {
        self.keep_rules
            .iter()
            .map(|r| ("keep", r))
            .chain(self.drop_rules.iter().map(|r| ("drop", r)))
            .filter(|(_, r)| !r.is_usable())
    }
}
