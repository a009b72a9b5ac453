//! Test helper utilities

#![allow(dead_code)]

use histclean::rules::{MatchType, Rule, RuleFile, RuleSet};
use histclean::{filter_lines, FilterRun};

/// Build a rule with default case handling and no description.
pub fn rule(pattern: &str, match_type: MatchType) -> Rule {
    Rule::new(pattern, match_type, false, "")
}

/// Parse a rule file document into a rule set.
pub fn rules_from_json(json: &str) -> RuleSet {
    RuleFile::from_json(json)
        .expect("Failed to parse rule file")
        .into_rule_set()
}

/// Run the filter over string slices.
pub fn run(lines: &[&str], rules: &RuleSet, max_length: usize) -> FilterRun {
    filter_lines(lines.iter().copied(), rules, max_length)
}

/// Check `total = malformed + dropped + kept_by_rule + too_long + duplicates + final_kept`.
pub fn assert_conserved(run: &FilterRun) {
    let r = &run.report;
    assert_eq!(
        r.total_lines(),
        r.malformed_removed()
            + r.dropped_by_rule()
            + r.kept_by_rule()
            + r.too_long_removed()
            + r.duplicates_removed()
            + r.final_kept(),
        "counters do not add up: {:?}",
        r
    );
}

/// A mixed history exercising every bucket.
pub fn mixed_history() -> Vec<&'static str> {
    vec![
        ": 1700000000:0;ls",
        ": 1700000001:0;git status",
        ": 1700000002:0;  Git   Status",
        ": 1700000003:0;git commit -m 'first'",
        ": 1700000004:0;git commit -m 'first'",
        "",
        ": 1700000005:0;",
        "====================================",
        "checking keyring... 100% done",
        ": 1700000006:0;echo the quick brown fox jumps over the lazy dog again",
        "cargo build --release",
        ": 1700000007:0;vim src/main.rs",
        ": 1700000008:0;vim src/main.rs",
        "cargo build --release",
        ": 12x:0;broken",
    ]
}
