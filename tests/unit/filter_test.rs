//! Filter properties: priority, dedup, ordering and counters.

use histclean::filter::{decide, DeduplicatingFilter, Outcome};
use histclean::history::{LineParser, MalformedReason};
use histclean::rules::{MatchType, RuleSet};
use std::collections::HashSet;

use crate::helpers::{assert_conserved, mixed_history, rule, rules_from_json, run};

fn example_rules() -> RuleSet {
    RuleSet::new(
        vec![rule("git", MatchType::StartsWith)],
        vec![rule("^ls$", MatchType::Regex)],
    )
}

// ── Worked examples ──

#[test]
fn worked_example() {
    let result = run(
        &["ls", "ls", "git commit -m x", "checking 100% done"],
        &example_rules(),
        500,
    );

    assert_eq!(result.commands(), vec!["git commit -m x"]);
    let r = &result.report;
    assert_eq!(r.malformed_removed(), 1);
    assert_eq!(r.dropped_by_rule(), 2);
    assert_eq!(r.kept_by_rule(), 1);
    assert_eq!(r.final_kept(), 0);
    assert_eq!(r.total_lines(), 4);
    assert_eq!(r.valid_entries(), 3);
    assert_conserved(&result);
}

#[test]
fn empty_input_is_not_an_error() {
    let result = run(&[], &example_rules(), 500);
    assert!(result.retained.is_empty());
    let r = &result.report;
    assert_eq!(r.total_lines(), 0);
    assert_eq!(r.valid_entries(), 0);
    assert_eq!(r.retained(), 0);
    assert_eq!(r.reduction_percent(), 0.0);
}

// ── Priority ──

#[test]
fn drop_rule_outranks_keep_rule() {
    let rules = RuleSet::new(
        vec![rule("git", MatchType::StartsWith)],
        vec![rule("push --force", MatchType::Contains)],
    );
    let result = run(&["git push --force", "git push --force origin"], &rules, 500);
    assert!(result.retained.is_empty());
    assert_eq!(result.report.dropped_by_rule(), 2);
    assert_eq!(result.report.kept_by_rule(), 0);
}

#[test]
fn malformed_lines_never_reach_rules() {
    let rules = RuleSet::new(vec![rule("", MatchType::Contains)], vec![]);
    let entry = LineParser::parse("   ");
    let outcome = decide(&entry, &rules, 500, &HashSet::new());
    assert_eq!(outcome, Outcome::Malformed(MalformedReason::Empty));
}

// ── Keep rules bypass dedup and length ──

#[test]
fn keep_rule_matches_are_never_deduplicated() {
    let result = run(&["vim notes.md", "vim notes.md", "VIM notes.md"], &RuleSet::builtin(), 500);
    assert_eq!(result.retained.len(), 3);
    assert_eq!(result.report.kept_by_rule(), 3);
    assert_eq!(result.report.duplicates_removed(), 0);
}

#[test]
fn keep_rule_matches_skip_length_check() {
    let long = format!("git commit -m '{}'", "fix the parser ".repeat(10));
    let result = run(&[long.as_str()], &RuleSet::builtin(), 20);
    assert_eq!(result.report.kept_by_rule(), 1);
    assert_eq!(result.report.too_long_removed(), 0);
}

#[test]
fn keep_rule_match_shadows_later_plain_duplicate() {
    // A case-sensitive keep rule lets the first spelling through; the second
    // spelling is a plain command with the same key.
    let rules = RuleSet::new(
        vec![histclean::Rule::new("make", MatchType::StartsWith, true, "")],
        vec![],
    );
    let result = run(&["make test", "MAKE test"], &rules, 500);
    assert_eq!(result.commands(), vec!["make test"]);
    assert_eq!(result.report.duplicates_removed(), 1);
}

// ── Length ──

#[test]
fn length_is_counted_in_characters() {
    let rules = RuleSet::empty();
    let result = run(&["echo ééééé", "echo ffffff"], &rules, 10);
    assert_eq!(result.commands(), vec!["echo ééééé"]);
    assert_eq!(result.report.too_long_removed(), 1);
}

#[test]
fn length_equal_to_max_is_kept() {
    let result = run(&["abcde"], &RuleSet::empty(), 5);
    assert_eq!(result.report.final_kept(), 1);
}

// ── Dedup ──

#[test]
fn normalization_equivalence() {
    let result = run(&["git status", "  Git   Status"], &RuleSet::empty(), 500);
    assert_eq!(result.commands(), vec!["git status"]);
    assert_eq!(result.report.duplicates_removed(), 1);
}

#[test]
fn first_occurrence_keeps_its_timestamp() {
    let result = run(
        &[": 100:0;make", ": 200:0;make", ": 300:0;make check"],
        &RuleSet::empty(),
        500,
    );
    let raw: Vec<&str> = result.raw_lines().collect();
    assert_eq!(raw, vec![": 100:0;make", ": 300:0;make check"]);
}

// ── Whole-run properties ──

#[test]
fn counters_are_conserved_on_mixed_history() {
    let result = run(&mixed_history(), &RuleSet::builtin(), 40);
    assert_conserved(&result);
    let r = &result.report;
    assert!(r.malformed_removed() >= 4);
    assert!(r.noise_removed() >= 2);
    assert_eq!(r.too_long_removed(), 1);
    assert_eq!(r.kept_by_rule(), 4);
}

#[test]
fn output_is_an_ordered_subsequence_of_input() {
    let input = mixed_history();
    let result = run(&input, &RuleSet::builtin(), 40);

    let mut cursor = input.iter();
    for kept in result.raw_lines() {
        assert!(
            cursor.any(|line| *line == kept),
            "{:?} out of order or not from input",
            kept
        );
    }
}

#[test]
fn second_pass_removes_nothing() {
    let rules = RuleSet::builtin();
    let first = run(&mixed_history(), &rules, 40);
    let again: Vec<&str> = first.raw_lines().collect();
    let second = run(&again, &rules, 40);

    assert_eq!(second.report.valid_entries(), second.report.retained());
    assert_eq!(second.report.removed(), 0);
    assert_eq!(second.commands(), first.commands());
}

#[test]
fn runs_are_deterministic() {
    let rules = RuleSet::builtin();
    let a = run(&mixed_history(), &rules, 40);
    let b = run(&mixed_history(), &rules, 40);
    assert_eq!(a.retained, b.retained);
    assert_eq!(a.report, b.report);
}

#[test]
fn filter_can_be_driven_record_by_record() {
    let rules = rules_from_json(
        r#"{"ignore_list": [{"pattern": "npm", "match_type": "starts_with"}],
            "allow_list": [{"pattern": "^clear$", "match_type": "regex"}]}"#,
    );
    let mut filter = DeduplicatingFilter::new(&rules, 500);

    assert!(matches!(filter.push("clear"), Outcome::DroppedByRule(_)));
    assert!(matches!(filter.push("npm test"), Outcome::KeptByRule(_)));
    assert!(matches!(filter.push("ls"), Outcome::Kept(_)));
    assert_eq!(filter.push("ls"), Outcome::Duplicate);

    let result = filter.finish();
    assert_eq!(result.commands(), vec!["npm test", "ls"]);
}
