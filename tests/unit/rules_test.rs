//! Rule file parsing and loading.

use std::fs;

use histclean::config::{load_rules, RuleSource};
use histclean::rules::{MatchType, RuleFile, RuleSet};
use tempfile::TempDir;

use crate::helpers::rules_from_json;

#[test]
fn ignore_list_keeps_and_allow_list_drops() {
    let rules = rules_from_json(
        r#"{
            "description": "mine",
            "match_types": ["exact"],
            "ignore_list": [
                {"pattern": "docker", "match_type": "starts_with", "description": "Keep docker"}
            ],
            "allow_list": [
                {"pattern": "^clear$|^cls$", "match_type": "regex"},
                {"pattern": "Secret", "match_type": "contains", "case_sensitive": true}
            ]
        }"#,
    );

    assert_eq!(rules.keep_rules.len(), 1);
    assert_eq!(rules.drop_rules.len(), 2);
    assert_eq!(rules.keep_rules[0].description(), "Keep docker");
    assert!(rules.first_keep("docker ps").is_some());
    assert!(rules.first_drop("cls").is_some());
    assert!(rules.first_drop("echo Secret").is_some());
    assert!(rules.first_drop("echo secret").is_none());
}

#[test]
fn bad_entries_are_skipped_individually() {
    let rules = rules_from_json(
        r#"{
            "ignore_list": [
                {"pattern": "vim"},
                {"match_type": "exact"},
                {"pattern": "vim", "match_type": "fuzzy"},
                "not an object",
                {"pattern": 42, "match_type": "exact"},
                {"pattern": "cd ", "match_type": "STARTS_WITH"}
            ]
        }"#,
    );
    assert_eq!(rules.keep_rules.len(), 1);
    assert_eq!(rules.keep_rules[0].match_type(), MatchType::StartsWith);
    assert!(rules.drop_rules.is_empty());
}

#[test]
fn invalid_regex_stays_as_a_dead_rule() {
    let rules = rules_from_json(
        r#"{"allow_list": [
            {"pattern": "(unclosed", "match_type": "regex"},
            {"pattern": "^ls$", "match_type": "regex"}
        ]}"#,
    );
    assert_eq!(rules.drop_rules.len(), 2);
    assert_eq!(rules.unusable().count(), 1);
    assert!(rules.first_drop("(unclosed").is_none());
    assert!(rules.first_drop("ls").is_some());
}

#[test]
fn missing_lists_mean_no_rules() {
    let rules = rules_from_json("{}");
    assert!(rules.is_empty());
}

#[test]
fn first_match_in_list_order_wins() {
    let rules = rules_from_json(
        r#"{"allow_list": [
            {"pattern": "rm", "match_type": "starts_with", "description": "first"},
            {"pattern": "rm -rf", "match_type": "starts_with", "description": "second"}
        ]}"#,
    );
    assert_eq!(rules.first_drop("rm -rf /tmp/x").unwrap().label(), "first");
}

#[test]
fn builtin_file_matches_builtin_set() {
    let json = RuleFile::builtin().to_json_pretty().unwrap();
    let reparsed = rules_from_json(&json);
    assert_eq!(reparsed, RuleSet::builtin());
}

#[test]
fn sample_file_loads_cleanly() {
    let json = RuleFile::sample().to_json_pretty().unwrap();
    let rules = rules_from_json(&json);
    assert!(!rules.keep_rules.is_empty());
    assert!(!rules.drop_rules.is_empty());
    assert_eq!(rules.unusable().count(), 0);
    assert!(rules.first_keep("yarn install").is_some());
    assert!(rules.first_drop("ll").is_some());
}

#[test]
fn explicit_rule_file_must_load() {
    let temp = TempDir::new().unwrap();
    let bad = temp.path().join("bad.json");
    fs::write(&bad, "[1, 2").unwrap();

    let result = load_rules(Some(&bad), &temp.path().join("rules.json"));
    assert!(result.is_err());
    assert!(!temp.path().join("rules.json").exists());
}

#[test]
fn default_rule_file_is_bootstrapped() {
    let temp = TempDir::new().unwrap();
    let default_path = temp.path().join("histclean").join("rules.json");

    let first = load_rules(None, &default_path).unwrap();
    assert_eq!(first.source, RuleSource::Builtin);
    assert_eq!(first.rules, RuleSet::builtin());

    let second = load_rules(None, &default_path).unwrap();
    assert_eq!(second.source, RuleSource::File(default_path));
    assert_eq!(second.rules, RuleSet::builtin());
}
