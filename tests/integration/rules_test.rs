//! End-to-end tests for `histclean rules`.

use predicates::prelude::*;
use std::fs;

use crate::helpers::histclean;

#[test]
fn init_writes_sample_rule_file() {
    let home = tempfile::TempDir::new().unwrap();
    let path = home.path().join("rules.json");

    histclean(home.path())
        .args(["rules", "init"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample rule file created at"))
        .stdout(predicate::str::contains("starts_with"));

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"ignore_list\""));
    assert!(text.contains("\"allow_list\""));
    assert!(text.contains("npm|yarn|pnpm"));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let home = tempfile::TempDir::new().unwrap();
    let path = home.path().join("rules.json");
    fs::write(&path, "{}").unwrap();

    histclean(home.path())
        .args(["rules", "init"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "{}");

    histclean(home.path())
        .args(["rules", "init", "--force"])
        .arg(&path)
        .assert()
        .success();
    assert!(fs::read_to_string(&path).unwrap().contains("ignore_list"));
}

#[test]
fn check_lists_builtin_rules() {
    let home = tempfile::TempDir::new().unwrap();

    histclean(home.path())
        .args(["rules", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Keep rules (4):"))
        .stdout(predicate::str::contains("Drop rules (5):"))
        .stdout(predicate::str::contains("\"git commit\""));
}

#[test]
fn check_flags_invalid_regex() {
    let home = tempfile::TempDir::new().unwrap();
    let path = home.path().join("rules.json");
    fs::write(
        &path,
        r#"{"allow_list": [{"pattern": "([", "match_type": "regex"}]}"#,
    )
    .unwrap();

    histclean(home.path())
        .args(["rules", "check", "--rules"])
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("INVALID"))
        .stderr(predicate::str::contains("invalid patterns"));
}
