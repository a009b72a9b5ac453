//! Help, version and completion output.

use predicates::prelude::*;

use crate::helpers::histclean;

#[test]
fn help_lists_commands() {
    let home = tempfile::TempDir::new().unwrap();

    histclean(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("clean"))
        .stdout(predicate::str::contains("rules"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag() {
    let home = tempfile::TempDir::new().unwrap();

    histclean(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("histclean "));
}

#[test]
fn zsh_completions() {
    let home = tempfile::TempDir::new().unwrap();

    histclean(home.path())
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef histclean"));
}

#[test]
fn zero_max_length_is_rejected() {
    let home = tempfile::TempDir::new().unwrap();

    histclean(home.path())
        .args(["clean", "-l", "0"])
        .assert()
        .failure();
}
