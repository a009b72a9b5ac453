//! Backup, restore and atomic write of the history file.

use std::fs;

use histclean::error::FileError;
use histclean::files::{atomic_write, create_backup, replace_with_backup, restore_from_backup};
use histclean::history::{join_records, HistoryText};
use histclean::rules::RuleSet;
use tempfile::TempDir;

use crate::helpers::run;

const HISTORY: &str = ": 1700000000:0;ls\n: 1700000001:0;ls\n: 1700000002:0;echo multi \\\nline\n";

#[test]
fn backup_is_a_byte_copy_next_to_the_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".zsh_history");
    fs::write(&path, HISTORY).unwrap();

    let backup = create_backup(&path).unwrap();

    assert_eq!(backup.parent(), path.parent());
    let name = backup.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with(".zsh_history.backup_"), "{}", name);
    assert_eq!(fs::read(&backup).unwrap(), HISTORY.as_bytes());
}

#[test]
fn cleaned_history_round_trips_through_disk() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".zsh_history");
    fs::write(&path, HISTORY).unwrap();

    let text = HistoryText::from_bytes(&fs::read(&path).unwrap());
    assert_eq!(text.records.len(), 3);
    assert_eq!(text.physical_lines, 4);

    let refs: Vec<&str> = text.records.iter().map(String::as_str).collect();
    let result = run(&refs, &RuleSet::empty(), 500);
    atomic_write(&path, join_records(result.raw_lines()).as_bytes()).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        ": 1700000000:0;ls\n: 1700000002:0;echo multi \\\nline\n"
    );
}

#[test]
fn restore_undoes_a_bad_write() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".zsh_history");
    fs::write(&path, HISTORY).unwrap();
    let backup = create_backup(&path).unwrap();

    atomic_write(&path, b"garbage").unwrap();
    restore_from_backup(&path, &backup).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), HISTORY);
    assert!(backup.exists());
}

#[test]
fn invalid_utf8_survives_when_retained() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("hist");
    fs::write(&path, b"echo caf\xe9\nls\n").unwrap();

    let text = HistoryText::from_bytes(&fs::read(&path).unwrap());
    let refs: Vec<&str> = text.records.iter().map(String::as_str).collect();
    let result = run(&refs, &RuleSet::empty(), 500);

    assert_eq!(result.commands(), vec!["echo caf\u{FFFD}", "ls"]);
}

fn clean(bytes: &[u8]) -> (usize, Vec<u8>) {
    let text = HistoryText::from_bytes(bytes);
    let refs: Vec<&str> = text.records.iter().map(String::as_str).collect();
    let result = run(&refs, &RuleSet::empty(), 500);
    let kept = result.commands().len();
    (kept, join_records(result.raw_lines()).into_bytes())
}

#[test]
fn replace_cleans_what_the_backup_holds() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".zsh_history");
    fs::write(&path, HISTORY).unwrap();
    let stale = fs::read(&path).unwrap();

    let mut appended = fs::OpenOptions::new().append(true).open(&path).unwrap();
    std::io::Write::write_all(&mut appended, b": 1700000099:0;new-cmd\n").unwrap();
    drop(appended);

    let replaced = replace_with_backup(&path, clean, atomic_write).unwrap();

    assert_eq!(replaced.output, 3);
    assert_eq!(replaced.original_len, stale.len() + 23);
    assert!(fs::read_to_string(&path).unwrap().ends_with("new-cmd\n"));
    assert!(fs::read_to_string(&replaced.backup).unwrap().ends_with("new-cmd\n"));
}

#[test]
fn replace_restores_when_the_write_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".zsh_history");
    fs::write(&path, HISTORY).unwrap();

    let err = replace_with_backup(&path, clean, |path: &std::path::Path, _: &[u8]| {
        fs::write(path, "partial").unwrap();
        Err(FileError::Write {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    })
    .unwrap_err();

    assert_eq!(fs::read_to_string(&path).unwrap(), HISTORY);
    match &err {
        FileError::WriteRestored { backup, .. } => {
            assert_eq!(fs::read_to_string(backup).unwrap(), HISTORY);
            assert!(err.to_string().contains(&backup.display().to_string()));
        }
        other => panic!("expected WriteRestored, got {:?}", other),
    }
}

#[test]
fn crlf_history_keeps_its_line_endings() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".zsh_history");
    fs::write(&path, "ls\r\npwd\r\nls\r\n").unwrap();

    replace_with_backup(&path, clean, atomic_write).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "ls\r\npwd\r\n");
}
