//! Statistics table rendering.

use histclean::rules::{MatchType, RuleSet};

use crate::helpers::{rule, run};

fn worked_example_report() -> histclean::StatisticsReport {
    let rules = RuleSet::new(
        vec![rule("git", MatchType::StartsWith)],
        vec![rule("^ls$", MatchType::Regex)],
    );
    run(
        &["ls", "ls", "git commit -m x", "checking 100% done"],
        &rules,
        500,
    )
    .report
}

#[test]
fn rendered_table() {
    let report = worked_example_report().with_backup("/tmp/hist.backup_20240309_140507");
    insta::assert_snapshot!(report.render(), @r"
    ==================================================
    ZSH HISTORY CLEANING STATISTICS
    ==================================================
    Total lines processed:              4
    Valid entries found:                3
    Kept by keep rules:                 1
    Removed by drop rules:              2
    Duplicates removed:                 0
    Too long commands removed:          0
    Pattern/malformed removed:          1
    Final entries kept:                 1
    Size reduction:                 66.7%

    Backup saved as:           /tmp/hist.backup_20240309_140507
    ==================================================
    ");
}

#[test]
fn reduction_counts_keep_rule_matches_as_retained() {
    let report = worked_example_report();
    assert_eq!(report.retained(), 1);
    assert!((report.reduction_percent() - 66.666).abs() < 0.01);
}

#[test]
fn large_counts_are_grouped() {
    let lines: Vec<String> = (0..1500).map(|i| format!("echo {}", i)).collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let report = run(&refs, &RuleSet::empty(), 500).report;
    let table = report.render();
    assert!(table.contains("Total lines processed:          1,500"));
    assert!(table.contains("Size reduction:                  0.0%"));
    assert!(!table.contains("Backup saved as:"));
}
