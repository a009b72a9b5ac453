//! Rules subcommands handler

use anyhow::{Context, Result};
use std::path::Path;

use histclean::config::{load_rules, write_rule_file, LoadedRules};
use histclean::rules::{MatchType, Rule, RuleFile};
use histclean::theme::current_theme;
use histclean::Config;

/// Write the sample rule file.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(path: &Path, force: bool) -> Result<()> {
    let theme = current_theme();
    write_rule_file(path, &RuleFile::sample(), force)?;
    println!(
        "{}",
        theme.success_text(&format!("Sample rule file created at: {}", path.display()))
    );
    println!(
        "{}",
        theme.primary_text("Edit this file to customize your keep and drop rules.")
    );
    println!();
    println!("{}", theme.secondary_text("Match types:"));
    for match_type in MatchType::ALL {
        println!("  {:<12} {}", match_type.as_str(), match_type.help());
    }
    Ok(())
}

/// List the rules a clean run would use.
#[cfg(not(tarpaulin_include))]
pub fn handle_check(rules: Option<&Path>) -> Result<()> {
    let config = Config::load().context("Failed to load settings")?;
    let loaded = load_rules(rules, &config.rules_file()).context("Failed to load rule file")?;
    print!("{}", format_rules(&loaded));

    let broken = loaded.rules.unusable().count();
    if broken > 0 {
        anyhow::bail!("{} rule(s) have invalid patterns and will never match", broken);
    }
    Ok(())
}

/// Format the loaded rules as a listing.
pub fn format_rules(loaded: &LoadedRules) -> String {
    let mut out = format!("Rules from: {}\n", loaded.source);
    out.push_str(&format_section("Keep rules", &loaded.rules.keep_rules));
    out.push_str(&format_section("Drop rules", &loaded.rules.drop_rules));
    out
}

fn format_section(title: &str, rules: &[Rule]) -> String {
    let mut out = format!("\n{} ({}):\n", title, rules.len());
    if rules.is_empty() {
        out.push_str("  (none)\n");
    }
    for (i, rule) in rules.iter().enumerate() {
        let case = if rule.case_sensitive() { ", case-sensitive" } else { "" };
        out.push_str(&format!(
            "  {:>2}. [{}{}] {:?}",
            i + 1,
            rule.match_type(),
            case,
            rule.pattern()
        ));
        if !rule.description().is_empty() {
            out.push_str(&format!(" - {}", rule.description()));
        }
        if let Some(err) = rule.compile_error() {
            out.push_str(&format!("\n      INVALID: {}", err));
        }
        out.push('\n');
    }
    out
}
