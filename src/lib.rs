//! histclean library
//!
//! Filtering and deduplication of zsh history files: parse each record,
//! apply keep/drop rules, drop overlong commands and duplicates, and report
//! what happened.

pub mod cli;
pub mod config;
pub mod error;
pub mod files;
pub mod filter;
pub mod history;
pub mod logging;
pub mod rules;
pub mod theme;

pub use config::Config;
pub use filter::{filter_lines, DeduplicatingFilter, FilterRun, Outcome, StatisticsReport};
pub use history::{LineParser, ParsedEntry};
pub use rules::{MatchType, Rule, RuleSet};
