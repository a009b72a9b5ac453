//! Filtering and deduplication of history records.

mod engine;
mod stats;

pub use engine::{
    decide, filter_lines, DeduplicatingFilter, FilterRun, Outcome, RetainedEntry,
    DEFAULT_MAX_LENGTH,
};
pub use stats::{group_thousands, StatisticsReport};
