//! Keep/drop rules and the JSON rule file.

mod file;
mod rule;
mod set;

pub use file::{RuleEntry, RuleFile};
pub use rule::{MatchType, Rule, UnknownMatchType};
pub use set::{rule_set_matches, RuleSet};
