//! Reading and parsing shell history.

mod noise;
mod normalize;
mod parser;
mod reader;

pub use noise::{NoiseClassifier, NoiseKind};
pub use normalize::{normalize, NormalizedKey};
pub use parser::{HistoryTimestamp, LineParser, MalformedReason, ParsedEntry};
pub use reader::{join_records, HistoryText};
