//! Keyword frequency and topic trend analysis over plain text.

pub mod keywords;
pub mod tables;
pub mod trends;

pub use keywords::{extract_keywords, normalize};
pub use trends::identify_trends;

pub mod prelude {
    pub use super::{extract_keywords, identify_trends};
    pub use pulse_core::{Category, KeywordEntry, TrendEntry};
}
