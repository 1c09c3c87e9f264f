use serde::{Deserialize, Serialize};
use std::fmt;

/// A headline and optional summary pulled from one structural block of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub headline: String,
    #[serde(default)]
    pub summary: String,
}

impl Article {
    pub fn new(headline: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            summary: summary.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub frequency: usize,
}

impl KeywordEntry {
    pub fn new(keyword: impl Into<String>, frequency: usize) -> Self {
        Self {
            keyword: keyword.into(),
            frequency,
        }
    }
}

/// Anything trend scoring can consume: full entries, or bare words counted once.
pub trait KeywordLike {
    fn keyword(&self) -> &str;

    fn frequency(&self) -> usize {
        1
    }
}

impl KeywordLike for KeywordEntry {
    fn keyword(&self) -> &str {
        &self.keyword
    }

    fn frequency(&self) -> usize {
        self.frequency
    }
}

impl KeywordLike for String {
    fn keyword(&self) -> &str {
        self
    }
}

impl KeywordLike for &str {
    fn keyword(&self) -> &str {
        self
    }
}

/// The closed set of topics trends are scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Politics,
    Business,
    Technology,
    Health,
    Sport,
    Entertainment,
    Environment,
    Crime,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Politics,
        Category::Business,
        Category::Technology,
        Category::Health,
        Category::Sport,
        Category::Entertainment,
        Category::Environment,
        Category::Crime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Politics => "politics",
            Category::Business => "business",
            Category::Technology => "technology",
            Category::Health => "health",
            Category::Sport => "sport",
            Category::Entertainment => "entertainment",
            Category::Environment => "environment",
            Category::Crime => "crime",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendEntry {
    pub category: Category,
    pub score: usize,
}
