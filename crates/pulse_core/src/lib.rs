pub mod config;
pub mod error;
pub mod fetch;
pub mod types;

pub use config::FetchConfig;
pub use error::Error;
pub use fetch::PageFetcher;
pub use types::{Article, Category, KeywordEntry, KeywordLike, TrendEntry};

pub type Result<T> = std::result::Result<T, Error>;
