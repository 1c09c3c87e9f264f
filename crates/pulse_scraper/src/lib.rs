pub mod cli;
pub mod extract;
pub mod fetcher;
pub mod logging;
pub mod pipeline;

pub use cli::{handle_command, CommandOutcome, ScraperArgs, ScraperCommands};
pub use extract::extract_articles;
pub use fetcher::HttpFetcher;
pub use pipeline::{analyze_html, AnalysisReport, PageAnalyzer};

pub mod prelude {
    pub use super::{analyze_html, AnalysisReport, HttpFetcher, PageAnalyzer};
    pub use pulse_core::{Article, Error, FetchConfig, PageFetcher, Result};
}
