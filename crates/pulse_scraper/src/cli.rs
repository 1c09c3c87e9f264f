use std::path::PathBuf;

use clap::{Args, Subcommand};
use pulse_core::{Error, Result};

use crate::pipeline::{analyze_html, AnalysisReport, PageAnalyzer};

#[derive(Args, Debug)]
pub struct ScraperArgs {
    #[command(subcommand)]
    pub command: ScraperCommands,
}

#[derive(Subcommand, Debug)]
pub enum ScraperCommands {
    /// Fetch a page and analyze its articles
    Url {
        /// Absolute http(s) URL of the page
        url: String,

        /// Fail when no articles are found
        #[arg(long)]
        require_articles: bool,
    },
    /// Analyze a saved HTML file without touching the network
    File {
        path: PathBuf,

        /// Fail when no articles are found
        #[arg(long)]
        require_articles: bool,
    },
}

/// What a command analyzed and what it found.
#[derive(Debug)]
pub struct CommandOutcome {
    pub source: String,
    pub report: AnalysisReport,
}

pub async fn handle_command(args: ScraperArgs, analyzer: &PageAnalyzer) -> Result<CommandOutcome> {
    let (source, report, require_articles) = match args.command {
        ScraperCommands::Url {
            url,
            require_articles,
        } => {
            let report = analyzer.analyze_url(&url).await?;
            (url, report, require_articles)
        }
        ScraperCommands::File {
            path,
            require_articles,
        } => {
            let bytes = tokio::fs::read(&path).await?;
            let report = analyze_html(&String::from_utf8_lossy(&bytes));
            (path.display().to_string(), report, require_articles)
        }
    };

    if require_articles && report.is_empty() {
        return Err(Error::EmptyResult(source));
    }

    Ok(CommandOutcome { source, report })
}
