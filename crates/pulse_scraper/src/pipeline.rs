use std::sync::Arc;

use pulse_core::{Article, Error, KeywordEntry, PageFetcher, Result, TrendEntry};
use pulse_lexicon::{extract_keywords, identify_trends};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::extract::extract_articles;
use crate::logging::Logger;

/// Everything derived from one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub articles: Vec<Article>,
    pub keywords: Vec<KeywordEntry>,
    pub trends: Vec<TrendEntry>,
}

impl AnalysisReport {
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

/// Fetch, extract, then analyze.
pub struct PageAnalyzer {
    fetcher: Arc<dyn PageFetcher>,
    logger: Logger,
}

impl PageAnalyzer {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        let logger = Logger::new().with_prefix(format!("[{}]", fetcher.name()));
        Self { fetcher, logger }
    }

    pub async fn analyze_url(&self, url: &str) -> Result<AnalysisReport> {
        let url = url.trim();
        if url.is_empty() {
            return Err(Error::MissingUrl);
        }
        let parsed = validate_url(url)?;
        let logger = self
            .logger
            .clone()
            .with_prefix(format!("[{}]", parsed.host_str().unwrap_or_default()));

        logger.info(&format!("Fetching {}", url));
        let html = self.fetcher.fetch(parsed.as_str()).await.map_err(|e| {
            logger.warn(&format!("Fetch failed: {}", e));
            e
        })?;

        let report = analyze_html(&html);
        logger.info(&format!(
            "Found {} articles, {} keywords, {} trends",
            report.articles.len(),
            report.keywords.len(),
            report.trends.len()
        ));
        Ok(report)
    }
}

/// Runs extraction and lexical analysis over an already-fetched page.
pub fn analyze_html(html: &str) -> AnalysisReport {
    let articles = extract_articles(html);
    let text = analysis_text(&articles);
    let keywords = extract_keywords(&text);
    let trends = identify_trends(&keywords);

    AnalysisReport {
        articles,
        keywords,
        trends,
    }
}

/// All headlines, then all summaries, joined by single spaces.
pub fn analysis_text(articles: &[Article]) -> String {
    articles
        .iter()
        .map(|a| a.headline.as_str())
        .chain(articles.iter().map(|a| a.summary.as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Accepts absolute `http`/`https` URLs with a host.
pub fn validate_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(Error::InvalidUrl(format!(
                "{}: unsupported scheme '{}'",
                url, other
            )))
        }
    }

    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(Error::InvalidUrl(format!("{}: missing host", url)));
    }

    Ok(parsed)
}
