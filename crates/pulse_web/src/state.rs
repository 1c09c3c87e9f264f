use pulse_scraper::PageAnalyzer;
use std::sync::Arc;

pub struct AppState {
    pub analyzer: Arc<PageAnalyzer>,
}

impl AppState {
    pub fn new(analyzer: PageAnalyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }
}
