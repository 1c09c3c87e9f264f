use async_trait::async_trait;
use crate::Result;

/// Source of raw page markup.
///
/// Implementations own transport concerns (timeouts, redirects, TLS) and
/// report every failure as an `Err` rather than panicking.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Fetches the body of `url` as text
    async fn fetch(&self, url: &str) -> Result<String>;
}
