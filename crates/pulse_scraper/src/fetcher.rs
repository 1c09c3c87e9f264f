use async_trait::async_trait;
use pulse_core::{Error, FetchConfig, PageFetcher, Result};
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, UPGRADE_INSECURE_REQUESTS,
};
use reqwest::redirect::Policy;
use reqwest::Client;
use tracing::{debug, warn};

/// Fetches pages over HTTP(S) with browser-like headers.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    config: FetchConfig,
}

impl HttpFetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, header_value(&config.accept)?);
        headers.insert(ACCEPT_LANGUAGE, header_value(&config.accept_language)?);
        headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));

        let client = Client::builder()
            .user_agent(header_value(&config.user_agent)?)
            .default_headers(headers)
            .timeout(config.timeout)
            .redirect(Policy::limited(config.max_redirects))
            .gzip(true)
            .deflate(true)
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| Error::Fetch(format!("Invalid header value '{}': {}", value, e)))
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        debug!(url, "fetching page");
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(url, error = %e, "request failed");
            Error::Http(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, %status, "non-success status");
            return Err(Error::Fetch(format!("{} returned status {}", url, status)));
        }

        let body = response.bytes().await?;
        debug!(url, bytes = body.len(), "page fetched");
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use std::time::Duration;

    #[tokio::test]
    async fn test_fetch_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/front")
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body("<article><h2>Hello from the front page</h2></article>")
            .expect(1)
            .create_async()
            .await;

        let fetcher = HttpFetcher::new(FetchConfig::default()).unwrap();
        let body = fetcher.fetch(&format!("{}/front", server.url())).await.unwrap();

        assert!(body.contains("Hello from the front page"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_sends_configured_headers() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_header("user-agent", "pulse-test/1.0")
            .match_header("accept-language", "en-US,en;q=0.5")
            .match_header("cache-control", "no-cache")
            .with_status(200)
            .with_body("ok")
            .create_async()
            .await;

        let config = FetchConfig::new().with_user_agent("pulse-test/1.0");
        let fetcher = HttpFetcher::new(config).unwrap();
        assert_eq!(fetcher.fetch(&format!("{}/", server.url())).await.unwrap(), "ok");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_is_fetch_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .with_body("not here")
            .create_async()
            .await;

        let fetcher = HttpFetcher::new(FetchConfig::default()).unwrap();
        let result = fetcher.fetch(&format!("{}/missing", server.url())).await;
        assert!(matches!(result, Err(Error::Fetch(_))));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_replaced() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/latin1")
            .with_status(200)
            .with_body(vec![b'c', b'a', b'f', 0xE9])
            .create_async()
            .await;

        let fetcher = HttpFetcher::new(FetchConfig::default()).unwrap();
        let body = fetcher.fetch(&format!("{}/latin1", server.url())).await.unwrap();
        assert_eq!(body, "caf\u{FFFD}");
    }

    #[tokio::test]
    async fn test_transport_error() {
        let config = FetchConfig::new().with_timeout(Duration::from_secs(2));
        let fetcher = HttpFetcher::new(config).unwrap();
        // port 9 (discard) on localhost is closed in test environments
        let result = fetcher.fetch("http://127.0.0.1:9/").await;
        assert!(matches!(result, Err(Error::Http(_))));
    }

    #[test]
    fn test_rejects_unusable_user_agent() {
        let config = FetchConfig::new().with_user_agent("bad\nagent");
        assert!(matches!(HttpFetcher::new(config), Err(Error::Fetch(_))));
    }
}
