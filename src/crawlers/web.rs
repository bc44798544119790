use crate::config::ScraperConfig;
use crate::crawlers::Fetcher;
use crate::error::ScrapeError;
use reqwest::Client;
use std::time::Duration;

/// Fetches pages over HTTP(S) with a fixed User-Agent and per-request timeout
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| ScrapeError::Configuration(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    pub fn from_config(config: &ScraperConfig) -> Result<Self, ScrapeError> {
        Self::new(&config.user_agent, config.request_timeout())
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let fetch_error = |e: reqwest::Error| ScrapeError::Fetch {
            url: url.to_string(),
            source: Box::new(e),
        };

        let start = std::time::Instant::now();
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(fetch_error)?;

        let status = response.status();
        let body = response.text().await.map_err(fetch_error)?;

        ::log::debug!(
            "Fetched {} ({}, {} bytes) in {:.2} seconds",
            url,
            status,
            body.len(),
            start.elapsed().as_secs_f64()
        );

        Ok(body)
    }
}
