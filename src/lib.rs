pub mod config;
pub mod crawlers;
pub mod error;
pub mod parsers;
pub mod pipeline;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::ScraperConfig;
pub use error::ScrapeError;
pub use parsers::{Extractor, extract};
pub use pipeline::Runner;
pub use results::{LinkCandidate, RunStatus, ScrapeEvent, ScrapeRecord, ScrapeResult};

use crawlers::HttpFetcher;
use std::time::Duration;
use tokio::sync::mpsc;

/// Capacity of the event channel handed to the presentation layer
const EVENT_BUFFER: usize = 1024;

/// Main builder for a scrape run
pub struct Harvest {
    config: ScraperConfig,
}

impl Harvest {
    /// Create a new Harvest for the given sites with default settings
    pub fn new(sites: Vec<String>) -> Self {
        Self {
            config: ScraperConfig::new(sites),
        }
    }

    /// Create a Harvest from a complete configuration
    pub fn from_config(config: ScraperConfig) -> Self {
        Self { config }
    }

    /// Load configuration from a JSON file
    pub fn from_config_file(path: impl AsRef<std::path::Path>) -> Result<Self, ScrapeError> {
        Ok(Self::from_config(ScraperConfig::from_file(path)?))
    }

    /// Set the keyword links must relate to
    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.config.keyword = keyword.to_string();
        self
    }

    /// Set the maximum number of candidates kept per site
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.config.max_results = max_results;
        self
    }

    /// Set the timeout for each page fetch
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the polite delay after each site
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.config.delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    fn into_runner(self) -> Result<(Runner<HttpFetcher>, Vec<String>), ScrapeError> {
        self.config.validate()?;
        let fetcher = HttpFetcher::from_config(&self.config)?;
        let runner = Runner::from_config(fetcher, &self.config)?;
        Ok((runner, self.config.sites))
    }

    /// Start the run in the background and get a receiver for its events
    ///
    /// Configuration problems are returned here, before any request is made.
    /// Dropping the receiver stops the run before its next site.
    pub async fn generate(self) -> Result<mpsc::Receiver<ScrapeEvent>, ScrapeError> {
        let (runner, sites) = self.into_runner()?;
        let (tx, rx) = mpsc::channel(EVENT_BUFFER);

        tokio::spawn(async move {
            if let Err(e) = runner.run(&sites, &tx).await {
                ::log::error!("Scrape run failed: {}", e);
            }
        });

        Ok(rx)
    }

    /// Run to completion and return every record found
    pub async fn collect(self) -> Result<ScrapeResult, ScrapeError> {
        let (runner, sites) = self.into_runner()?;
        let (tx, mut rx) = mpsc::channel(EVENT_BUFFER);

        let run = async move {
            let outcome = runner.run(&sites, &tx).await;
            drop(tx);
            outcome
        };
        let gather = async move {
            let mut records = Vec::new();
            while let Some(event) = rx.recv().await {
                if let ScrapeEvent::Result(record) = event {
                    records.push(record);
                }
            }
            records
        };

        let (outcome, records) = tokio::join!(run, gather);
        let total_found = outcome?;
        debug_assert_eq!(total_found, records.len());

        Ok(ScrapeResult { records })
    }
}
