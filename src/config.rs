use crate::error::ScrapeError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Job boards scanned when the caller supplies no sites of its own
pub const DEFAULT_SITES: &[&str] = &[
    "https://remoteok.com/remote-php-jobs",
    "https://weworkremotely.com/categories/remote-programming-jobs",
    "https://www.indeed.com/jobs?q=php&l=",
    "https://wuzzuf.net/search/jobs/?a=hpb&q=php",
    "https://wuzzuf.net/search/jobs/?a=spbg&q=php",
    "https://forasna.com/jobs?q=php",
];

/// Keyword searched for in anchors and their containers
pub const DEFAULT_KEYWORD: &str = "php";

/// Configuration for a scrape run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Site URLs to scan, in order
    #[serde(default = "default_sites")]
    pub sites: Vec<String>,

    /// Case-insensitive keyword a link must relate to
    #[serde(default = "default_keyword")]
    pub keyword: String,

    /// Maximum number of candidates kept per site
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Timeout for a single page fetch, in milliseconds
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Polite delay after each site, in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            sites: default_sites(),
            keyword: default_keyword(),
            max_results: default_max_results(),
            request_timeout_ms: default_request_timeout_ms(),
            delay_ms: default_delay_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl ScraperConfig {
    /// Create a configuration for the given sites with default values
    pub fn new(sites: Vec<String>) -> Self {
        Self {
            sites,
            ..Self::default()
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScrapeError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ScrapeError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Checks the settings a run cannot start without
    pub fn validate(&self) -> Result<(), ScrapeError> {
        if self.sites.is_empty() {
            return Err(ScrapeError::Configuration(
                "at least one site URL is required".to_string(),
            ));
        }
        if self.keyword.trim().is_empty() {
            return Err(ScrapeError::Configuration(
                "keyword must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_sites() -> Vec<String> {
    DEFAULT_SITES.iter().map(|s| s.to_string()).collect()
}

fn default_keyword() -> String {
    DEFAULT_KEYWORD.to_string()
}

fn default_max_results() -> usize {
    200
}

fn default_request_timeout_ms() -> u64 {
    12_000
}

fn default_delay_ms() -> u64 {
    1_500
}

fn default_user_agent() -> String {
    concat!(
        "Mozilla/5.0 (compatible; php-job-links/",
        env!("CARGO_PKG_VERSION"),
        ")"
    )
    .to_string()
}
