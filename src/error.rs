use thiserror::Error;

/// Errors produced while configuring or running a scrape
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Invalid run setup (no sites, empty keyword, unusable client settings)
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Network error, timeout or non-success HTTP status for one site
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The page could not be turned into link candidates
    #[error("failed to parse {url}: {reason}")]
    Parse { url: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ScrapeError {
    /// Whether the error only affects a single site and the run may continue
    pub fn is_site_local(&self) -> bool {
        matches!(self, ScrapeError::Fetch { .. } | ScrapeError::Parse { .. })
    }
}
