pub mod html;
pub mod keyword;
pub mod text;

#[cfg(test)]
mod tests;

use crate::error::ScrapeError;
use crate::results::LinkCandidate;
use keyword::KeywordMatcher;

/// Default cap on candidates kept per page
pub const DEFAULT_MAX_RESULTS: usize = 200;

/// Extracts keyword-related links from fetched pages
#[derive(Debug, Clone)]
pub struct Extractor {
    matcher: KeywordMatcher,
    max_results: usize,
}

impl Extractor {
    /// Creates an extractor for the given keyword and per-page cap
    pub fn new(keyword: &str, max_results: usize) -> Result<Self, ScrapeError> {
        Ok(Self {
            matcher: KeywordMatcher::new(keyword)?,
            max_results,
        })
    }

    pub fn keyword(&self) -> &str {
        self.matcher.keyword()
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Extract candidates from `html`, resolving relative links against `base_url`
    pub fn extract(&self, html: &str, base_url: &str) -> Result<Vec<LinkCandidate>, ScrapeError> {
        html::extract_links(html, base_url, &self.matcher, self.max_results)
    }
}

/// One-shot extraction without keeping an [`Extractor`] around
pub fn extract(
    html: &str,
    base_url: &str,
    keyword: &str,
    max_results: usize,
) -> Result<Vec<LinkCandidate>, ScrapeError> {
    Extractor::new(keyword, max_results)?.extract(html, base_url)
}
