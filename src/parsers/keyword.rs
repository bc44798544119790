use crate::error::ScrapeError;
use regex::{Regex, RegexBuilder};

/// Case-insensitive substring matcher for a fixed keyword
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    keyword: String,
    pattern: Regex,
}

impl KeywordMatcher {
    /// Builds a matcher; the keyword is taken literally, not as a pattern
    pub fn new(keyword: &str) -> Result<Self, ScrapeError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(ScrapeError::Configuration(
                "keyword must not be empty".to_string(),
            ));
        }

        let pattern = RegexBuilder::new(&regex::escape(keyword))
            .case_insensitive(true)
            .build()
            .map_err(|e| ScrapeError::Configuration(format!("invalid keyword: {}", e)))?;

        Ok(Self {
            keyword: keyword.to_string(),
            pattern,
        })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}
