use crate::error::ScrapeError;
use std::fs;
use std::path::Path;
use url::{ParseError, Url};

/// Scheme assumed for site URLs entered without one
pub const DEFAULT_SCHEME: &str = "https";

/// Prepends `https://` to a site URL that has no scheme
pub fn normalize_site_url(site: &str) -> String {
    let site = site.trim();
    match Url::parse(site) {
        Err(ParseError::RelativeUrlWithoutBase) => format!("{}://{}", DEFAULT_SCHEME, site),
        _ => site.to_string(),
    }
}

/// Splits editable site-list text into URLs: one per line, blank lines dropped
pub fn parse_site_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}

/// Reads a site list file
pub fn load_site_list(path: impl AsRef<Path>) -> Result<Vec<String>, ScrapeError> {
    let contents = fs::read_to_string(path)?;
    Ok(parse_site_list(&contents))
}
