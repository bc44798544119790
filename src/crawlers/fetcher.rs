use crate::error::ScrapeError;
use std::future::Future;

/// Retrieves the raw content of a page
///
/// One attempt per call. Any transport error, timeout or non-success status
/// is reported as [`ScrapeError::Fetch`].
pub trait Fetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, ScrapeError>> + Send;
}
