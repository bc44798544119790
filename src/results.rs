use serde::{Deserialize, Serialize};
use std::fmt;

/// A link judged relevant to the keyword
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkCandidate {
    /// Display text of the anchor, or its raw href when the text is empty
    pub title: String,

    /// Absolute URL resolved against the page URL
    pub url: String,
}

impl LinkCandidate {
    pub fn new(title: String, url: String) -> Self {
        Self { title, url }
    }
}

/// A candidate tagged with the site it was found on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeRecord {
    pub title: String,
    pub url: String,
    /// Normalized site URL the link was extracted from
    pub source_site: String,
}

impl ScrapeRecord {
    pub fn new(candidate: LinkCandidate, source_site: &str) -> Self {
        Self {
            title: candidate.title,
            url: candidate.url,
            source_site: source_site.to_string(),
        }
    }
}

/// All records of one run, in site-processing order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeResult {
    pub records: Vec<ScrapeRecord>,
}

impl ScrapeResult {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records found on the given site
    pub fn from_site<'a>(&'a self, site: &'a str) -> impl Iterator<Item = &'a ScrapeRecord> {
        self.records.iter().filter(move |r| r.source_site == site)
    }
}

/// Events emitted by a run, in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScrapeEvent {
    /// The run has begun
    Started { total: usize },

    /// About to fetch a site (index is 1-based)
    Progress {
        index: usize,
        total: usize,
        site: String,
    },

    /// A link was found
    Result(ScrapeRecord),

    /// A site contributed no links because it could not be fetched or parsed
    SiteFailed { site: String, error: String },

    /// Every site has been processed
    Done { total_found: usize },
}

impl ScrapeEvent {
    /// Status line a presentation layer shows for this event, if any
    pub fn status(&self) -> Option<RunStatus> {
        match self {
            ScrapeEvent::Started { .. } => Some(RunStatus::Scraping),
            ScrapeEvent::Progress { index, total, site } => Some(RunStatus::Progress {
                index: *index,
                total: *total,
                site: site.clone(),
            }),
            ScrapeEvent::Done { total_found } => Some(RunStatus::Done {
                total_found: *total_found,
            }),
            ScrapeEvent::Result(_) | ScrapeEvent::SiteFailed { .. } => None,
        }
    }
}

/// Human readable run state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    Idle,
    Scraping,
    Progress {
        index: usize,
        total: usize,
        site: String,
    },
    Done {
        total_found: usize,
    },
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunStatus::Idle => write!(f, "Idle"),
            RunStatus::Scraping => write!(f, "Scraping..."),
            RunStatus::Progress { index, total, site } => {
                write!(f, "Scraping ({}/{}) {} ...", index, total, site)
            }
            RunStatus::Done { total_found } => write!(f, "Done — found {} items", total_found),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_strings() {
        assert_eq!(RunStatus::Idle.to_string(), "Idle");
        assert_eq!(RunStatus::Scraping.to_string(), "Scraping...");
        assert_eq!(
            RunStatus::Progress {
                index: 2,
                total: 5,
                site: "https://example.com/php".to_string()
            }
            .to_string(),
            "Scraping (2/5) https://example.com/php ..."
        );
        assert_eq!(
            RunStatus::Done { total_found: 7 }.to_string(),
            "Done — found 7 items"
        );
    }

    #[test]
    fn test_event_serializes_with_tag() {
        let event = ScrapeEvent::Result(ScrapeRecord::new(
            LinkCandidate::new("PHP Dev".to_string(), "https://a.test/1".to_string()),
            "https://a.test",
        ));
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "result");
        assert_eq!(json["title"], "PHP Dev");
        assert_eq!(json["source_site"], "https://a.test");
    }

    #[test]
    fn test_from_site_filters_records() {
        let result = ScrapeResult {
            records: vec![
                ScrapeRecord::new(
                    LinkCandidate::new("a".to_string(), "https://a.test/1".to_string()),
                    "https://a.test",
                ),
                ScrapeRecord::new(
                    LinkCandidate::new("b".to_string(), "https://b.test/1".to_string()),
                    "https://b.test",
                ),
            ],
        };
        let titles: Vec<_> = result
            .from_site("https://b.test")
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(titles, vec!["b"]);
        assert_eq!(result.len(), 2);
    }
}
