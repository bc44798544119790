use crate::config::ScraperConfig;
use crate::crawlers::Fetcher;
use crate::error::ScrapeError;
use crate::parsers::Extractor;
use crate::results::{LinkCandidate, ScrapeEvent, ScrapeRecord};
use crate::utils::normalize_site_url;
use std::time::Duration;
use tokio::sync::mpsc;

/// Sequential fetch → extract pipeline over a list of sites
///
/// One site is in flight at a time. Results and progress are reported as
/// [`ScrapeEvent`]s on the supplied channel.
pub struct Runner<F> {
    fetcher: F,
    extractor: Extractor,
    delay: Duration,
}

impl<F: Fetcher> Runner<F> {
    pub fn new(fetcher: F, extractor: Extractor, delay: Duration) -> Self {
        Self {
            fetcher,
            extractor,
            delay,
        }
    }

    /// Builds a runner using the keyword, result cap and delay from `config`
    pub fn from_config(fetcher: F, config: &ScraperConfig) -> Result<Self, ScrapeError> {
        let extractor = Extractor::new(&config.keyword, config.max_results)?;
        Ok(Self::new(fetcher, extractor, config.delay()))
    }

    /// Processes every site in order and returns the number of links emitted
    ///
    /// A site that cannot be fetched or parsed contributes no links and the
    /// run moves on. Only an empty site list fails the run, before any
    /// request is made. If the receiving side of `events` is dropped the run
    /// stops before the next site.
    pub async fn run(
        &self,
        sites: &[String],
        events: &mpsc::Sender<ScrapeEvent>,
    ) -> Result<usize, ScrapeError> {
        if sites.is_empty() {
            return Err(ScrapeError::Configuration(
                "at least one site URL is required".to_string(),
            ));
        }

        let total = sites.len();
        let mut total_found = 0;
        ::log::info!("Scraping {} sites for '{}'", total, self.extractor.keyword());

        if !emit(events, ScrapeEvent::Started { total }).await {
            return Ok(total_found);
        }

        for (idx, raw_site) in sites.iter().enumerate() {
            let site = normalize_site_url(raw_site);
            let progress = ScrapeEvent::Progress {
                index: idx + 1,
                total,
                site: site.clone(),
            };
            if !emit(events, progress).await {
                return Ok(total_found);
            }

            match self.scrape_site(&site).await {
                Ok(links) => {
                    for link in links {
                        let record = ScrapeRecord::new(link, &site);
                        if !emit(events, ScrapeEvent::Result(record)).await {
                            return Ok(total_found);
                        }
                        total_found += 1;
                    }
                }
                Err(e) => {
                    ::log::warn!("Skipping {}: {}", site, e);
                    let failed = ScrapeEvent::SiteFailed {
                        site: site.clone(),
                        error: e.to_string(),
                    };
                    if !emit(events, failed).await {
                        return Ok(total_found);
                    }
                }
            }

            if !self.delay.is_zero() {
                ::log::trace!("Waiting {:?} before the next site", self.delay);
                tokio::time::sleep(self.delay).await;
            }
        }

        ::log::info!("Done - found {} items across {} sites", total_found, total);
        emit(events, ScrapeEvent::Done { total_found }).await;

        Ok(total_found)
    }

    /// Fetches one site and extracts its candidates
    pub async fn scrape_site(&self, site: &str) -> Result<Vec<LinkCandidate>, ScrapeError> {
        ::log::info!("Scraping {}", site);
        let html = self.fetcher.fetch(site).await?;
        let links = self.extractor.extract(&html, site)?;
        ::log::info!("Found {} candidate links on {}", links.len(), site);
        Ok(links)
    }
}

/// Sends an event, returning false once the receiver has gone away
async fn emit(events: &mpsc::Sender<ScrapeEvent>, event: ScrapeEvent) -> bool {
    match events.send(event).await {
        Ok(()) => true,
        Err(_) => {
            ::log::info!("Event receiver dropped, stopping run");
            false
        }
    }
}
