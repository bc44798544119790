use crate::error::ScrapeError;
use crate::parsers::keyword::KeywordMatcher;
use crate::parsers::text::element_text;
use crate::results::LinkCandidate;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;
use url::Url;

static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("static selector is valid"));

/// Elements whose text spans the whole page rather than a job card or row
const DOCUMENT_CONTAINERS: &[&str] = &["html", "body"];

/// Why an anchor was accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    /// Keyword found in the anchor text or href
    Anchor,
    /// Keyword found in the anchor's immediate parent element
    Container,
}

/// Finds keyword-related links in an HTML page
///
/// An anchor is a candidate when its text or href contains the keyword, or,
/// failing that, when the text of its immediate parent element does. Results
/// are unique on `(url, title)`, keep first-seen order and stop at
/// `max_results`.
pub fn extract_links(
    html: &str,
    base_url: &str,
    matcher: &KeywordMatcher,
    max_results: usize,
) -> Result<Vec<LinkCandidate>, ScrapeError> {
    let base = Url::parse(base_url).map_err(|e| ScrapeError::Parse {
        url: base_url.to_string(),
        reason: format!("invalid base URL: {}", e),
    })?;

    let doc = Html::parse_document(html);
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for anchor in doc.select(&LINK_SELECTOR) {
        if links.len() >= max_results {
            break;
        }

        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if href.is_empty() {
            continue;
        }

        let text = element_text(anchor);
        let Some(rule) = match_anchor(anchor, &text, href, matcher) else {
            continue;
        };

        let Some(url) = resolve_href(&base, href) else {
            continue;
        };

        let title = if text.is_empty() { href } else { text.as_str() };
        let title = html_escape::decode_html_entities(title).into_owned();

        ::log::trace!("Matched {:?} via {:?}: {}", title, rule, url);
        let candidate = LinkCandidate::new(title, url);
        if seen.insert(candidate.clone()) {
            links.push(candidate);
        }
    }

    ::log::debug!(
        "Extracted {} '{}' links from {}",
        links.len(),
        matcher.keyword(),
        base_url
    );

    Ok(links)
}

/// Absolute hrefs are kept verbatim; relative ones are joined onto `base`
fn resolve_href(base: &Url, href: &str) -> Option<String> {
    let href_trimmed = href.trim();
    if Url::parse(href_trimmed).is_ok() {
        return Some(href_trimmed.to_string());
    }

    match base.join(href) {
        Ok(url) => Some(url.to_string()),
        Err(e) => {
            ::log::debug!("Skipping unresolvable href {:?} on {}: {}", href, base, e);
            None
        }
    }
}

/// Applies the anchor rule, then the container rule
///
/// The container rule skips `<html>` and `<body>` parents, even when the page
/// writes `<body>` explicitly. Their text is the whole page, so a single
/// keyword anywhere would pull in every loose link. This gives up the rare
/// link whose only context is body-level text, e.g.
/// `<body>Remote PHP work: <a href="/apply">Apply</a></body>`.
fn match_anchor(
    anchor: ElementRef<'_>,
    text: &str,
    href: &str,
    matcher: &KeywordMatcher,
) -> Option<MatchRule> {
    if matcher.is_match(text) || matcher.is_match(href) {
        return Some(MatchRule::Anchor);
    }

    let container = anchor.parent().and_then(ElementRef::wrap)?;
    if DOCUMENT_CONTAINERS.contains(&container.value().name()) {
        return None;
    }

    if matcher.is_match(&element_text(container)) {
        Some(MatchRule::Container)
    } else {
        None
    }
}
