//! Feed reconciliation.
//!
//! Resolves a page URL to the content of its entry in the site's own feed.
//! Each step that can rule the feed out fails with a [`FeedError`], which
//! the resolver treats as a cue to fall back to generic extraction; fetch
//! and parse failures pass through as ordinary [`Error`]s.

use tracing::{debug, info};

use crate::dom;
use crate::error::{Error, FeedError, Result};
use crate::fetch::{Fetched, Fetcher};
use crate::options::Options;
use crate::patterns::{HTML_COMMENT, TRAILING_ELLIPSIS};
use crate::result::Fragment;
use crate::url_utils::{self, trim_query, urls_match};

use super::{FeedEntry, FeedLinkDetector, FeedParser, HTML_MEDIA_TYPE};

/// Elements stripped from feed content before its text is measured.
const FEED_JUNK_SELECTOR: &str = "script, noscript";

/// Resolves URLs through the feeds their pages advertise.
pub struct FeedReconciler<'a> {
    fetcher: &'a dyn Fetcher,
    detector: &'a dyn FeedLinkDetector,
    parser: &'a dyn FeedParser,
    min_text_len: usize,
}

impl<'a> FeedReconciler<'a> {
    #[must_use]
    pub fn new(
        fetcher: &'a dyn Fetcher,
        detector: &'a dyn FeedLinkDetector,
        parser: &'a dyn FeedParser,
        options: &Options,
    ) -> Self {
        Self {
            fetcher,
            detector,
            parser,
            min_text_len: options.min_feed_text_len,
        }
    }

    /// Finds and validates the feed content for `url`.
    ///
    /// `page` is the already-fetched page, if the caller has it; otherwise
    /// the page is fetched here.
    pub fn reconcile(&self, url: &str, page: Option<&Fetched>) -> Result<Fragment> {
        if url_utils::is_unsupported_source(url) {
            return Err(FeedError::UnsupportedSource.into());
        }

        let fetched;
        let page = match page {
            Some(page) => page,
            None => {
                fetched = self.fetcher.fetch(url)?;
                &fetched
            }
        };

        let feed_link = self
            .detector
            .detect_feed_link(&page.body)
            .ok_or(FeedError::NoFeedLink)?;
        let feed_url = url_utils::resolve_url(url, &feed_link)?;
        debug!(%url, %feed_url, "found feed link");

        let feed_source = self.fetcher.fetch(&feed_url)?;
        let feed = self.parser.parse(&feed_source.body)?;

        let entry = find_entry(&feed.entries, url, &page.final_url)
            .ok_or(FeedError::NoMatchingEntry)?;
        let content = entry_content(entry)
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| FeedError::NoContent("no content found".to_string()))?;

        let fragment = validate_content(content, self.min_text_len)?;
        info!(%url, %feed_url, "resolved from feed");
        Ok(fragment)
    }
}

/// Finds the entry for a page.
///
/// Tries, in order: the request URL, the final URL, then both again with
/// queries stripped. An entry matches a form through its link or its
/// origin link. The first match wins.
#[must_use]
pub fn find_entry<'f>(entries: &'f [FeedEntry], url: &str, final_url: &str) -> Option<&'f FeedEntry> {
    let forms = [
        (url, false),
        (final_url, false),
        (trim_query(url), true),
        (trim_query(final_url), true),
    ];

    forms.iter().enumerate().find_map(|(tier, (form, trim))| {
        let found = entries.iter().find(|entry| {
            urls_match(&entry.link, form, *trim)
                || entry
                    .origin_link
                    .as_deref()
                    .is_some_and(|origin| urls_match(origin, form, *trim))
        });
        if found.is_some() {
            debug!(tier = tier + 1, form = %form, "matched feed entry");
        }
        found
    })
}

/// Picks the entry's best body.
///
/// A single content representation is used whatever its type; among
/// several, the HTML one. Otherwise the detailed summary, then the plain
/// summary.
#[must_use]
pub fn entry_content(entry: &FeedEntry) -> Option<&str> {
    let content = match entry.content.as_slice() {
        [] => None,
        [only] => Some(only.value.as_str()),
        many => many
            .iter()
            .find(|c| c.media_type.eq_ignore_ascii_case(HTML_MEDIA_TYPE))
            .map(|c| c.value.as_str()),
    };

    content
        .or_else(|| entry.summary_detail.as_ref().map(|s| s.value.as_str()))
        .or(entry.summary.as_deref())
}

/// Accepts feed markup only if it reads as a complete article.
///
/// Comments, scripts and `noscript` blocks are dropped first. The remaining
/// text must not end in an ellipsis and must be at least `min_text_len`
/// characters long.
pub fn validate_content(markup: &str, min_text_len: usize) -> Result<Fragment> {
    let markup = HTML_COMMENT.replace_all(markup, "");
    let doc = dom::parse(&markup);
    dom::remove(&doc.select(FEED_JUNK_SELECTOR));

    let text = dom::text_content(&doc.select("body"));
    if TRAILING_ELLIPSIS.is_match(&text) {
        return Err(FeedError::NoContent("trailing ellipsis".to_string()).into());
    }
    let text_len = text.chars().count();
    if text_len < min_text_len {
        return Err(FeedError::NoContent(format!("text too short ({text_len})")).into());
    }

    Fragment::body_of(doc)
        .ok_or_else(|| Error::from(FeedError::NoContent("no content found".to_string())))
}
