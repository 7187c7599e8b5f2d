//! URL Utility Functions
//!
//! Query stripping and comparison for feed-entry matching, plus resolution
//! of relative feed links.

use url::Url;

use crate::error::{Error, Result};
use crate::patterns::UNSUPPORTED_SOURCE;

/// Everything before the first `?`.
///
/// # Examples
///
/// ```
/// use rs_readable::url_utils::trim_query;
///
/// assert_eq!(trim_query("http://x/a?b=1"), "http://x/a");
/// assert_eq!(trim_query("http://x/a"), "http://x/a");
/// ```
#[must_use]
pub fn trim_query(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}

/// Compares a feed URL with a page URL.
///
/// With `trim` set, the query is removed from both sides first. Otherwise
/// the strings must be identical.
#[must_use]
pub fn urls_match(feed_url: &str, page_url: &str, trim: bool) -> bool {
    if trim {
        trim_query(feed_url) == trim_query(page_url)
    } else {
        feed_url == page_url
    }
}

/// Resolves `href` against `base`, leaving absolute URLs unchanged.
pub fn resolve_url(base: &str, href: &str) -> Result<String> {
    let href = href.trim();
    let base = Url::parse(base).map_err(|e| Error::InvalidUrl(format!("{base}: {e}")))?;
    base.join(href)
        .map(String::from)
        .map_err(|e| Error::InvalidUrl(format!("{href}: {e}")))
}

/// True for hosts whose documents are never published in a feed.
#[must_use]
pub fn is_unsupported_source(url: &str) -> bool {
    UNSUPPORTED_SOURCE.is_match(url)
}
