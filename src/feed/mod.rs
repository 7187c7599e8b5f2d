//! Feed-based content resolution.
//!
//! Given a page, find the feed it advertises, find the entry that belongs to
//! the page's URL, and accept that entry's content only if it looks like a
//! full article rather than an excerpt.
//!
//! - [`discovery`] - finding the feed link in page markup
//! - [`parser`] - RSS and Atom parsing into [`FeedEntry`] values
//! - [`reconciler`] - entry matching and content validation

pub mod discovery;
pub mod parser;
pub mod reconciler;

pub use discovery::LinkTagDetector;
pub use parser::SyndicationParser;
pub use reconciler::FeedReconciler;

use crate::error::Result;

/// MIME type preferred when an entry carries several content representations.
pub const HTML_MEDIA_TYPE: &str = "text/html";

/// One representation of an entry's body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryContent {
    /// MIME type, e.g. `text/html` or `text/plain`.
    pub media_type: String,
    /// The markup or text itself.
    pub value: String,
}

impl EntryContent {
    #[must_use]
    pub fn new(media_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            media_type: media_type.into(),
            value: value.into(),
        }
    }

    /// An HTML representation.
    #[must_use]
    pub fn html(value: impl Into<String>) -> Self {
        Self::new(HTML_MEDIA_TYPE, value)
    }
}

/// One item of a feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedEntry {
    /// The entry's link.
    pub link: String,

    /// Original article URL when the feed is proxied (e.g. `feedburner:origLink`).
    pub origin_link: Option<String>,

    /// Full-content representations, in feed order.
    pub content: Vec<EntryContent>,

    /// Summary with its media type.
    pub summary_detail: Option<EntryContent>,

    /// Summary text.
    pub summary: Option<String>,
}

/// A parsed feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feed {
    pub entries: Vec<FeedEntry>,
}

/// Finds the feed a page advertises.
pub trait FeedLinkDetector {
    /// The feed URL found in `html`, possibly relative, or `None`.
    fn detect_feed_link(&self, html: &str) -> Option<String>;
}

/// Parses a feed body.
pub trait FeedParser {
    /// Parses `body`; malformed input is an error, not an empty feed.
    fn parse(&self, body: &str) -> Result<Feed>;
}
