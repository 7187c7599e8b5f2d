//! Error types for rs-readable.
//!
//! Two layers: [`FeedError`] holds the recoverable reasons a feed could not
//! supply the content, and [`Error`] is everything a caller can see.

/// Why the feed path could not produce content for a URL.
///
/// Every variant is recoverable: the resolver answers each of them by
/// falling back to generic extraction over the page itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedError {
    /// The URL belongs to a host that never publishes a feed of its documents.
    #[error("skipping unsupported source")]
    UnsupportedSource,

    /// The page does not advertise a feed.
    #[error("no feed link")]
    NoFeedLink,

    /// The feed has no entry for this URL.
    #[error("found no matching item")]
    NoMatchingEntry,

    /// The matching entry has no usable content, or only an excerpt.
    #[error("{0}")]
    NoContent(String),
}

impl FeedError {
    /// Short variant name, used in provenance notes.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedSource => "UnsupportedSource",
            Self::NoFeedLink => "NoFeedLink",
            Self::NoMatchingEntry => "NoMatchingEntry",
            Self::NoContent(_) => "NoContent",
        }
    }
}

/// Error type for resolution operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request could not be completed (DNS, TLS, timeout, body read).
    #[error("fetching {url} failed: {message}")]
    Fetch { url: String, message: String },

    /// The server answered with a non-success status.
    #[error("fetching {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// A URL could not be parsed or joined.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The feed body was neither RSS nor Atom.
    #[error("feed parsing failed: {0}")]
    FeedParse(String),

    /// The feed exists but does not qualify; see [`FeedError`].
    #[error(transparent)]
    Feed(#[from] FeedError),
}

impl Error {
    /// True for the failures the resolver answers with generic extraction.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Feed(_))
    }
}

/// Result type alias for resolution operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_feed_errors_are_recoverable() {
        assert!(Error::from(FeedError::NoFeedLink).is_recoverable());
        assert!(Error::from(FeedError::NoContent("x".into())).is_recoverable());
        assert!(!Error::HttpStatus { url: "http://x/".into(), status: 500 }.is_recoverable());
        assert!(!Error::FeedParse("bad".into()).is_recoverable());
    }

    #[test]
    fn feed_error_display_is_transparent() {
        let err = Error::from(FeedError::NoContent("trailing ellipsis".into()));
        assert_eq!(err.to_string(), "trailing ellipsis");
        assert_eq!(FeedError::NoMatchingEntry.kind(), "NoMatchingEntry");
    }
}
