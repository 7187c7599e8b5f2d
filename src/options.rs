//! Configuration options for URL resolution.
//!
//! The `Options` struct is passed explicitly to the resolver and to the
//! generic extractor; nothing in the crate reads ambient configuration.

use std::time::Duration;

/// User agent sent by [`HttpFetcher`](crate::fetch::HttpFetcher) by default.
pub const DEFAULT_USER_AGENT: &str = concat!("rs-readable/", env!("CARGO_PKG_VERSION"));

/// Configuration options for resolution.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_readable::Options;
///
/// let options = Options {
///     debug: true,
///     min_feed_text_len: 1024,
///     ..Options::default()
/// };
/// assert_eq!(options.max_scored_nodes, 15);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Record named score contributions and log the top scored nodes.
    ///
    /// Diagnostics only; results are identical either way.
    ///
    /// Default: `false`
    pub debug: bool,

    /// Number of highest-scored nodes considered when choosing the content.
    ///
    /// Default: `15`
    pub max_scored_nodes: usize,

    /// Minimum heading text length (characters) for title-echo matching.
    ///
    /// Shorter headings are ignored to avoid false positives.
    ///
    /// Default: `10`
    pub min_title_header_len: usize,

    /// Minimum plain-text length (characters) of accepted feed content.
    ///
    /// Feeds publishing only excerpts fall below this and are rejected.
    ///
    /// Default: `512`
    pub min_feed_text_len: usize,

    /// User agent for the default HTTP fetcher.
    ///
    /// Default: [`DEFAULT_USER_AGENT`]
    pub user_agent: String,

    /// Request timeout for the default HTTP fetcher, in seconds.
    ///
    /// Default: `30`
    pub timeout_secs: u64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            debug: false,
            max_scored_nodes: 15,
            min_title_header_len: 10,
            min_feed_text_len: 512,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
        }
    }
}

impl Options {
    /// Request timeout as a `Duration`.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
