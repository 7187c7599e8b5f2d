//! # rs-readable
//!
//! Resolves the URL of an article or post to the smallest HTML fragment
//! holding its readable body, without navigation, ads, comments or
//! related-link clutter.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_readable::{extract_from_html, Options};
//!
//! let body = "A paragraph with enough words to count as content. ".repeat(6);
//! let html = format!(r#"<html><head><title>My Article</title></head>
//! <body><div class="nav">Home</div><div>{body}</div></body></html>"#);
//!
//! let extracted = extract_from_html("http://example.com/a", &html, &Options::default());
//! assert!(extracted.html().contains("enough words"));
//! assert!(!extracted.html().contains("Home"));
//! ```
//!
//! ## Strategies
//!
//! - **Feed reconciliation**: find the feed the page advertises, the entry
//!   for this URL, and accept its content if it is a full article
//! - **Generic extraction**: score text blocks, images and embeds, and keep
//!   the best one
//!
//! [`Resolver`] tries the feed first and falls back to generic extraction
//! when the feed does not qualify. The outcome records which one was used.

mod error;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Block, image and embed scoring.
pub mod scoring;

/// Best-node selection and tidying.
pub mod selector;

/// Generic extraction over page markup.
pub mod extractor;

/// Feed discovery, parsing and reconciliation.
pub mod feed;

/// Page and feed retrieval.
pub mod fetch;

/// Character encoding detection and transcoding.
pub mod encoding;

/// URL utilities for matching and resolution.
pub mod url_utils;

/// Feed-first resolution with fallback to generic extraction.
pub mod resolve;

// Public API - re-exports
pub use error::{Error, FeedError, Result};
pub use extractor::extract_from_html;
pub use fetch::{Fetched, Fetcher, HttpFetcher};
pub use options::{Options, DEFAULT_USER_AGENT};
pub use resolve::Resolver;
pub use result::{Extracted, Fragment, OutcomeSummary, Provenance, ResolutionOutcome};

/// Fetches `url` over HTTP and resolves its readable content with default
/// options.
///
/// # Example
///
/// ```rust,no_run
/// let outcome = rs_readable::resolve("http://example.com/2010/01/post.html")?;
/// println!("{} ({})", outcome.html(), outcome.provenance);
/// # Ok::<(), rs_readable::Error>(())
/// ```
pub fn resolve(url: &str) -> Result<ResolutionOutcome> {
    Resolver::from_options(Options::default())?.resolve(url)
}
