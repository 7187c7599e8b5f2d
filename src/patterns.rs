//! Compiled regex patterns and tag-name sets used during resolution.
//!
//! All patterns are compiled once at first use using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Tag Sets
// =============================================================================

/// Block-level tags whose text is scored.
pub const BLOCK_TAGS: &[&str] = &["blockquote", "div", "ol", "p", "pre", "td", "th", "ul"];

/// Heading tags.
pub const HEADER_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// Embedded object tags.
pub const EMBED_TAGS: &[&str] = &["object", "embed"];

/// `EMBED_TAGS` as a CSS selector.
pub const EMBED_SELECTOR: &str = "object, embed";

/// Elements whose contents are never readable text.
pub const JUNK_SELECTOR: &str = "script, style, noscript";

// =============================================================================
// Text Patterns
// =============================================================================

/// Runs of whitespace, collapsed to one space before measuring text.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

/// Entity references left in text, removed before measuring it.
pub static ENTITY_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&[^;]{2,6};").expect("ENTITY_REF regex"));

/// Text ending in an ellipsis, optionally bracketed: `...`, `[...]`, `…`, `[…]`.
pub static TRAILING_ELLIPSIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[?(?:\.\.\.|…)\]?\s*$").expect("TRAILING_ELLIPSIS regex"));

/// HTML comments in raw markup.
pub static HTML_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("HTML_COMMENT regex"));

// =============================================================================
// URL Patterns
// =============================================================================

/// Online document viewers, which never publish their documents in a feed.
pub static UNSUPPORTED_SOURCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://(docs|spreadsheets)\.google\.").expect("UNSUPPORTED_SOURCE regex")
});

/// Reddit comment threads.
pub static REDDIT_COMMENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://(www\.)?reddit\.com/.*/comments/").expect("REDDIT_COMMENTS regex")
});

/// Class of the submission container on reddit comment pages.
pub static REDDIT_THING_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"thing.*link").expect("REDDIT_THING_CLASS regex"));

/// MIME types advertised by `<link rel="alternate">` feed links.
pub static FEED_LINK_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(application/(rss|atom|rdf)\+xml|application/xml|text/xml)\s*(;.*)?$")
        .expect("FEED_LINK_TYPE regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_ellipsis_variants() {
        assert!(TRAILING_ELLIPSIS.is_match("and so it goes..."));
        assert!(TRAILING_ELLIPSIS.is_match("and so it goes [...]  \n"));
        assert!(TRAILING_ELLIPSIS.is_match("and so it goes […]"));
        assert!(TRAILING_ELLIPSIS.is_match("and so it goes…"));
        assert!(!TRAILING_ELLIPSIS.is_match("and so it goes."));
        assert!(!TRAILING_ELLIPSIS.is_match("an ellipsis... in the middle"));
    }

    #[test]
    fn entity_refs_are_bounded() {
        assert_eq!(ENTITY_REF.replace_all("a&nbsp;b&#8217;c", ""), "abc");
        assert_eq!(ENTITY_REF.replace_all("fish & chips; done", ""), "fish & chips; done");
    }

    #[test]
    fn unsupported_sources() {
        assert!(UNSUPPORTED_SOURCE.is_match("https://docs.google.com/document/d/1"));
        assert!(UNSUPPORTED_SOURCE.is_match("HTTP://Spreadsheets.Google.com/ccc?key=1"));
        assert!(!UNSUPPORTED_SOURCE.is_match("https://www.google.com/docs"));
    }

    #[test]
    fn feed_link_types() {
        assert!(FEED_LINK_TYPE.is_match("application/rss+xml"));
        assert!(FEED_LINK_TYPE.is_match("application/atom+xml; charset=utf-8"));
        assert!(FEED_LINK_TYPE.is_match("text/xml"));
        assert!(!FEED_LINK_TYPE.is_match("text/css"));
        assert!(!FEED_LINK_TYPE.is_match("application/json+oembed"));
    }

    #[test]
    fn reddit_comment_urls() {
        assert!(REDDIT_COMMENTS.is_match("http://www.reddit.com/r/rust/comments/abc/title/"));
        assert!(!REDDIT_COMMENTS.is_match("http://www.reddit.com/r/rust/"));
    }
}
