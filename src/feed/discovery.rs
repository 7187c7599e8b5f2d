//! Feed discovery from page markup.

use crate::dom::{self, Selection};
use crate::patterns::FEED_LINK_TYPE;

use super::FeedLinkDetector;

/// Finds `<link rel="alternate" type="application/rss+xml" href="...">`.
///
/// The first such link in document order wins. Links with an empty `href`
/// are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkTagDetector;

impl FeedLinkDetector for LinkTagDetector {
    fn detect_feed_link(&self, html: &str) -> Option<String> {
        let doc = dom::parse(html);
        let links = doc.select("link[href]");

        links.nodes().iter().find_map(|node| {
            let link = Selection::from(*node);
            let rel = dom::get_attribute(&link, "rel")?;
            if !rel.split_ascii_whitespace().any(|r| r.eq_ignore_ascii_case("alternate")) {
                return None;
            }
            let media_type = dom::get_attribute(&link, "type")?;
            if !FEED_LINK_TYPE.is_match(&media_type) {
                return None;
            }
            let href = dom::get_attribute(&link, "href")?;
            let href = href.trim();
            (!href.is_empty()).then(|| href.to_string())
        })
    }
}
