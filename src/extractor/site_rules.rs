//! Layout-specific extraction for sites whose content block is known.

use crate::dom::{self, Document, NodeId, Selection};
use crate::patterns::{REDDIT_COMMENTS, REDDIT_THING_CLASS};

/// Finds the content root for pages with a known layout.
#[must_use]
pub fn find_site_content(url: &str, doc: &Document) -> Option<NodeId> {
    if REDDIT_COMMENTS.is_match(url) {
        return reddit_submission(doc);
    }
    None
}

/// The self-text of a reddit submission: the first `.usertext-body` inside
/// the submission container (class matching `thing.*link`).
fn reddit_submission(doc: &Document) -> Option<NodeId> {
    doc.select("[class]").nodes().iter().find_map(|node| {
        let thing = Selection::from(*node);
        let class = dom::get_attribute(&thing, "class")?;
        if !REDDIT_THING_CLASS.is_match(&class) {
            return None;
        }
        thing.select(".usertext-body").nodes().first().map(|body| body.id)
    })
}
