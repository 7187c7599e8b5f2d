//! Title-echo trimming.
//!
//! Pages often repeat the article title inside the content block, with a
//! masthead, byline or breadcrumbs above it. The first heading that echoes
//! the page title marks where the content proper begins.

use crate::dom::{self, NodeRef, Selection};
use crate::patterns::HEADER_TAGS;

/// Finds the first heading below `root` whose text overlaps `title`.
///
/// A heading matches when its lowercased text contains the title or is
/// contained in it. Headings shorter than `min_len` characters never match.
/// An empty title is contained in every heading, so on an untitled page the
/// first long enough heading matches.
#[must_use]
pub fn find_title_header<'a>(root: &NodeRef<'a>, title: &str, min_len: usize) -> Option<NodeRef<'a>> {
    let title = title.to_lowercase();

    root.descendants().into_iter().find(|node| {
        if !dom::node_is_one_of(node, HEADER_TAGS) {
            return false;
        }
        let header = dom::text_content(&Selection::from(*node)).to_lowercase();
        if header.chars().count() < min_len {
            return false;
        }
        title.contains(&header) || header.contains(&title)
    })
}

/// Removes `header` and every element before it inside `root`.
///
/// Ancestors of the header are kept, so only the preceding siblings of the
/// header and of each ancestor below `root` go. Text nodes between them are
/// left in place.
pub fn strip_before(header: &NodeRef, root: &NodeRef) {
    let mut doomed = Vec::new();
    let mut current = *header;

    loop {
        let mut sibling = dom::previous_element_sibling(&current);
        while let Some(node) = sibling {
            doomed.push(node);
            sibling = dom::previous_element_sibling(&node);
        }
        match current.parent() {
            Some(parent) if parent.id != root.id => current = parent,
            _ => break,
        }
    }

    // Collected first, detached after: removal would break the sibling walk.
    for node in doomed {
        dom::remove(&Selection::from(node));
    }
    dom::remove(&Selection::from(*header));
}
