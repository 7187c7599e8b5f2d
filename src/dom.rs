//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate giving the scorer, selector and feed
//! reconciler one vocabulary for the tree operations they share.

pub use dom_query::{Document, NodeId, NodeRef, Selection};

pub use tendril::StrTendril;

// === Parsing ===

/// Parses a page or a feed fragment; fragments get an implied `<html><body>`.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Tags ===

/// Lowercase tag of the first node in `sel`.
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes().first().and_then(node_tag)
}

/// Lowercase tag name of a single node, `None` for text and comment nodes.
#[must_use]
pub fn node_tag(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// True when the node is an element whose tag is in `tags`.
#[must_use]
pub fn node_is_one_of(node: &NodeRef, tags: &[&str]) -> bool {
    node_tag(node).is_some_and(|t| tags.contains(&t.as_str()))
}

// === Attributes ===

#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|value| value.to_string())
}

/// Presence test; an empty `alt=""` still counts.
#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

// === Serialization ===

/// Concatenated text of the selection and everything below it.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Markup of the children, without the element itself.
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Markup including the element itself.
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

/// Just the opening tag with its attributes, for log lines.
#[must_use]
pub fn start_tag(sel: &Selection) -> String {
    let markup = outer_html(sel);
    match markup.find('>') {
        Some(end) => markup[..=end].to_string(),
        None => markup.to_string(),
    }
}

// === Navigation ===

/// True when some ancestor of `node` is an element whose tag is in `tags`.
#[must_use]
pub fn has_ancestor_in(node: &NodeRef, tags: &[&str]) -> bool {
    let mut current = node.parent();
    while let Some(parent) = current {
        if node_is_one_of(&parent, tags) {
            return true;
        }
        current = parent.parent();
    }
    false
}

/// Nearest earlier sibling that is an element; text and comments are skipped.
#[must_use]
pub fn previous_element_sibling<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut candidate = node.prev_sibling();
    while let Some(prev) = candidate {
        if prev.is_element() {
            return Some(prev);
        }
        candidate = prev.prev_sibling();
    }
    None
}

// === Mutation ===

/// Detaches every node of `sel`, subtree included.
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

/// Changes the tag of every element in `sel`, keeping attributes and children.
#[inline]
pub fn rename(sel: &Selection, new_tag: &str) {
    sel.rename(new_tag);
}
