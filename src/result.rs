//! Result types for resolution output.
//!
//! An extraction produces either a subtree of a parsed document or a piece of
//! final markup; the resolver wraps it with where it came from.

use std::fmt;

use serde::Serialize;

use crate::dom::{self, Document, NodeId, NodeRef, Selection};
use crate::error::FeedError;

/// A parsed document together with the node that holds the content.
pub struct Fragment {
    document: Document,
    root: NodeId,
    children_only: bool,
}

impl Fragment {
    /// The subtree rooted at `root`, serialized including `root` itself.
    pub(crate) fn subtree(document: Document, root: NodeId) -> Self {
        Self { document, root, children_only: false }
    }

    /// Everything inside `<body>`, serialized without the body tag.
    pub(crate) fn body_of(document: Document) -> Option<Self> {
        let body = document.select("body").nodes().first().map(|n| n.id)?;
        Some(Self { document, root: body, children_only: true })
    }

    /// The root node of the content.
    #[must_use]
    pub fn root(&self) -> Option<NodeRef<'_>> {
        self.document.tree.get(&self.root)
    }

    /// The content as a `dom_query` selection.
    #[must_use]
    pub fn selection(&self) -> Option<Selection<'_>> {
        self.root().map(Selection::from)
    }

    /// Tag name of the root node.
    #[must_use]
    pub fn tag_name(&self) -> Option<String> {
        self.root().as_ref().and_then(dom::node_tag)
    }

    /// Serialized markup of the content.
    #[must_use]
    pub fn html(&self) -> String {
        let Some(sel) = self.selection() else {
            return String::new();
        };
        if self.children_only {
            dom::inner_html(&sel).to_string()
        } else {
            dom::outer_html(&sel).to_string()
        }
    }

    /// Plain text of the content.
    #[must_use]
    pub fn text(&self) -> String {
        self.selection()
            .map(|sel| dom::text_content(&sel).to_string())
            .unwrap_or_default()
    }
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fragment")
            .field("tag", &self.tag_name())
            .field("children_only", &self.children_only)
            .finish_non_exhaustive()
    }
}

/// What an extraction strategy produced.
#[derive(Debug)]
pub enum Extracted {
    /// A subtree still to be serialized.
    Node(Fragment),
    /// Final markup, such as the scoring-error placeholder.
    Markup(String),
}

impl Extracted {
    /// Serialized markup, whichever form the result takes.
    #[must_use]
    pub fn html(&self) -> String {
        match self {
            Self::Node(fragment) => fragment.html(),
            Self::Markup(markup) => markup.clone(),
        }
    }

    /// The fragment, if this is a node result.
    #[must_use]
    pub fn fragment(&self) -> Option<&Fragment> {
        match self {
            Self::Node(fragment) => Some(fragment),
            Self::Markup(_) => None,
        }
    }
}

/// Which strategy produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// The site's own feed entry for the URL.
    Feed,
    /// Scoring the page markup.
    Content,
}

impl Provenance {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Feed => "feed",
            Self::Content => "content",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The resolved content of a URL.
#[derive(Debug)]
pub struct ResolutionOutcome {
    /// The extracted content.
    pub extracted: Extracted,

    /// Which strategy produced it.
    pub provenance: Provenance,

    /// Why the feed was not used, when generic extraction took over.
    ///
    /// Diagnostic only.
    pub fallback_reason: Option<FeedError>,
}

impl ResolutionOutcome {
    /// Serialized content markup.
    #[must_use]
    pub fn html(&self) -> String {
        self.extracted.html()
    }

    /// HTML comment describing how the content was obtained.
    ///
    /// `<!-- cleaned feed -->` for feed content, otherwise
    /// `<!-- cleaned content, <Kind>, <reason> -->`.
    #[must_use]
    pub fn note(&self) -> String {
        match (&self.provenance, &self.fallback_reason) {
            (Provenance::Feed, _) => "<!-- cleaned feed -->".to_string(),
            (Provenance::Content, Some(reason)) => {
                format!("<!-- cleaned content, {}, {} -->", reason.kind(), reason)
            }
            (Provenance::Content, None) => "<!-- cleaned content -->".to_string(),
        }
    }

    /// Serializable view of the outcome.
    #[must_use]
    pub fn summary(&self) -> OutcomeSummary {
        OutcomeSummary {
            provenance: self.provenance,
            fallback_kind: self.fallback_reason.as_ref().map(FeedError::kind),
            fallback_reason: self.fallback_reason.as_ref().map(ToString::to_string),
            html: self.html(),
        }
    }
}

/// JSON-friendly summary of a [`ResolutionOutcome`].
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeSummary {
    pub provenance: Provenance,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
    pub html: String,
}
