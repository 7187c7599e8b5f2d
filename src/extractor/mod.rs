//! Generic content extraction.
//!
//! Works from the page markup alone: known site layouts are handled by
//! [`site_rules`], everything else is scored block by block and the best
//! block is kept.

use tracing::{debug, warn};

use crate::dom::{self, Document};
use crate::options::Options;
use crate::patterns::JUNK_SELECTOR;
use crate::result::{Extracted, Fragment};
use crate::scoring;
use crate::selector::{self, SCORING_ERROR};

pub mod site_rules;

/// Extracts the readable part of `html`, fetched from `url`.
///
/// Never fails: when nothing scores, the result is the
/// [`SCORING_ERROR`] placeholder markup.
///
/// # Example
///
/// ```rust
/// use rs_readable::{extract_from_html, Options};
///
/// let body = "Readable sentence number one. ".repeat(12);
/// let html = format!("<html><body><div>nav</div><div>{body}</div></body></html>");
/// let extracted = extract_from_html("http://example.com/post", &html, &Options::default());
/// assert!(extracted.html().starts_with("<p>Readable sentence"));
/// ```
#[must_use]
pub fn extract_from_html(url: &str, html: &str, options: &Options) -> Extracted {
    let doc = dom::parse(html);

    if let Some(root) = site_rules::find_site_content(url, &doc) {
        debug!(%url, "extracted with site rule");
        return Extracted::Node(Fragment::subtree(doc, root));
    }

    extract_scored(doc, options)
}

/// Scores `doc` and keeps its best node.
#[must_use]
pub fn extract_scored(doc: Document, options: &Options) -> Extracted {
    let title = page_title(&doc);
    dom::remove(&doc.select(JUNK_SELECTOR));

    let board = scoring::score_document(&doc, options.debug);
    let best = selector::select_content(&doc, &board, &title, options).map(|node| node.id);

    match best {
        Some(root) => Extracted::Node(Fragment::subtree(doc, root)),
        None => {
            warn!("no scored nodes");
            Extracted::Markup(SCORING_ERROR.to_string())
        }
    }
}

/// Lowercased text of the page's `<title>`, empty when there is none.
#[must_use]
pub fn page_title(doc: &Document) -> String {
    doc.select("title")
        .nodes()
        .first()
        .map(|node| node.text().to_lowercase())
        .unwrap_or_default()
}
