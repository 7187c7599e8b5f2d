//! Content Selection
//!
//! Picks the single highest-scored node of a scored document as the
//! readable content, then tidies it: cosmetic `div`s become paragraphs and a
//! heading that repeats the page title is dropped together with everything
//! that precedes it.

use tracing::{debug, info};

use crate::dom::{self, Document, NodeRef, Selection};
use crate::options::Options;
use crate::scoring::{self, ScoreBoard};

pub mod title;

/// Markup returned when nothing in the document earned a score.
pub const SCORING_ERROR: &str = "<p>Scoring error.</p>";

/// Longest start-tag prefix written to diagnostic log lines.
const LOG_TAG_LEN: usize = 69;

/// A scored node together with its score.
#[derive(Debug, Clone, Copy)]
pub struct Ranked<'a> {
    pub node: NodeRef<'a>,
    pub score: f64,
}

/// The `limit` highest-scored nodes, best first.
///
/// At least one node is kept whenever anything was scored, so a zero limit
/// still yields the best node. Nodes are gathered in document order and sorted stably, so among equal
/// scores the earlier node ranks higher.
#[must_use]
pub fn rank<'a>(doc: &'a Document, board: &ScoreBoard, limit: usize) -> Vec<Ranked<'a>> {
    let mut ranked: Vec<Ranked<'a>> = doc
        .select("*")
        .nodes()
        .iter()
        .filter_map(|node| {
            board.score(node.id).map(|score| Ranked { node: *node, score })
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(limit.max(1));
    ranked
}

/// Chooses and tidies the content node of a scored document.
///
/// `title` is the page title; it is compared case-insensitively. Returns
/// `None` when no node was scored.
#[must_use]
pub fn select_content<'a>(
    doc: &'a Document,
    board: &ScoreBoard,
    title: &str,
    options: &Options,
) -> Option<NodeRef<'a>> {
    let ranked = rank(doc, board, options.max_scored_nodes);
    let best = ranked.first()?.node;

    if options.debug {
        log_ranking(&ranked, board);
    }

    transform_divs_to_ps(doc);

    if let Some(header) = title::find_title_header(&best, title, options.min_title_header_len) {
        let text = dom::text_content(&Selection::from(header));
        debug!(header = %text.trim(), "stripping title header");
        title::strip_before(&header, &best);
    }

    Some(best)
}

/// Retags every `div` without block descendants as `p`.
pub fn transform_divs_to_ps(doc: &Document) {
    let divs: Vec<NodeRef> = doc
        .select("div")
        .nodes()
        .iter()
        .filter(|div| !scoring::has_block_descendant(div))
        .copied()
        .collect();

    for div in divs {
        dom::rename(&Selection::from(div), "p");
    }
}

fn log_ranking(ranked: &[Ranked], board: &ScoreBoard) {
    for entry in ranked {
        let tag: String = dom::start_tag(&Selection::from(entry.node))
            .chars()
            .take(LOG_TAG_LEN)
            .collect();
        let contributions: Vec<String> = board
            .history(entry.node.id)
            .unwrap_or_default()
            .iter()
            .map(|c| format!("{}={}", c.name, c.value))
            .collect();
        info!("{:10.2} {} [{}]", entry.score, tag, contributions.join(", "));
    }
}
