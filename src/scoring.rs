//! Block scoring.
//!
//! Attaches a relevance score to text-bearing leaf blocks, images and
//! embedded objects. Scores live in a [`ScoreBoard`] keyed by node id rather
//! than on the tree itself; a node absent from the board is unscored, which
//! is not the same as a score of zero.
//!
//! Scores are never propagated to containers, so the best candidate is
//! always a single block, image or embed.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::dom::{self, Document, NodeId, NodeRef, Selection};
use crate::patterns::{
    BLOCK_TAGS, EMBED_SELECTOR, EMBED_TAGS, ENTITY_REF, HEADER_TAGS, WHITESPACE_RUN,
};

/// Text shorter than this (characters) is penalised, headings excepted.
const SHORT_TEXT_LEN: usize = 20;
/// Text longer than this earns `SOME_TEXT_SCORE`.
const SOME_TEXT_LEN: usize = 75;
/// Text longer than this additionally earns `MORE_TEXT_SCORE`.
const MORE_TEXT_LEN: usize = 250;

const SHORT_TEXT_SCORE: f64 = -1.5;
const SOME_TEXT_SCORE: f64 = 6.0;
const MORE_TEXT_SCORE: f64 = 8.0;

const ANY_IMG_SCORE: f64 = 1.0;
const IMG_ALT_SCORE: f64 = 3.0;
const TINY_IMG_SCORE: f64 = -3.0;
const HAS_IMG_AREA: i64 = 125_000;
const HAS_IMG_SCORE: f64 = 5.0;
const BIG_IMG_AREA: i64 = 500_000;
const BIG_IMG_SCORE: f64 = 10.0;

const EMBED_SCORE: f64 = 15.0;

/// One named contribution to a node's score, kept for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    pub name: &'static str,
    pub value: f64,
}

/// Scores attached to the nodes of one document.
#[derive(Debug, Default)]
pub struct ScoreBoard {
    scores: HashMap<NodeId, f64>,
    history: Option<HashMap<NodeId, Vec<Contribution>>>,
}

impl ScoreBoard {
    /// Creates an empty board; `record_history` keeps named contributions.
    #[must_use]
    pub fn new(record_history: bool) -> Self {
        Self {
            scores: HashMap::new(),
            history: record_history.then(HashMap::new),
        }
    }

    /// Adds `value` to the node's score, creating the score on first use.
    pub fn apply(&mut self, node: NodeId, value: f64, name: &'static str) {
        *self.scores.entry(node).or_insert(0.0) += value;
        if let Some(history) = self.history.as_mut() {
            history.entry(node).or_default().push(Contribution { name, value });
        }
        trace!(?node, name, value, "score contribution");
    }

    /// The node's score, or `None` if it was never scored.
    #[must_use]
    pub fn score(&self, node: NodeId) -> Option<f64> {
        self.scores.get(&node).copied()
    }

    #[must_use]
    pub fn is_scored(&self, node: NodeId) -> bool {
        self.scores.contains_key(&node)
    }

    /// Number of scored nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Named contributions for a node; `None` unless history was recorded.
    #[must_use]
    pub fn history(&self, node: NodeId) -> Option<&[Contribution]> {
        self.history.as_ref()?.get(&node).map(Vec::as_slice)
    }
}

/// Scores every candidate node of `doc`.
#[must_use]
pub fn score_document(doc: &Document, record_history: bool) -> ScoreBoard {
    let mut board = ScoreBoard::new(record_history);
    let root = doc.select("html");

    let blocks = score_blocks(&root, &mut board);
    let images = score_images(&root, &mut board);
    let embeds = score_embeds(&root, &mut board);

    debug!(blocks, images, embeds, scored = board.len(), "scored document");
    board
}

/// Finds the leaf blocks under `root` in document order.
///
/// A block tag is a leaf when no block tag appears below it. The walk stops
/// at a leaf and keeps descending through everything else, so a block that
/// wraps other blocks is never itself a leaf.
#[must_use]
pub fn find_leaf_blocks<'a>(root: &Selection<'a>) -> Vec<NodeRef<'a>> {
    let mut leaves = Vec::new();
    let mut stack: Vec<NodeRef<'a>> = root.nodes().iter().rev().copied().collect();

    while let Some(node) = stack.pop() {
        if dom::node_is_one_of(&node, BLOCK_TAGS) && !has_block_descendant(&node) {
            leaves.push(node);
            continue;
        }
        let children: Vec<NodeRef<'a>> =
            node.children().into_iter().filter(NodeRef::is_element).collect();
        stack.extend(children.into_iter().rev());
    }

    leaves
}

/// True when any descendant of `node` is a block tag.
#[must_use]
pub fn has_block_descendant(node: &NodeRef) -> bool {
    node.descendants()
        .into_iter()
        .any(|d| dom::node_is_one_of(&d, BLOCK_TAGS))
}

/// Length in characters of `text` after trimming, collapsing whitespace and
/// dropping entity references.
#[must_use]
pub fn normalized_text_len(text: &str) -> usize {
    let collapsed = WHITESPACE_RUN.replace_all(text.trim(), " ");
    ENTITY_REF.replace_all(&collapsed, "").chars().count()
}

fn score_blocks(root: &Selection, board: &mut ScoreBoard) -> usize {
    let leaves = find_leaf_blocks(root);
    for leaf in &leaves {
        let sel = Selection::from(*leaf);
        let text_len = normalized_text_len(&dom::text_content(&sel));
        if text_len == 0 {
            continue;
        }

        if text_len < SHORT_TEXT_LEN && !dom::node_is_one_of(leaf, HEADER_TAGS) {
            board.apply(leaf.id, SHORT_TEXT_SCORE, "short_text");
        }
        if text_len > SOME_TEXT_LEN {
            board.apply(leaf.id, SOME_TEXT_SCORE, "some_text");
        }
        if text_len > MORE_TEXT_LEN {
            board.apply(leaf.id, MORE_TEXT_SCORE, "more_text");
        }
    }
    leaves.len()
}

fn score_images(root: &Selection, board: &mut ScoreBoard) -> usize {
    let images = root.select("img");
    for img in images.nodes() {
        let sel = Selection::from(*img);
        board.apply(img.id, ANY_IMG_SCORE, "any_img");
        if dom::has_attribute(&sel, "alt") {
            board.apply(img.id, IMG_ALT_SCORE, "img_alt");
        }

        let Some(area) = declared_area(&sel) else {
            continue;
        };
        if area == 1 {
            board.apply(img.id, TINY_IMG_SCORE, "tiny_img");
        }
        if area >= HAS_IMG_AREA {
            board.apply(img.id, HAS_IMG_SCORE, "has_img");
        }
        if area >= BIG_IMG_AREA {
            board.apply(img.id, BIG_IMG_SCORE, "big_img");
        }
    }
    images.length()
}

/// `width * height` when both attributes parse as integers.
fn declared_area(sel: &Selection) -> Option<i64> {
    let width: i64 = dom::get_attribute(sel, "width")?.trim().parse().ok()?;
    let height: i64 = dom::get_attribute(sel, "height")?.trim().parse().ok()?;
    width.checked_mul(height)
}

fn score_embeds(root: &Selection, board: &mut ScoreBoard) -> usize {
    let mut scored = 0;
    for embed in root.select(EMBED_SELECTOR).nodes() {
        // An embed inside an object fallback is the same media; count it once.
        if dom::has_ancestor_in(embed, EMBED_TAGS) {
            continue;
        }
        board.apply(embed.id, EMBED_SCORE, "has_embed");
        scored += 1;
    }
    scored
}
