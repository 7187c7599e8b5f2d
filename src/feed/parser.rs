//! RSS and Atom parsing.
//!
//! Both formats are mapped onto [`FeedEntry`]: `content:encoded` and Atom
//! `<content>` become content representations, `<description>` and Atom
//! `<summary>` become the summary, and `feedburner:origLink` becomes the
//! origin link.

use atom_syndication::TextType;
use tracing::debug;

use crate::error::{Error, Result};

use super::{EntryContent, Feed, FeedEntry, FeedParser};

const ORIGIN_LINK_NS: &str = "feedburner";
const ORIGIN_LINK_NAME: &str = "origLink";

/// Parses RSS 2.0, falling back to Atom 1.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyndicationParser;

impl FeedParser for SyndicationParser {
    fn parse(&self, body: &str) -> Result<Feed> {
        let rss_error = match rss::Channel::read_from(body.as_bytes()) {
            Ok(channel) => return Ok(from_rss(&channel)),
            Err(e) => e,
        };

        match atom_syndication::Feed::read_from(body.as_bytes()) {
            Ok(feed) => Ok(from_atom(&feed)),
            Err(atom_error) => Err(Error::FeedParse(format!(
                "not RSS ({rss_error}) or Atom ({atom_error})"
            ))),
        }
    }
}

fn from_rss(channel: &rss::Channel) -> Feed {
    let entries: Vec<FeedEntry> = channel
        .items()
        .iter()
        .map(|item| {
            let link = item
                .link()
                .or_else(|| item.guid().filter(|g| g.is_permalink()).map(rss::Guid::value))
                .unwrap_or_default()
                .trim()
                .to_string();

            let origin_link = item
                .extensions()
                .get(ORIGIN_LINK_NS)
                .and_then(|ext| ext.get(ORIGIN_LINK_NAME))
                .and_then(|values| values.first())
                .and_then(|ext| ext.value())
                .map(|v| v.trim().to_string());

            let content = item.content().map(EntryContent::html).into_iter().collect();

            FeedEntry {
                link,
                origin_link,
                content,
                summary_detail: item.description().map(EntryContent::html),
                summary: item.description().map(str::to_string),
            }
        })
        .collect();

    debug!(entries = entries.len(), "parsed RSS feed");
    Feed { entries }
}

fn from_atom(feed: &atom_syndication::Feed) -> Feed {
    let entries: Vec<FeedEntry> = feed
        .entries()
        .iter()
        .map(|entry| {
            let links = entry.links();
            let link = links
                .iter()
                .find(|l| l.rel() == "alternate")
                .or_else(|| links.first())
                .map(|l| l.href().trim().to_string())
                .unwrap_or_default();

            let origin_link = entry
                .extensions()
                .get(ORIGIN_LINK_NS)
                .and_then(|ext| ext.get(ORIGIN_LINK_NAME))
                .and_then(|values| values.first())
                .and_then(|ext| ext.value())
                .map(|v| v.trim().to_string());

            let content = entry
                .content()
                .and_then(|c| {
                    let value = c.value()?;
                    Some(EntryContent::new(atom_media_type(c.content_type()), value))
                })
                .into_iter()
                .collect();

            let summary_detail = entry.summary().map(|s| {
                EntryContent::new(text_media_type(&s.r#type), s.value.clone())
            });

            FeedEntry {
                link,
                origin_link,
                content,
                summary: summary_detail.as_ref().map(|s| s.value.clone()),
                summary_detail,
            }
        })
        .collect();

    debug!(entries = entries.len(), "parsed Atom feed");
    Feed { entries }
}

/// MIME type of an Atom `<content type="...">`.
fn atom_media_type(content_type: Option<&str>) -> String {
    match content_type.map(str::trim) {
        Some("html") => "text/html".to_string(),
        Some("xhtml") => "application/xhtml+xml".to_string(),
        None | Some("" | "text") => "text/plain".to_string(),
        Some(mime) => mime.to_ascii_lowercase(),
    }
}

fn text_media_type(kind: &TextType) -> &'static str {
    match kind {
        TextType::Html => "text/html",
        TextType::Xhtml => "application/xhtml+xml",
        TextType::Text => "text/plain",
    }
}
