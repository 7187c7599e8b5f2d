use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use rs_readable::feed::FeedLinkDetector;
use rs_readable::{Error, FeedError, Fetched, Fetcher, Options, Provenance, Resolver};

const PAGE_URL: &str = "http://example.com/2010/01/post.html";
const FEED_URL: &str = "http://example.com/feed.xml";

/// In-memory web: a fixed set of URLs, anything else is a 404.
#[derive(Default)]
struct FakeWeb {
    pages: HashMap<String, Fetched>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeWeb {
    fn page(self, url: &str, body: &str) -> Self {
        self.redirect(url, url, body)
    }

    fn redirect(mut self, url: &str, final_url: &str, body: &str) -> Self {
        self.pages.insert(
            url.to_string(),
            Fetched {
                body: body.to_string(),
                final_url: final_url.to_string(),
            },
        );
        self
    }

    fn requests(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.requests)
    }
}

impl Fetcher for FakeWeb {
    fn fetch(&self, url: &str) -> rs_readable::Result<Fetched> {
        self.requests.lock().unwrap().push(url.to_string());
        self.pages.get(url).cloned().ok_or_else(|| Error::HttpStatus {
            url: url.to_string(),
            status: 404,
        })
    }
}

fn page_html(feed_href: Option<&str>) -> String {
    let link = feed_href
        .map(|href| format!(r#"<link rel="alternate" type="application/rss+xml" href="{href}">"#))
        .unwrap_or_default();
    let article = "PAGE_ARTICLE text that the generic extractor should find. ".repeat(6);
    format!(
        r#"<html><head><title>A Post</title>{link}</head><body>
        <div class="nav"><a href="/">Home</a></div>
        <div class="entry">{article}</div>
        </body></html>"#
    )
}

fn full_content() -> String {
    format!("<p>FEED_ARTICLE {}</p>", "Full feed article text. ".repeat(30))
}

fn rss(items: &[(&str, &str)]) -> String {
    let items: String = items
        .iter()
        .map(|(link, content)| {
            format!(
                "<item><title>Item</title><link>{link}</link>\
                 <content:encoded><![CDATA[{content}]]></content:encoded></item>"
            )
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/">
<channel><title>Example</title><link>http://example.com/</link><description>Example</description>
{items}
</channel></rss>"#
    )
}

fn feed_reason(outcome: &rs_readable::ResolutionOutcome) -> FeedError {
    assert_eq!(outcome.provenance, Provenance::Content);
    match &outcome.fallback_reason {
        Some(reason) => reason.clone(),
        None => panic!("expected a fallback reason"),
    }
}

#[test]
fn resolver_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Resolver>();
}

#[test]
fn full_feed_entry_wins() {
    let web = FakeWeb::default()
        .page(PAGE_URL, &page_html(Some("/feed.xml")))
        .page(FEED_URL, &rss(&[("http://example.com/other", "<p>x</p>"), (PAGE_URL, full_content().as_str())]));
    let requests = web.requests();

    let outcome = Resolver::new(web, Options::default()).resolve(PAGE_URL).unwrap();

    assert_eq!(outcome.provenance, Provenance::Feed);
    assert!(outcome.fallback_reason.is_none());
    assert_eq!(outcome.note(), "<!-- cleaned feed -->");

    let html = outcome.html();
    assert!(html.starts_with("<p>FEED_ARTICLE"));
    assert!(!html.contains("PAGE_ARTICLE"));
    assert_eq!(*requests.lock().unwrap(), vec![PAGE_URL.to_string(), FEED_URL.to_string()]);
}

#[test]
fn entry_found_with_query_strings_stripped() {
    let request = "http://example.com/a?b=1";
    let web = FakeWeb::default()
        .redirect(request, "http://example.com/a?b=2", &page_html(Some(FEED_URL)))
        .page(FEED_URL, &rss(&[("http://example.com/a", full_content().as_str())]));

    let outcome = Resolver::new(web, Options::default()).resolve(request).unwrap();
    assert_eq!(outcome.provenance, Provenance::Feed);
}

#[test]
fn entry_found_through_final_url() {
    let request = "http://short.example/x1";
    let web = FakeWeb::default()
        .redirect(request, PAGE_URL, &page_html(Some(FEED_URL)))
        .page(FEED_URL, &rss(&[(PAGE_URL, full_content().as_str())]));

    let outcome = Resolver::new(web, Options::default()).resolve(request).unwrap();
    assert_eq!(outcome.provenance, Provenance::Feed);
}

#[test]
fn excerpt_feed_falls_back_to_page() {
    let web = FakeWeb::default()
        .page(PAGE_URL, &page_html(Some("/feed.xml")))
        .page(FEED_URL, &rss(&[(PAGE_URL, "<p>Only the first paragraph.</p>")]));

    let outcome = Resolver::new(web, Options::default()).resolve(PAGE_URL).unwrap();

    match feed_reason(&outcome) {
        FeedError::NoContent(reason) => assert!(reason.starts_with("text too short")),
        other => panic!("expected NoContent, got {other:?}"),
    }
    assert!(outcome.html().contains("PAGE_ARTICLE"));
    assert!(outcome.note().starts_with("<!-- cleaned content, NoContent, text too short"));
}

#[test]
fn truncated_feed_falls_back_even_when_long() {
    let truncated = format!("<p>{} [...]</p>", "Full feed article text. ".repeat(40));
    let web = FakeWeb::default()
        .page(PAGE_URL, &page_html(Some("/feed.xml")))
        .page(FEED_URL, &rss(&[(PAGE_URL, truncated.as_str())]));

    let outcome = Resolver::new(web, Options::default()).resolve(PAGE_URL).unwrap();
    assert_eq!(
        feed_reason(&outcome),
        FeedError::NoContent("trailing ellipsis".to_string())
    );
}

#[test]
fn page_without_feed_link_falls_back() {
    let web = FakeWeb::default().page(PAGE_URL, &page_html(None));
    let requests = web.requests();

    let outcome = Resolver::new(web, Options::default()).resolve(PAGE_URL).unwrap();

    assert_eq!(feed_reason(&outcome), FeedError::NoFeedLink);
    assert_eq!(outcome.note(), "<!-- cleaned content, NoFeedLink, no feed link -->");
    assert!(outcome.html().starts_with("<p class=\"entry\">PAGE_ARTICLE"));
    assert_eq!(requests.lock().unwrap().len(), 1);
}

#[test]
fn feed_without_entry_falls_back() {
    let web = FakeWeb::default()
        .page(PAGE_URL, &page_html(Some("/feed.xml")))
        .page(FEED_URL, &rss(&[("http://example.com/unrelated", full_content().as_str())]));

    let outcome = Resolver::new(web, Options::default()).resolve(PAGE_URL).unwrap();
    assert_eq!(feed_reason(&outcome), FeedError::NoMatchingEntry);
}

#[test]
fn unsupported_source_skips_feed_lookup() {
    let url = "https://docs.google.com/document/d/abc/edit";
    let web = FakeWeb::default()
        .page(url, &page_html(Some(FEED_URL)))
        .page(FEED_URL, &rss(&[(url, full_content().as_str())]));
    let requests = web.requests();

    let outcome = Resolver::new(web, Options::default()).resolve(url).unwrap();

    assert_eq!(feed_reason(&outcome), FeedError::UnsupportedSource);
    assert_eq!(*requests.lock().unwrap(), vec![url.to_string()]);
}

#[test]
fn page_fetch_failure_propagates() {
    let result = Resolver::new(FakeWeb::default(), Options::default()).resolve(PAGE_URL);
    match result {
        Err(Error::HttpStatus { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[test]
fn feed_fetch_failure_propagates() {
    let web = FakeWeb::default().page(PAGE_URL, &page_html(Some("/missing.xml")));
    let result = Resolver::new(web, Options::default()).resolve(PAGE_URL);
    match result {
        Err(Error::HttpStatus { url, .. }) => assert_eq!(url, "http://example.com/missing.xml"),
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[test]
fn malformed_feed_propagates() {
    let web = FakeWeb::default()
        .page(PAGE_URL, &page_html(Some("/feed.xml")))
        .page(FEED_URL, "<html><body>This is not a feed</body></html>");

    let result = Resolver::new(web, Options::default()).resolve(PAGE_URL);
    match result {
        Err(err) => {
            assert!(matches!(err, Error::FeedParse(_)));
            assert!(!err.is_recoverable());
        }
        Ok(outcome) => panic!("expected FeedParse, got {outcome:?}"),
    }
}

struct FixedDetector(&'static str);

impl FeedLinkDetector for FixedDetector {
    fn detect_feed_link(&self, _html: &str) -> Option<String> {
        Some(self.0.to_string())
    }
}

#[test]
fn custom_detector_is_used() {
    let web = FakeWeb::default()
        .page(PAGE_URL, &page_html(None))
        .page(FEED_URL, &rss(&[(PAGE_URL, full_content().as_str())]));

    let resolver = Resolver::new(web, Options::default()).with_detector(FixedDetector(FEED_URL));
    let outcome = resolver.resolve(PAGE_URL).unwrap();
    assert_eq!(outcome.provenance, Provenance::Feed);
}

#[test]
fn prefetched_page_is_not_fetched_again() {
    let web = FakeWeb::default().page(FEED_URL, &rss(&[(PAGE_URL, full_content().as_str())]));
    let requests = web.requests();
    let page = Fetched {
        body: page_html(Some("/feed.xml")),
        final_url: PAGE_URL.to_string(),
    };

    let outcome = Resolver::new(web, Options::default())
        .resolve_fetched(PAGE_URL, &page)
        .unwrap();

    assert_eq!(outcome.provenance, Provenance::Feed);
    assert_eq!(*requests.lock().unwrap(), vec![FEED_URL.to_string()]);
}

#[test]
fn feed_length_threshold_is_configurable() {
    let web = FakeWeb::default()
        .page(PAGE_URL, &page_html(Some("/feed.xml")))
        .page(FEED_URL, &rss(&[(PAGE_URL, "<p>A short but complete note.</p>")]));
    let options = Options {
        min_feed_text_len: 10,
        ..Options::default()
    };

    let outcome = Resolver::new(web, options).resolve(PAGE_URL).unwrap();
    assert_eq!(outcome.provenance, Provenance::Feed);
    assert_eq!(outcome.html(), "<p>A short but complete note.</p>");
}

#[test]
fn summary_reports_fallback() {
    let web = FakeWeb::default().page(PAGE_URL, &page_html(None));
    let outcome = Resolver::new(web, Options::default()).resolve(PAGE_URL).unwrap();

    let json = serde_json::to_value(outcome.summary()).unwrap();
    assert_eq!(json["provenance"], "content");
    assert_eq!(json["fallback_kind"], "NoFeedLink");
    assert!(json["html"].as_str().unwrap().contains("PAGE_ARTICLE"));
}
