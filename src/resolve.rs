//! Resolution orchestration.
//!
//! The feed is tried first because a full feed entry is the publisher's own
//! clean copy of the article. When the feed cannot supply it, for any of the
//! [`FeedError`] reasons, the page markup is scored instead. Fetch and parse
//! failures are not fallback triggers and reach the caller unchanged.

use tracing::{debug, info};

use crate::error::{Error, FeedError, Result};
use crate::extractor;
use crate::feed::{FeedLinkDetector, FeedParser, FeedReconciler, LinkTagDetector, SyndicationParser};
use crate::fetch::{Fetched, Fetcher, HttpFetcher};
use crate::options::Options;
use crate::result::{Extracted, Provenance, ResolutionOutcome};

/// Resolves URLs to their readable content.
///
/// Holds no per-request state; one resolver can serve many threads.
///
/// # Example
///
/// ```rust,no_run
/// use rs_readable::{Options, Resolver};
///
/// let resolver = Resolver::from_options(Options::default())?;
/// let outcome = resolver.resolve("http://example.com/2010/01/post.html")?;
/// println!("{}\n{}", outcome.note(), outcome.html());
/// # Ok::<(), rs_readable::Error>(())
/// ```
pub struct Resolver {
    fetcher: Box<dyn Fetcher + Send + Sync>,
    detector: Box<dyn FeedLinkDetector + Send + Sync>,
    parser: Box<dyn FeedParser + Send + Sync>,
    options: Options,
}

impl Resolver {
    /// A resolver over `fetcher` with the default feed detector and parser.
    pub fn new(fetcher: impl Fetcher + Send + Sync + 'static, options: Options) -> Self {
        Self {
            fetcher: Box::new(fetcher),
            detector: Box::new(LinkTagDetector),
            parser: Box::new(SyndicationParser),
            options,
        }
    }

    /// A resolver fetching over HTTP, configured from `options`.
    pub fn from_options(options: Options) -> Result<Self> {
        let fetcher = HttpFetcher::from_options(&options)?;
        Ok(Self::new(fetcher, options))
    }

    /// Replaces the feed link detector.
    #[must_use]
    pub fn with_detector(mut self, detector: impl FeedLinkDetector + Send + Sync + 'static) -> Self {
        self.detector = Box::new(detector);
        self
    }

    /// Replaces the feed parser.
    #[must_use]
    pub fn with_parser(mut self, parser: impl FeedParser + Send + Sync + 'static) -> Self {
        self.parser = Box::new(parser);
        self
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Fetches `url` and resolves its readable content.
    pub fn resolve(&self, url: &str) -> Result<ResolutionOutcome> {
        let page = self.fetcher.fetch(url)?;
        self.resolve_fetched(url, &page)
    }

    /// Resolves `url` using a page the caller already fetched.
    pub fn resolve_fetched(&self, url: &str, page: &Fetched) -> Result<ResolutionOutcome> {
        let reconciler = FeedReconciler::new(
            &*self.fetcher,
            &*self.detector,
            &*self.parser,
            &self.options,
        );

        match reconciler.reconcile(url, Some(page)) {
            Ok(fragment) => Ok(ResolutionOutcome {
                extracted: Extracted::Node(fragment),
                provenance: Provenance::Feed,
                fallback_reason: None,
            }),
            Err(Error::Feed(reason)) => Ok(self.fall_back(url, page, reason)),
            Err(err) => {
                debug!(%url, error = %err, "feed resolution failed");
                Err(err)
            }
        }
    }

    fn fall_back(&self, url: &str, page: &Fetched, reason: FeedError) -> ResolutionOutcome {
        info!(%url, kind = reason.kind(), %reason, "falling back to content extraction");
        ResolutionOutcome {
            extracted: extractor::extract_from_html(url, &page.body, &self.options),
            provenance: Provenance::Content,
            fallback_reason: Some(reason),
        }
    }
}
