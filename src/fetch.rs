//! Page and feed retrieval.
//!
//! The resolver only sees the [`Fetcher`] trait. [`HttpFetcher`] is the
//! blocking HTTP implementation; callers that cache responses wrap their
//! cache behind the same trait.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::encoding;
use crate::error::{Error, Result};
use crate::options::Options;

/// A retrieved document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    /// Decoded body.
    pub body: String,
    /// URL after following redirects.
    pub final_url: String,
}

/// Retrieves the body of a URL.
pub trait Fetcher {
    /// Fetches `url`, following redirects.
    ///
    /// Transport failures and non-success statuses are errors. Repeated
    /// calls need not return identical bytes.
    fn fetch(&self, url: &str) -> Result<Fetched>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &str) -> Result<Fetched> {
        (**self).fetch(url)
    }
}

/// Blocking HTTP fetcher backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a fetcher with the user agent and timeout from `options`.
    pub fn from_options(options: &Options) -> Result<Self> {
        let client = Client::builder()
            .user_agent(options.user_agent.clone())
            .timeout(options.timeout())
            .build()
            .map_err(|e| Error::Fetch {
                url: String::new(),
                message: format!("building HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }

    /// Wraps an existing client.
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Fetched> {
        let transport = |e: reqwest::Error| Error::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().map_err(transport)?;

        debug!(%url, %final_url, len = bytes.len(), "fetched");
        Ok(Fetched {
            body: encoding::decode_body(&bytes, content_type.as_deref()),
            final_url,
        })
    }
}
