//! Page fetching over plain HTTP GET
//!
//! A single `reqwest::Client` is built from the `ScrapeConfig` and shared by
//! the page fetcher and the redirect resolver. Every request carries the
//! configured user agent and timeout, and follows redirects up to the
//! configured limit. No cookies or session state are kept between requests.

use log::{debug, warn};
use reqwest::{Client, StatusCode, redirect::Policy};
use thiserror::Error;

use crate::config::ScrapeConfig;
use crate::utils::parse_http_url;

/// Failure to retrieve a page body
#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL could not be parsed or is not an http(s) URL
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// DNS failure, refused connection, timeout or too many redirects
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a status outside the 2xx range
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    /// The response body could not be read as text
    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// True for failures that never reached the server (bad input, client setup)
    #[must_use]
    pub fn is_local(&self) -> bool {
        matches!(self, Self::InvalidUrl { .. } | Self::Client(_))
    }

    /// HTTP status of the failed response, if the server answered
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Build the HTTP client shared by the fetcher and the redirect resolver
///
/// # Errors
///
/// Returns `FetchError::Client` if the TLS backend or client fails to initialise.
pub fn build_client(config: &ScrapeConfig) -> Result<Client, FetchError> {
    Client::builder()
        .user_agent(config.user_agent())
        .timeout(config.request_timeout())
        .redirect(Policy::limited(config.max_redirects()))
        .build()
        .map_err(FetchError::Client)
}

/// Issues single GET requests and returns the body of successful responses
#[derive(Debug, Clone)]
pub struct PageFetcher {
    // Client already uses Arc internally, so clones share one pool
    client: Client,
}

impl PageFetcher {
    /// Create a fetcher with its own client built from `config`
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Client` if the client cannot be built.
    pub fn new(config: &ScrapeConfig) -> Result<Self, FetchError> {
        Ok(Self::with_client(build_client(config)?))
    }

    /// Create a fetcher over an existing client
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetch `url` and return its body as text
    ///
    /// # Errors
    ///
    /// Returns a `FetchError` for an unparseable URL, any network-level
    /// failure, a non-2xx final status, or an unreadable body.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let parsed = parse_http_url(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        debug!(target: "linkharvest::fetch", "GET {parsed}");

        let response = self
            .client
            .get(parsed.clone())
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: parsed.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                target: "linkharvest::fetch",
                "{} answered with status {}",
                parsed,
                status
            );
            return Err(FetchError::Status {
                url: parsed.to_string(),
                status,
            });
        }

        let body = response.text().await.map_err(|source| FetchError::Body {
            url: parsed.to_string(),
            source,
        })?;

        debug!(
            target: "linkharvest::fetch",
            "Fetched {} bytes from {}",
            body.len(),
            parsed
        );

        Ok(body)
    }
}
