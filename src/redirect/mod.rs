//! Best-effort redirect resolution
//!
//! Article links on listing pages often point at short or tracking URLs that
//! bounce through one or more 3xx responses. `RedirectResolver` follows each
//! chain and reports where it ended. A resolution that fails for any reason
//! yields the input URL unchanged, so a link is never lost to a flaky hop.

use futures::StreamExt;
use futures::stream;
use log::debug;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::config::ScrapeConfig;
use crate::fetcher::{FetchError, build_client};
use crate::link_filter::LinkSet;

/// Why a single resolution fell back to the original URL; never surfaced
#[derive(Debug, Error)]
enum RedirectError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("chain ended with HTTP {0}")]
    Status(StatusCode),
}

/// Follows redirect chains to their final URL
#[derive(Debug, Clone)]
pub struct RedirectResolver {
    client: Client,
    concurrency: usize,
}

impl RedirectResolver {
    /// Create a resolver with its own client built from `config`
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Client` if the client cannot be built.
    pub fn new(config: &ScrapeConfig) -> Result<Self, FetchError> {
        Ok(Self::with_client(
            build_client(config)?,
            config.redirect_concurrency(),
        ))
    }

    /// Create a resolver over an existing client
    ///
    /// `concurrency` is clamped to at least 1.
    #[must_use]
    pub fn with_client(client: Client, concurrency: usize) -> Self {
        Self {
            client,
            concurrency: concurrency.max(1),
        }
    }

    #[must_use]
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Final URL after following redirects from `url`, or `url` itself on failure
    pub async fn resolve(&self, url: &str) -> String {
        match self.follow(url).await {
            Ok(final_url) => {
                if final_url != url {
                    debug!(target: "linkharvest::redirect", "{url} -> {final_url}");
                }
                final_url
            }
            Err(e) => {
                debug!(
                    target: "linkharvest::redirect",
                    "Keeping {url} unresolved: {e}"
                );
                url.to_string()
            }
        }
    }

    /// Resolve every link in `links`, at most `concurrency` at a time
    ///
    /// Each resolution is independent: one failing link keeps its original
    /// URL and does not affect the others. Links that end at the same
    /// final URL collapse into one entry.
    pub async fn resolve_all(&self, links: LinkSet) -> LinkSet {
        stream::iter(links)
            .map(|url| async move { self.resolve(&url).await })
            .buffer_unordered(self.concurrency)
            .collect()
            .await
    }

    async fn follow(&self, url: &str) -> Result<String, RedirectError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RedirectError::Status(status));
        }

        Ok(response.url().to_string())
    }
}
