//! Type-safe builder for `ScrapeConfig` using the typestate pattern
//!
//! This module provides a fluent builder interface with compile-time validation
//! ensuring that the site URL is set before building a `ScrapeConfig`.

use anyhow::{Result, anyhow};
use std::marker::PhantomData;

use super::types::ScrapeConfig;
use crate::utils::{MAX_REDIRECT_CONCURRENCY, parse_http_url};

// Type states for the builder
pub struct WithSiteUrl;

pub struct ScrapeConfigBuilder<State = ()> {
    pub(crate) site_url: Option<String>,
    pub(crate) defaults: ScrapeConfig,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for ScrapeConfigBuilder<()> {
    fn default() -> Self {
        Self {
            site_url: None,
            defaults: ScrapeConfig::default(),
            _phantom: PhantomData,
        }
    }
}

impl ScrapeConfig {
    /// Create a builder for configuring a `ScrapeConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> ScrapeConfigBuilder<()> {
        ScrapeConfigBuilder::default()
    }
}

impl ScrapeConfigBuilder<()> {
    pub fn site_url(self, url: impl Into<String>) -> ScrapeConfigBuilder<WithSiteUrl> {
        let url_string = url.into().trim().trim_end_matches('/').to_string();

        // Bare hosts get https://; any other scheme is left for build() to reject
        let normalized_url = if url_string.contains("://") {
            url_string
        } else {
            format!("https://{url_string}")
        };

        ScrapeConfigBuilder {
            site_url: Some(normalized_url),
            defaults: self.defaults,
            _phantom: PhantomData,
        }
    }
}

// Build method only available when the site URL is set
impl ScrapeConfigBuilder<WithSiteUrl> {
    /// Validate the collected values and produce a `ScrapeConfig`
    ///
    /// # Errors
    ///
    /// Returns an error when the site URL is not an absolute http(s) URL,
    /// the timeout is zero, the redirect concurrency is outside 1-32, or a
    /// file extension does not start with `.`.
    pub fn build(self) -> Result<ScrapeConfig> {
        let site_url = self
            .site_url
            .ok_or_else(|| anyhow!("site_url is required"))?;
        parse_http_url(&site_url).map_err(|e| anyhow!("Invalid site_url '{site_url}': {e}"))?;

        let config = ScrapeConfig {
            site_url,
            ..self.defaults
        };

        if config.request_timeout_secs == 0 {
            return Err(anyhow!("request_timeout_secs must be greater than 0"));
        }

        if !(1..=MAX_REDIRECT_CONCURRENCY).contains(&config.redirect_concurrency) {
            return Err(anyhow!(
                "redirect_concurrency must be between 1 and {MAX_REDIRECT_CONCURRENCY}, got {}",
                config.redirect_concurrency
            ));
        }

        if let Some(bad) = config
            .file_extensions
            .iter()
            .find(|ext| ext.len() < 2 || !ext.starts_with('.'))
        {
            return Err(anyhow!(
                "Invalid file extension '{bad}': expected a suffix such as '.pdf'"
            ));
        }

        Ok(config)
    }
}

// Builder methods available at any state
impl<State> ScrapeConfigBuilder<State> {
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.defaults.user_agent = user_agent.into();
        self
    }

    /// Set the per-request timeout in seconds
    ///
    /// # Example
    /// ```rust
    /// # use linkharvest::config::ScrapeConfig;
    /// # fn main() -> anyhow::Result<()> {
    /// let config = ScrapeConfig::builder()
    ///     .site_url("https://example.com")
    ///     .request_timeout_secs(10)
    ///     .build()?;
    /// assert_eq!(config.request_timeout_secs(), 10);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.defaults.request_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn max_redirects(mut self, max: usize) -> Self {
        self.defaults.max_redirects = max;
        self
    }

    /// Set how many redirect resolutions may run at once
    ///
    /// A value of 1 resolves article links one after another.
    #[must_use]
    pub fn redirect_concurrency(mut self, concurrency: usize) -> Self {
        self.defaults.redirect_concurrency = concurrency;
        self
    }

    #[must_use]
    pub fn file_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.defaults.file_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.defaults.topics = topics.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn content_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.defaults.content_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn display_link_base(mut self, base: impl Into<String>) -> Self {
        self.defaults.display_link_base = base.into();
        self
    }
}
