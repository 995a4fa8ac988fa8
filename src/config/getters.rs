//! Getter methods for `ScrapeConfig`
//!
//! This module provides all the accessor methods for retrieving configuration
//! values from a `ScrapeConfig` instance.

use std::time::Duration;

use super::types::ScrapeConfig;

impl ScrapeConfig {
    #[must_use]
    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    #[must_use]
    pub fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
    }

    /// Per-request timeout as a `Duration`
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    #[must_use]
    pub fn max_redirects(&self) -> usize {
        self.max_redirects
    }

    #[must_use]
    pub fn redirect_concurrency(&self) -> usize {
        self.redirect_concurrency
    }

    #[must_use]
    pub fn file_extensions(&self) -> &[String] {
        &self.file_extensions
    }

    #[must_use]
    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    /// True when `topic` is one of the configured featured topics
    #[must_use]
    pub fn has_topic(&self, topic: &str) -> bool {
        self.topics.iter().any(|t| t == topic)
    }

    #[must_use]
    pub fn content_prefix(&self) -> &str {
        &self.content_prefix
    }

    #[must_use]
    pub fn display_link_base(&self) -> &str {
        &self.display_link_base
    }
}
