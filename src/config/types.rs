//! Core configuration types for link scraping
//!
//! This module contains the main `ScrapeConfig` struct that defines the
//! parameters shared by the fetcher, the redirect resolver and the form shell.

use serde::{Deserialize, Serialize};

use crate::utils::{
    DEFAULT_CONTENT_PREFIX, DEFAULT_DISPLAY_LINK_BASE, DEFAULT_FILE_EXTENSIONS,
    DEFAULT_MAX_REDIRECTS, DEFAULT_REDIRECT_CONCURRENCY, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_SITE_URL, DEFAULT_USER_AGENT, FEATURED_TOPICS,
};

/// Main configuration struct for scraping operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Root of the content site that category listings are joined against.
    ///
    /// **INVARIANT:** Always an absolute http(s) URL with a host (checked in builder).
    pub(crate) site_url: String,

    /// Value of the `User-Agent` header on every request
    pub(crate) user_agent: String,

    /// Timeout in seconds applied to each individual request
    ///
    /// Covers page fetches and every redirect resolution separately, so a
    /// batch of N resolutions can take up to N times this long when run
    /// with a concurrency of 1.
    ///
    /// Default: 30 seconds
    pub(crate) request_timeout_secs: u64,

    /// Maximum redirect hops followed per request
    ///
    /// Default: 10
    pub(crate) max_redirects: usize,

    /// Number of redirect resolutions run concurrently
    ///
    /// Set to 1 to resolve article links strictly one after another.
    /// Default: 4, Range: 1-32
    pub(crate) redirect_concurrency: usize,

    /// File suffixes that qualify a link in file mode
    pub(crate) file_extensions: Vec<String>,

    /// Topics offered by the category listing form
    pub(crate) topics: Vec<String>,

    /// Prefix stripped from article URLs when building display links
    pub(crate) content_prefix: String,

    /// Base that the stripped article slug is appended to for display
    pub(crate) display_link_base: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            site_url: DEFAULT_SITE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            redirect_concurrency: DEFAULT_REDIRECT_CONCURRENCY,
            file_extensions: DEFAULT_FILE_EXTENSIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
            topics: FEATURED_TOPICS.iter().map(ToString::to_string).collect(),
            content_prefix: DEFAULT_CONTENT_PREFIX.to_string(),
            display_link_base: DEFAULT_DISPLAY_LINK_BASE.to_string(),
        }
    }
}
