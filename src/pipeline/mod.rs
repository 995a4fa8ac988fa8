//! The fetch → extract → filter → resolve pipeline
//!
//! `LinkScraper` wires the page fetcher, anchor extractor, link filters and
//! redirect resolver together. It keeps no state between calls apart from
//! the pooled HTTP client.

use log::info;

use crate::config::ScrapeConfig;
use crate::fetcher::{FetchError, PageFetcher, build_client};
use crate::link_filter::{self, LinkSet};
use crate::page_extractor::extract_anchors;
use crate::redirect::RedirectResolver;
use crate::utils::parse_http_url;

/// Scrapes article and file links from single pages
#[derive(Debug, Clone)]
pub struct LinkScraper {
    config: ScrapeConfig,
    fetcher: PageFetcher,
    resolver: RedirectResolver,
}

impl LinkScraper {
    /// Build a scraper whose fetcher and resolver share one HTTP client
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Client` if the client cannot be built.
    pub fn new(config: ScrapeConfig) -> Result<Self, FetchError> {
        let client = build_client(&config)?;
        let fetcher = PageFetcher::with_client(client.clone());
        let resolver = RedirectResolver::with_client(client, config.redirect_concurrency());

        Ok(Self {
            config,
            fetcher,
            resolver,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    /// "Read more" links on `page_url`, each followed through its redirects
    ///
    /// Resolution runs once per distinct link, after deduplication.
    ///
    /// # Errors
    ///
    /// Returns a `FetchError` when the page itself cannot be fetched.
    /// Redirect failures are absorbed and never returned.
    pub async fn article_links(&self, page_url: &str) -> Result<LinkSet, FetchError> {
        let base = parse_page_url(page_url)?;
        let html = self.fetcher.fetch(base.as_str()).await?;

        let anchors = extract_anchors(&html);
        let candidates = link_filter::article_links(&base, &anchors);
        let resolved = self.resolver.resolve_all(candidates).await;

        info!(
            target: "linkharvest::links",
            "{} article links on {}",
            resolved.len(),
            base
        );

        Ok(resolved)
    }

    /// Links on `page_url` whose URL ends with one of `extensions`
    ///
    /// `None` or an empty list returns every resolved link on the page.
    ///
    /// # Errors
    ///
    /// Returns a `FetchError` when the page cannot be fetched.
    pub async fn file_links(
        &self,
        page_url: &str,
        extensions: Option<&[String]>,
    ) -> Result<LinkSet, FetchError> {
        let base = parse_page_url(page_url)?;
        let html = self.fetcher.fetch(base.as_str()).await?;

        let anchors = extract_anchors(&html);
        let links = link_filter::file_links(&base, &anchors, extensions);

        info!(
            target: "linkharvest::links",
            "{} file links on {}",
            links.len(),
            base
        );

        Ok(links)
    }
}

fn parse_page_url(page_url: &str) -> Result<url::Url, FetchError> {
    parse_http_url(page_url).map_err(|e| FetchError::InvalidUrl {
        url: page_url.to_string(),
        reason: e.to_string(),
    })
}
