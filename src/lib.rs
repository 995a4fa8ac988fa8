pub mod actions;
pub mod catalog;
pub mod config;
pub mod fetcher;
pub mod link_filter;
pub mod page_extractor;
pub mod pipeline;
pub mod redirect;
pub mod session;
pub mod shell;
pub mod utils;

pub use actions::{ActionError, ActionReport, LinkOutcome, NoticeLevel};
pub use catalog::{ListingQuery, SortMode, display_link, listing_url};
pub use config::ScrapeConfig;
pub use fetcher::{FetchError, PageFetcher};
pub use link_filter::{LinkSet, article_links, file_links, resolve_href};
pub use page_extractor::{AnchorRecord, extract_anchors};
pub use pipeline::LinkScraper;
pub use redirect::RedirectResolver;
pub use session::ArticleSession;

/// Fetch the "read more" links on `page_url` with a scraper built from `config`
///
/// # Errors
///
/// Returns a `FetchError` when the client cannot be built or the page cannot be fetched.
pub async fn scrape_article_links(
    config: ScrapeConfig,
    page_url: &str,
) -> Result<LinkSet, FetchError> {
    LinkScraper::new(config)?.article_links(page_url).await
}

/// Fetch the links on `page_url` that end with one of the configured file extensions
///
/// # Errors
///
/// Returns a `FetchError` when the client cannot be built or the page cannot be fetched.
pub async fn scrape_file_links(config: ScrapeConfig, page_url: &str) -> Result<LinkSet, FetchError> {
    let scraper = LinkScraper::new(config)?;
    let extensions = scraper.config().file_extensions().to_vec();
    scraper.file_links(page_url, Some(extensions.as_slice())).await
}
