//! User actions: the boundary between the form shell and the pipeline
//!
//! Each action validates its input, runs the pipeline once and turns every
//! failure into a message for the operator. Nothing here aborts the process:
//! a fetch error becomes an error notice with no links, an empty result
//! becomes a warning.

pub mod types;

pub use types::{
    ARTICLES_EMPTY, ARTICLES_FOUND, ActionError, ActionReport, FILES_EMPTY, FILES_FOUND,
    LinkOutcome, NoticeLevel,
};

use log::debug;

use crate::catalog::{self, ListingQuery, SortMode};
use crate::fetcher::FetchError;
use crate::pipeline::LinkScraper;
use crate::session::ArticleSession;
use crate::utils::parse_http_url;

/// Fetch the "read more" links of the listing selected by `query`
///
/// On a non-empty result the session's article list is replaced by the new
/// links. An empty result or an error leaves the session untouched.
///
/// # Errors
///
/// Returns `ActionError::MissingTopic` or `ActionError::UnknownTopic` before
/// any request for a blank or unlisted topic, and `ActionError::Fetch` when
/// the listing page cannot be fetched.
pub async fn fetch_article_links(
    scraper: &LinkScraper,
    query: &ListingQuery,
    session: &mut ArticleSession,
) -> Result<LinkOutcome, ActionError> {
    let config = scraper.config();
    let topic = query.topic.trim();

    if topic.is_empty() {
        return Err(ActionError::MissingTopic);
    }
    if !config.topics().is_empty() && !config.has_topic(topic) {
        return Err(ActionError::UnknownTopic(topic.to_string()));
    }
    if query.sort == SortMode::All {
        catalog::validate_page(query.page).map_err(|_| ActionError::InvalidPage(query.page))?;
    }

    let site = parse_http_url(config.site_url()).map_err(|e| FetchError::InvalidUrl {
        url: config.site_url().to_string(),
        reason: e.to_string(),
    })?;
    let normalized = ListingQuery {
        topic: topic.to_string(),
        ..query.clone()
    };
    let listing = catalog::listing_url(&site, &normalized).map_err(|e| {
        FetchError::InvalidUrl {
            url: config.site_url().to_string(),
            reason: e.to_string(),
        }
    })?;

    debug!(
        target: "linkharvest::actions",
        "Fetching article links for topic '{}' ({}) from {}",
        topic,
        query.sort,
        listing
    );

    let links = scraper.article_links(listing.as_str()).await?;
    let outcome = LinkOutcome::from_links(links.into_iter().collect());

    if let LinkOutcome::Found(links) = &outcome {
        session.replace(links.iter().cloned());
    }

    Ok(outcome)
}

/// Fetch the downloadable-file links on `url`, filtered by the configured extensions
///
/// # Errors
///
/// Returns `ActionError::MissingUrl` before any request when `url` is blank,
/// and `ActionError::Fetch` when the page cannot be fetched.
pub async fn fetch_file_links(scraper: &LinkScraper, url: &str) -> Result<LinkOutcome, ActionError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ActionError::MissingUrl);
    }

    let extensions = scraper.config().file_extensions();
    let links = scraper.file_links(url, Some(extensions)).await?;

    Ok(LinkOutcome::from_links(links.into_iter().collect()))
}

/// Run the article action and describe its result for the operator
pub async fn run_article_action(
    scraper: &LinkScraper,
    query: &ListingQuery,
    session: &mut ArticleSession,
) -> ActionReport {
    let result = fetch_article_links(scraper, query, session).await;
    ActionReport::from_result(result, ARTICLES_FOUND, ARTICLES_EMPTY)
}

/// Run the file action and describe its result for the operator
pub async fn run_file_action(scraper: &LinkScraper, url: &str) -> ActionReport {
    let result = fetch_file_links(scraper, url).await;
    ActionReport::from_result(result, FILES_FOUND, FILES_EMPTY)
}

/// Display links for every article currently held in `session`
#[must_use]
pub fn display_links(session: &ArticleSession, scraper: &LinkScraper) -> Vec<String> {
    session
        .article_links()
        .iter()
        .map(|url| catalog::display_link(url, scraper.config()))
        .collect()
}
