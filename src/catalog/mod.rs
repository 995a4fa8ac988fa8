//! Category listing URLs and display links for the content site
//!
//! The site lists articles per topic under `/category/<topic>-1?page=<n>`,
//! and exposes `latest`, `featured` and `trending` feeds at the root. The
//! sort feeds are not paginated here: the page number only applies to the
//! `All` listing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::config::ScrapeConfig;
use crate::utils::MAX_LISTING_PAGE;

/// Which listing the article links are taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortMode {
    /// Topic category listing, paginated
    #[default]
    All,
    Latest,
    Featured,
    Trending,
}

impl SortMode {
    pub const ALL_MODES: [SortMode; 4] = [
        SortMode::All,
        SortMode::Latest,
        SortMode::Featured,
        SortMode::Trending,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::All => "All",
            SortMode::Latest => "latest",
            SortMode::Featured => "featured",
            SortMode::Trending => "trending",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(SortMode::All),
            "latest" => Ok(SortMode::Latest),
            "featured" => Ok(SortMode::Featured),
            "trending" => Ok(SortMode::Trending),
            other => Err(format!(
                "unknown sort mode '{other}' (expected All, latest, featured or trending)"
            )),
        }
    }
}

/// The article form's current selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingQuery {
    pub topic: String,
    pub sort: SortMode,
    pub page: u32,
}

impl ListingQuery {
    /// Page 1 of the `All` listing for `topic`
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            sort: SortMode::All,
            page: 1,
        }
    }

    #[must_use]
    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

/// Check a listing page number against the range the form offers
///
/// # Errors
///
/// Returns a message when `page` is outside `1..=50`.
pub fn validate_page(page: u32) -> Result<u32, String> {
    if (1..=MAX_LISTING_PAGE).contains(&page) {
        Ok(page)
    } else {
        Err(format!("page must be between 1 and {MAX_LISTING_PAGE}, got {page}"))
    }
}

/// URL of the listing selected by `query` on `site`
///
/// `All` appends `/category/<topic>-1?page=<page>` to the site URL; any
/// other mode appends `/<sort_mode>` and ignores the page.
///
/// # Errors
///
/// Returns a `url::ParseError` if the resulting URL is invalid.
pub fn listing_url(site: &Url, query: &ListingQuery) -> Result<Url, url::ParseError> {
    let base = site.as_str().trim_end_matches('/');
    match query.sort {
        SortMode::All => Url::parse(&format!(
            "{base}/category/{}-1?page={}",
            query.topic.trim(),
            query.page
        )),
        sort => Url::parse(&format!("{base}/{}", sort.as_str())),
    }
}

/// Presentational link for a resolved article URL
///
/// Strips the configured content prefix and appends the remaining slug to
/// the configured redirect base. URLs outside the prefix are appended whole.
#[must_use]
pub fn display_link(article_url: &str, config: &ScrapeConfig) -> String {
    let slug = article_url
        .strip_prefix(config.content_prefix())
        .unwrap_or(article_url);
    format!("{}{}", config.display_link_base(), slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> Url {
        Url::parse("https://marketsrecon.com").unwrap()
    }

    #[test]
    fn all_mode_builds_paginated_category_url() {
        let query = ListingQuery::new("fixed-income").with_page(3);

        let url = listing_url(&site(), &query).unwrap();

        assert_eq!(
            url.as_str(),
            "https://marketsrecon.com/category/fixed-income-1?page=3"
        );
    }

    #[test]
    fn sort_modes_ignore_topic_and_page() {
        for (sort, expected) in [
            (SortMode::Latest, "https://marketsrecon.com/latest"),
            (SortMode::Featured, "https://marketsrecon.com/featured"),
            (SortMode::Trending, "https://marketsrecon.com/trending"),
        ] {
            let query = ListingQuery::new("macro").with_sort(sort).with_page(7);
            assert_eq!(listing_url(&site(), &query).unwrap().as_str(), expected);
        }
    }

    #[test]
    fn site_path_prefix_is_kept() {
        let site = Url::parse("https://example.com/markets/").unwrap();

        let all = listing_url(&site, &ListingQuery::new("macro")).unwrap();
        let latest =
            listing_url(&site, &ListingQuery::new("macro").with_sort(SortMode::Latest)).unwrap();

        assert_eq!(all.as_str(), "https://example.com/markets/category/macro-1?page=1");
        assert_eq!(latest.as_str(), "https://example.com/markets/latest");
    }

    #[test]
    fn sort_mode_parses_case_insensitively() {
        assert_eq!("All".parse::<SortMode>(), Ok(SortMode::All));
        assert_eq!("LATEST".parse::<SortMode>(), Ok(SortMode::Latest));
        assert_eq!(" trending ".parse::<SortMode>(), Ok(SortMode::Trending));
        assert!("oldest".parse::<SortMode>().is_err());
    }

    #[test]
    fn page_range_is_enforced() {
        assert_eq!(validate_page(1), Ok(1));
        assert_eq!(validate_page(50), Ok(50));
        assert!(validate_page(0).is_err());
        assert!(validate_page(51).is_err());
    }

    #[test]
    fn display_link_rewrites_content_urls() {
        let config = ScrapeConfig::default();

        assert_eq!(
            display_link("https://marketsrecon.com/content/rates-outlook-2025", &config),
            "https://marketsrecon.com/redirect?name=app_content&parameters%5Bslug%5D=rates-outlook-2025"
        );
    }

    #[test]
    fn display_link_keeps_foreign_urls_whole() {
        let config = ScrapeConfig::default();

        assert_eq!(
            display_link("https://other.com/post", &config),
            "https://marketsrecon.com/redirect?name=app_content&parameters%5Bslug%5D=https://other.com/post"
        );
    }
}
