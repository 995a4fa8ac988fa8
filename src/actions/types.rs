//! Outcome and error types for user actions

use thiserror::Error;

use crate::fetcher::FetchError;
use crate::utils::MAX_LISTING_PAGE;

pub const ARTICLES_FOUND: &str = "'Article' links fetched successfully!";
pub const ARTICLES_EMPTY: &str = "No Article links found.";
pub const FILES_FOUND: &str = "Files fetched successfully!";
pub const FILES_EMPTY: &str = "No files found.";

/// Why an action produced no links
#[derive(Debug, Error)]
pub enum ActionError {
    /// No topic was chosen; raised before any request is sent
    #[error("Please select a valid topic.")]
    MissingTopic,

    /// The chosen topic is not one of the configured topics
    #[error("Please select a valid topic. '{0}' is not a featured topic.")]
    UnknownTopic(String),

    /// The listing page number is outside the range the form offers
    #[error("Please choose a page between 1 and {max}, not {0}.", max = MAX_LISTING_PAGE)]
    InvalidPage(u32),

    /// The URL field was blank or unusable; raised before any request is sent
    #[error("Please enter a valid URL.")]
    MissingUrl,

    /// The page could not be fetched
    #[error("Error fetching the URL: {0}")]
    Fetch(#[from] FetchError),
}

impl ActionError {
    /// True for input problems caught before touching the network
    #[must_use]
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Fetch(_))
    }
}

/// Links produced by a successful fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// The page was reachable and these links matched
    Found(Vec<String>),
    /// The page was reachable but nothing matched
    Empty,
}

impl LinkOutcome {
    pub(crate) fn from_links(links: Vec<String>) -> Self {
        if links.is_empty() {
            Self::Empty
        } else {
            Self::Found(links)
        }
    }

    #[must_use]
    pub fn links(&self) -> &[String] {
        match self {
            Self::Found(links) => links,
            Self::Empty => &[],
        }
    }
}

/// Severity of the message shown for an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// What the operator sees after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReport {
    pub level: NoticeLevel,
    pub message: String,
    pub links: Vec<String>,
}

impl ActionReport {
    pub fn success(message: impl Into<String>, links: Vec<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
            links,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
            links: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
            links: Vec::new(),
        }
    }

    /// Convert an action result into a report with the given messages
    pub(crate) fn from_result(
        result: Result<LinkOutcome, ActionError>,
        found: &str,
        empty: &str,
    ) -> Self {
        match result {
            Ok(LinkOutcome::Found(links)) => Self::success(found, links),
            Ok(LinkOutcome::Empty) => Self::warning(empty),
            Err(e) => Self::error(e.to_string()),
        }
    }
}
