//! Shared configuration constants for linkharvest
//!
//! This module contains default values and configuration constants used
//! throughout the codebase to ensure consistency and avoid magic numbers.

/// Root of the content site the article listings are built against
pub const DEFAULT_SITE_URL: &str = "https://marketsrecon.com";

/// User agent sent with every outbound request
///
/// A bare browser token is enough to get past the basic bot filtering
/// that rejects requests carrying the reqwest default agent.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Default per-request timeout: 30 seconds
///
/// Applies to page fetches and to each redirect resolution individually.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum number of redirects followed before a request is abandoned
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Default number of redirect resolutions in flight at once
pub const DEFAULT_REDIRECT_CONCURRENCY: usize = 4;

/// Upper bound accepted for `redirect_concurrency`
pub const MAX_REDIRECT_CONCURRENCY: usize = 32;

/// Highest listing page the article form lets the operator pick
pub const MAX_LISTING_PAGE: u32 = 50;

/// Anchor text (already trimmed and lower-cased) that marks an article link
pub const READ_MORE_TEXT: &str = "read more";

/// Path prefix stripped from resolved article URLs before display
pub const DEFAULT_CONTENT_PREFIX: &str = "https://marketsrecon.com/content/";

/// Redirect endpoint that display links are built on; the slug is appended as-is
pub const DEFAULT_DISPLAY_LINK_BASE: &str =
    "https://marketsrecon.com/redirect?name=app_content&parameters%5Bslug%5D=";

/// File suffixes treated as downloadable files
pub const DEFAULT_FILE_EXTENSIONS: [&str; 10] = [
    ".pdf", ".xlsx", ".docx", ".zip", ".csv", ".jpg", ".mp4", ".rar", ".json", ".py",
];

/// Featured topics offered by the category listing form
pub const FEATURED_TOPICS: [&str; 12] = [
    "macro",
    "portfolio-construction",
    "equities",
    "fixed-income",
    "commodities",
    "private-markets",
    "hedge-funds",
    "indexing-passive",
    "emerging-markets",
    "thematic-megatrends",
    "sustainability",
    "industry",
];
