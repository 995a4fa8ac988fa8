//! Link resolution and filtering
//!
//! Turns extracted anchors into absolute, deduplicated URLs. Hrefs are joined
//! against the page URL with standard URL-joining rules: relative hrefs take
//! the page's scheme, host and path, and an href of only `#fragment` resolves
//! to the page itself (plus the fragment). Absolute http(s) hrefs are kept
//! exactly as written.
//!
//! Two filters sit on top of the join:
//! - [`article_links`] keeps anchors whose text is exactly `read more`
//! - [`file_links`] keeps URLs ending in one of the given suffixes

use log::debug;
use std::collections::BTreeSet;
use url::Url;

use crate::page_extractor::{AnchorRecord, normalize_text};
use crate::utils::{READ_MORE_TEXT, has_host};

/// Deduplicated set of absolute URLs
///
/// Ordered by URL string so repeated displays of the same result are stable;
/// the order carries no meaning beyond that.
pub type LinkSet = BTreeSet<String>;

/// Join `href` against `base`, returning an absolute URL with a host
///
/// An href that is already an absolute http(s) URL is returned verbatim,
/// without the host lower-casing or path normalisation a join applies.
/// Returns `None` when the join fails or yields a URL without a host
/// (`mailto:`, `javascript:`, `data:` and similar).
#[must_use]
pub fn resolve_href(base: &Url, href: &str) -> Option<String> {
    if is_absolute_http(href) {
        return Some(href.to_string());
    }

    match base.join(href) {
        Ok(resolved) if has_host(&resolved) => Some(resolved.to_string()),
        Ok(resolved) => {
            debug!(
                target: "linkharvest::links",
                "Dropping {resolved}: no host after joining '{href}'"
            );
            None
        }
        Err(e) => {
            debug!(
                target: "linkharvest::links",
                "Failed to join '{href}' against {base}: {e}"
            );
            None
        }
    }
}

fn is_absolute_http(href: &str) -> bool {
    href == href.trim()
        && Url::parse(href)
            .is_ok_and(|url| matches!(url.scheme(), "http" | "https") && has_host(&url))
}

/// True when `text` reads exactly "read more" once trimmed and lower-cased
#[must_use]
pub fn is_read_more(text: &str) -> bool {
    normalize_text(text) == READ_MORE_TEXT
}

/// True when `url` ends with one of `extensions`
///
/// A `None` or empty list accepts every URL. The comparison is a plain,
/// case-sensitive suffix match on the URL text.
#[must_use]
pub fn matches_extension(url: &str, extensions: Option<&[String]>) -> bool {
    match extensions {
        Some(exts) if !exts.is_empty() => exts.iter().any(|ext| url.ends_with(ext.as_str())),
        _ => true,
    }
}

/// Resolve every "read more" anchor against `base`
#[must_use]
pub fn article_links(base: &Url, anchors: &[AnchorRecord]) -> LinkSet {
    let links: LinkSet = anchors
        .iter()
        .filter(|anchor| is_read_more(&anchor.text))
        .filter_map(|anchor| resolve_href(base, &anchor.href))
        .collect();

    debug!(
        target: "linkharvest::links",
        "Found {} anchors on {}, {} article links after filtering",
        anchors.len(),
        base,
        links.len()
    );

    links
}

/// Resolve every anchor against `base` and keep the ones matching `extensions`
#[must_use]
pub fn file_links(base: &Url, anchors: &[AnchorRecord], extensions: Option<&[String]>) -> LinkSet {
    let links: LinkSet = anchors
        .iter()
        .filter_map(|anchor| resolve_href(base, &anchor.href))
        .filter(|url| matches_extension(url, extensions))
        .collect();

    debug!(
        target: "linkharvest::links",
        "Found {} anchors on {}, {} file links after filtering",
        anchors.len(),
        base,
        links.len()
    );

    links
}
