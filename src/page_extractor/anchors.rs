//! Anchor element extraction
//!
//! Collects every `<a>` element that carries a non-empty `href`, in document
//! order, together with its normalised visible text.

use lazy_static::lazy_static;
use scraper::{Html, Selector};

lazy_static! {
    // Hardcoded and syntactically valid; a parse failure here is a compile-time bug.
    static ref ANCHOR_SELECTOR: Selector =
        Selector::parse("a[href]")
            .expect("BUG: hardcoded CSS selector 'a[href]' is invalid - this is a compile-time bug");
}

/// An anchor found in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorRecord {
    /// The `href` attribute exactly as written in the markup
    pub href: String,
    /// Visible text, trimmed and lower-cased
    pub text: String,
}

impl AnchorRecord {
    /// Create a record, normalising `text` with [`normalize_text`]
    pub fn new(href: impl Into<String>, text: impl AsRef<str>) -> Self {
        Self {
            href: href.into(),
            text: normalize_text(text.as_ref()),
        }
    }
}

/// Trim surrounding whitespace and lower-case
#[must_use]
pub fn normalize_text(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Extract all anchors with a non-empty `href` from `html`
///
/// Text is the concatenation of every text node below the anchor, so
/// `<a>Read <b>More</b></a>` yields `read more`.
#[must_use]
pub fn extract_anchors(html: &str) -> Vec<AnchorRecord> {
    let document = Html::parse_document(html);

    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|element| {
            let href = element.value().attr("href")?;
            if href.is_empty() {
                return None;
            }
            let text: String = element.text().collect();
            Some(AnchorRecord::new(href, text))
        })
        .collect()
}
