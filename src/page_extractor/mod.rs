//! Anchor extraction from fetched HTML
//!
//! Parsing goes through `scraper` (html5ever), which recovers from malformed
//! markup the way browsers do, so extraction never fails outright.

pub mod anchors;

pub use anchors::{AnchorRecord, extract_anchors, normalize_text};
