//! Configuration module for link scraping
//!
//! This module provides the `ScrapeConfig` struct and its type-safe builder
//! for configuring the scraping pipeline with validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::{ScrapeConfigBuilder, WithSiteUrl};
pub use types::ScrapeConfig;
