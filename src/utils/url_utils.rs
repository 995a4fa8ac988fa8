//! URL validation utilities.
//!
//! Shared checks for the URLs the operator types in and the URLs produced
//! by joining hrefs against a page.

use anyhow::{Result, anyhow};
use url::Url;

/// Parse a URL and require an http(s) scheme with a host
///
/// # Errors
///
/// Returns an error if the string does not parse, uses another scheme,
/// or has no host.
pub fn parse_http_url(input: &str) -> Result<Url> {
    let url = Url::parse(input.trim()).map_err(|e| anyhow!("Failed to parse URL: {e}"))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(anyhow!("Unsupported URL scheme: {}", url.scheme()));
    }
    if !has_host(&url) {
        return Err(anyhow!("Invalid URL: no host"));
    }

    Ok(url)
}

/// True when the URL carries a non-empty host
#[must_use]
pub fn has_host(url: &Url) -> bool {
    url.host_str().is_some_and(|host| !host.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert!(parse_http_url("https://example.com/list").is_ok());
        assert!(parse_http_url("http://example.com").is_ok());
        assert_eq!(
            parse_http_url("  https://example.com/padded  ").unwrap().as_str(),
            "https://example.com/padded"
        );
    }

    #[test]
    fn rejects_blank_and_foreign_schemes() {
        for input in [
            "",
            "   ",
            "mailto:someone@example.com",
            "ftp://example.com/file.zip",
            "example.com/no-scheme",
        ] {
            assert!(parse_http_url(input).is_err(), "{input:?} should be rejected");
        }
    }
}
