//! Test utilities and helper functions for the linkharvest test suite

use linkharvest::ScrapeConfig;
use mockito::{Mock, Server, ServerGuard};

/// An address nothing listens on; requests to it fail with connection refused
#[allow(dead_code)]
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1/unreachable";

/// Creates a test HTML document with specified body content
#[allow(dead_code)]
pub fn create_test_html(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
</head>
<body>
    {body}
</body>
</html>"#
    )
}

/// Creates a listing page with the given `(href, text)` anchors
#[allow(dead_code)]
pub fn create_listing_html(anchors: &[(&str, &str)]) -> String {
    let body = anchors
        .iter()
        .map(|(href, text)| format!(r#"<div class="card"><a href="{href}">{text}</a></div>"#))
        .collect::<Vec<_>>()
        .join("\n    ");
    create_test_html("Listing", &body)
}

/// Sets up a mock HTTP server
#[allow(dead_code)]
pub async fn setup_mock_server() -> ServerGuard {
    Server::new_async().await
}

/// Creates a mock endpoint that returns HTML content
#[allow(dead_code)]
pub async fn create_html_mock(server: &mut Server, path: &str, html: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(html)
        .create_async()
        .await
}

/// Creates a mock endpoint that redirects to `to` (a path on the same server)
#[allow(dead_code)]
pub async fn create_redirect_mock(server: &mut Server, from: &str, to: &str) -> Mock {
    let location = test_url(server, to);
    server
        .mock("GET", from)
        .with_status(301)
        .with_header("location", &location)
        .create_async()
        .await
}

/// Creates a mock endpoint that returns an error status
#[allow(dead_code)]
pub async fn create_error_mock(server: &mut Server, path: &str, status: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_body("Error")
        .create_async()
        .await
}

/// Helper to create test URLs
#[allow(dead_code)]
pub fn test_url(server: &Server, path: &str) -> String {
    format!("{}{}", server.url(), path)
}

/// Creates a test configuration pointed at the mock server
#[allow(dead_code)]
pub fn create_test_config(server: &Server) -> ScrapeConfig {
    ScrapeConfig::builder()
        .site_url(server.url())
        .request_timeout_secs(5)
        .content_prefix(test_url(server, "/content/"))
        .build()
        .expect("Failed to create test config")
}
