//! Integration tests for the page fetcher against a mock HTTP server

use linkharvest::{FetchError, PageFetcher, ScrapeConfig};

mod common;
use common::*;

#[tokio::test]
async fn test_fetch_returns_body_on_success() {
    let mut server = setup_mock_server().await;
    let html = create_test_html("Home", "<p>hello</p>");
    let mock = create_html_mock(&mut server, "/page", &html).await;

    let fetcher = PageFetcher::new(&create_test_config(&server)).unwrap();
    let body = fetcher.fetch(&test_url(&server, "/page")).await.unwrap();

    assert_eq!(body, html);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_sends_fixed_user_agent() {
    let mut server = setup_mock_server().await;
    let mock = server
        .mock("GET", "/ua")
        .match_header("user-agent", "Mozilla/5.0")
        .with_status(200)
        .with_body("ok")
        .create_async()
        .await;

    let fetcher = PageFetcher::new(&create_test_config(&server)).unwrap();
    let body = fetcher.fetch(&test_url(&server, "/ua")).await.unwrap();

    assert_eq!(body, "ok");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_follows_redirects() {
    let mut server = setup_mock_server().await;
    let _redirect = create_redirect_mock(&mut server, "/moved", "/landing").await;
    let _landing = create_html_mock(&mut server, "/landing", "<p>landed</p>").await;

    let fetcher = PageFetcher::new(&create_test_config(&server)).unwrap();
    let body = fetcher.fetch(&test_url(&server, "/moved")).await.unwrap();

    assert_eq!(body, "<p>landed</p>");
}

#[tokio::test]
async fn test_fetch_non_success_status_is_an_error() {
    let mut server = setup_mock_server().await;
    let _mock = create_error_mock(&mut server, "/missing", 404).await;

    let fetcher = PageFetcher::new(&create_test_config(&server)).unwrap();
    let err = fetcher
        .fetch(&test_url(&server, "/missing"))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Status { .. }));
    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
    assert!(!err.is_local());
}

#[tokio::test]
async fn test_fetch_connection_refused_is_a_request_error() {
    let fetcher = PageFetcher::new(&ScrapeConfig::default()).unwrap();

    let err = fetcher.fetch(UNREACHABLE_URL).await.unwrap_err();

    assert!(matches!(err, FetchError::Request { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_fetch_rejects_invalid_urls_without_a_request() {
    let fetcher = PageFetcher::new(&ScrapeConfig::default()).unwrap();

    for url in ["", "not a url", "ftp://example.com/file.zip"] {
        let err = fetcher.fetch(url).await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }), "{url}: {err:?}");
        assert!(err.is_local());
    }
}
