//! Tests for the HTTP client module

use super::*;
use crate::config::JobConfig;
use crate::error::Error;
use crate::types::Method;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::json;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn page_body(ids: &[&str], has_next_page: bool, token: &str) -> serde_json::Value {
    json!({
        "count": ids.len(),
        "hasNextPage": has_next_page,
        "nextPageToken": token,
        "data": ids.iter().map(|id| json!({"identifier": id})).collect::<Vec<_>>()
    })
}

fn base_url(server: &MockServer, path: &str) -> Url {
    Url::parse(&format!("{}{path}", server.uri())).unwrap()
}

// ============================================================================
// HttpClientConfig Tests
// ============================================================================

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert!(config.timeout.is_none());
    assert!(config.default_headers.is_empty());
    assert_eq!(
        config.user_agent,
        format!("{}/{}", crate::NAME, crate::VERSION)
    );
}

#[test]
fn test_http_client_config_builder() {
    let mut headers = HeaderMap::new();
    headers.insert("x-custom", HeaderValue::from_static("value"));

    let config = HttpClientConfig::builder()
        .timeout(Duration::from_secs(60))
        .headers(headers)
        .build();

    assert_eq!(config.timeout, Some(Duration::from_secs(60)));
    assert_eq!(config.default_headers.get("x-custom").unwrap(), "value");
}

// ============================================================================
// page_url Tests
// ============================================================================

#[test]
fn test_page_url_first_page_is_base_url() {
    let base = Url::parse("https://api.example.com/lodging?top=50").unwrap();
    assert_eq!(
        page_url(&base, None).as_str(),
        "https://api.example.com/lodging?top=50"
    );
}

#[test]
fn test_page_url_appends_token() {
    let base = Url::parse("https://api.example.com/lodging").unwrap();
    assert_eq!(
        page_url(&base, Some("T2")).as_str(),
        "https://api.example.com/lodging?continuationToken=T2"
    );
}

#[test]
fn test_page_url_keeps_other_params_and_replaces_token() {
    let base =
        Url::parse("https://api.example.com/lodging?top=50&continuationToken=old&lang=de").unwrap();
    let url = page_url(&base, Some("new"));

    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(
        pairs,
        vec![
            ("top".to_string(), "50".to_string()),
            ("lang".to_string(), "de".to_string()),
            ("continuationToken".to_string(), "new".to_string()),
        ]
    );
}

#[test]
fn test_page_url_encodes_token() {
    let base = Url::parse("https://api.example.com/lodging").unwrap();
    let url = page_url(&base, Some("a+b/c=="));
    let token = url
        .query_pairs()
        .find(|(k, _)| k == "continuationToken")
        .map(|(_, v)| v.into_owned());
    assert_eq!(token.as_deref(), Some("a+b/c=="));
}

// ============================================================================
// HttpClient Tests
// ============================================================================

#[tokio::test]
async fn test_http_client_get() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/data"))
        .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
        .mount(&server)
        .await;

    let client = HttpClient::new().unwrap();
    let body = client.get(&base_url(&server, "/api/data")).await.unwrap();
    assert_eq!(body, "hello");
}

#[tokio::test]
async fn test_http_client_sends_default_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/secure"))
        .and(header("x-api-key", "123"))
        .and(header("x-tenant", "dsod"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut headers = HeaderMap::new();
    headers.insert("x-api-key", HeaderValue::from_static("123"));
    headers.insert("x-tenant", HeaderValue::from_static("dsod"));
    let config = HttpClientConfig::builder().headers(headers).build();
    let client = HttpClient::with_config(config).unwrap();

    let result = client.get(&base_url(&server, "/api/secure")).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_http_client_non_200_is_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/created"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&server)
        .await;

    let client = HttpClient::new().unwrap();

    // Success codes other than 200 are rejected too
    let err = client
        .get(&base_url(&server, "/api/created"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 201, .. }));

    let err = client
        .get(&base_url(&server, "/api/missing"))
        .await
        .unwrap_err();
    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "Not found");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_client_does_not_retry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/flaky"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new().unwrap();
    let err = client
        .get(&base_url(&server, "/api/flaky"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 503, .. }));
}

#[tokio::test]
async fn test_http_client_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let config = HttpClientConfig::builder()
        .timeout(Duration::from_millis(100))
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let err = client
        .get(&base_url(&server, "/api/slow"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Http(_)));
    assert!(err.is_fatal());
}

#[tokio::test]
async fn test_http_client_connection_refused() {
    // Bind then drop a listener so the port is closed
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = HttpClient::new().unwrap();
    let err = client
        .get(&Url::parse(&format!("http://127.0.0.1:{port}/api")).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Http(_)));
}

// ============================================================================
// PageFetcher Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_first_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lodging"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&["a", "b"], true, "T2")))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = PageFetcher::new(
        HttpClient::new().unwrap(),
        base_url(&server, "/lodging"),
    );
    let page = fetcher.fetch_page(None).await.unwrap();

    assert_eq!(page.count, 2);
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.continuation(), Some("T2"));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_fetch_with_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lodging"))
        .and(query_param("continuationToken", "T2"))
        .and(query_param("top", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&["c"], false, "")))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = PageFetcher::new(
        HttpClient::new().unwrap(),
        base_url(&server, "/lodging?top=10"),
    );
    let page = fetcher.fetch_page(Some("T2")).await.unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.continuation(), None);
}

#[tokio::test]
async fn test_fetch_ignores_configured_method() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lodging"))
        .and(header("x-api-key", "123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&["a"], false, "")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(405))
        .expect(0)
        .mount(&server)
        .await;

    let config = JobConfig::from_vars(vec![
        ("HTTP_URL".to_string(), format!("{}/lodging", server.uri())),
        ("HTTP_METHOD".to_string(), "POST".to_string()),
        ("HTTP_HEADER_API_KEY".to_string(), "X-API-KEY: 123".to_string()),
    ])
    .unwrap();

    assert_eq!(config.method, Method::POST);

    let fetcher = PageFetcher::from_config(&config).unwrap();
    let page = fetcher.fetch_page(None).await.unwrap();
    assert_eq!(page.data.len(), 1);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method.as_str(), "GET");
}

#[tokio::test]
async fn test_fetch_undecodable_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lodging"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let fetcher = PageFetcher::new(
        HttpClient::new().unwrap(),
        base_url(&server, "/lodging"),
    );
    let err = fetcher.fetch_page(None).await.unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn test_fetch_error_status_with_valid_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lodging"))
        .respond_with(ResponseTemplate::new(500).set_body_json(page_body(&["a"], false, "")))
        .mount(&server)
        .await;

    let fetcher = PageFetcher::new(
        HttpClient::new().unwrap(),
        base_url(&server, "/lodging"),
    );
    let err = fetcher.fetch_page(None).await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
}
