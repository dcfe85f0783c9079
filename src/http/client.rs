//! HTTP client
//!
//! A thin wrapper around `reqwest` that makes exactly one attempt per
//! request and classifies the outcome:
//! - transport failures (connect, DNS, timeout) surface as [`Error::Http`]
//! - any status other than 200 surfaces as [`Error::HttpStatus`]
//! - the body is always read to the end before returning

use crate::error::{Error, Result};
use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout (`None` = no timeout)
    pub timeout: Option<Duration>,
    /// Default headers for all requests
    pub default_headers: HeaderMap,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            default_headers: HeaderMap::new(),
            user_agent: format!("{}/{}", crate::NAME, crate::VERSION),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Merge default headers
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.config.default_headers.extend(headers);
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Single-attempt HTTP client
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Make a GET request and return the response body
    ///
    /// The configured default headers are attached to every request.
    pub async fn get(&self, url: &Url) -> Result<String> {
        debug!("Sending request: GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .headers(self.config.default_headers.clone())
            .send()
            .await?;

        let status = response.status();
        // Drain the body on every path so the connection can be reused
        let body = response.text().await;

        if status != StatusCode::OK {
            return Err(Error::http_status(
                status.as_u16(),
                body.unwrap_or_default(),
            ));
        }
        let body = body?;

        debug!("Request succeeded: GET {} ({} bytes)", url, body.len());
        Ok(body)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
