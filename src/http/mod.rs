//! HTTP client module
//!
//! Provides the single-attempt HTTP client and the page fetcher built on it.
//!
//! # Features
//!
//! - **One attempt per request**: no retry, no backoff
//! - **Strict status check**: anything but 200 is an error
//! - **GET only**: every page is a GET against the base URL
//! - **Continuation tokens**: merged into the base URL's query string

mod client;
mod fetcher;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use fetcher::{page_url, PageFetcher, PageSource};

#[cfg(test)]
mod tests;
