//! Page fetcher
//!
//! Issues one GET request per page against the listing API and decodes the
//! response into a [`PageEnvelope`].

use super::client::{HttpClient, HttpClientConfig};
use crate::config::JobConfig;
use crate::decode::decode_page;
use crate::error::Result;
use crate::model::PageEnvelope;
use crate::pagination::CONTINUATION_TOKEN_PARAM;
use async_trait::async_trait;
use url::Url;

/// A source of pages, addressed by continuation token
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch one page; `None` requests the first page
    async fn fetch_page(&self, token: Option<&str>) -> Result<PageEnvelope>;
}

/// URL for a page request
///
/// With a token, any existing `continuationToken` parameter is replaced and
/// all other parameters are kept in order. Without one, the base URL is used
/// unchanged.
pub fn page_url(base: &Url, token: Option<&str>) -> Url {
    let Some(token) = token else {
        return base.clone();
    };

    let retained: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(key, _)| key != CONTINUATION_TOKEN_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut url = base.clone();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(retained)
        .append_pair(CONTINUATION_TOKEN_PARAM, token);
    url
}

/// Fetches listing pages over HTTP
#[derive(Debug)]
pub struct PageFetcher {
    client: HttpClient,
    base_url: Url,
}

impl PageFetcher {
    /// Create a fetcher from a client and base URL
    pub fn new(client: HttpClient, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Build a fetcher from job configuration
    ///
    /// Configured headers become the client's default headers. Pages are
    /// always fetched with GET, whatever `HTTP_METHOD` says.
    pub fn from_config(config: &JobConfig) -> Result<Self> {
        let mut builder = HttpClientConfig::builder().headers(config.headers.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = HttpClient::with_config(builder.build())?;

        Ok(Self::new(client, config.base_url.clone()))
    }
}

#[async_trait]
impl PageSource for PageFetcher {
    async fn fetch_page(&self, token: Option<&str>) -> Result<PageEnvelope> {
        let url = page_url(&self.base_url, token);
        let body = self.client.get(&url).await?;
        decode_page(&body)
    }
}
