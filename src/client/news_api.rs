//! NewsAPI v2 client
//!
//! Endpoints:
//! - breaking news → `GET /top-headlines?country=..`
//! - search → `GET /everything?q=..`
//!
//! Both take `page`, `pageSize` and `apiKey` query parameters.

use super::FetchClient;
use crate::config::FeedConfig;
use crate::error::{Error, Result};
use crate::types::{ApiErrorBody, FeedQuery, NewsPage};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

/// Fetch client for the NewsAPI v2 HTTP API
#[derive(Debug, Clone)]
pub struct NewsApiClient {
    http: Client,
    config: FeedConfig,
}

impl NewsApiClient {
    /// Create a client from a feed config.
    ///
    /// Fails if the base URL does not parse or the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: FeedConfig) -> Result<Self> {
        Url::parse(&config.base_url)?;

        let http = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Build the full URL for an endpoint path
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl FetchClient for NewsApiClient {
    async fn fetch_page(&self, query: &FeedQuery, page: u32) -> Result<NewsPage> {
        let (path, feed_param) = match query {
            FeedQuery::Breaking { country } => ("top-headlines", ("country", country.as_str())),
            FeedQuery::Search { query } => ("everything", ("q", query.as_str())),
        };

        let url = self.endpoint(path);
        debug!(%url, page, "fetching feed page");

        let response = self
            .http
            .get(&url)
            .query(&[feed_param])
            .query(&[
                ("page", page.to_string()),
                ("pageSize", self.config.page_size.to_string()),
                ("apiKey", self.config.api_key.clone()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // The API wraps errors in { status, code, message }; fall back
            // to the HTTP reason phrase when that envelope is absent.
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or_default().to_string());
            warn!(status = status.as_u16(), %message, "server rejected fetch");
            return Err(Error::server(status.as_u16(), message));
        }

        let body: NewsPage = response.json().await?;
        debug!(
            articles = body.articles.len(),
            total = body.total_results,
            "page fetched"
        );
        Ok(body)
    }
}
