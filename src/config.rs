//! Feed configuration
//!
//! One `FeedConfig` is shared by the fetch client (base URL, API key,
//! timeout) and the controller (page size, which also feeds the scroll
//! guard's minimum-item-count check).

use crate::error::{Error, Result};
use std::time::Duration;

/// Fixed page size shared by cursor arithmetic and the scroll guard
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Default per-request deadline
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Configuration for a feed controller and its fetch client
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Base URL of the news API
    pub base_url: String,
    /// API key, sent as the `apiKey` query parameter
    pub api_key: String,
    /// Articles per page
    pub page_size: u32,
    /// Deadline for a single fetch attempt
    pub request_timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: "https://newsapi.org/v2".to_string(),
            api_key: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            user_agent: format!("newsfeed-engine/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl FeedConfig {
    /// Create a new config builder
    pub fn builder() -> FeedConfigBuilder {
        FeedConfigBuilder::default()
    }
}

/// Builder for feed config
#[derive(Debug, Default)]
pub struct FeedConfigBuilder {
    config: FeedConfig,
}

impl FeedConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the page size
    pub fn page_size(mut self, size: u32) -> Self {
        self.config.page_size = size;
        self
    }

    /// Set the per-request deadline
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config.
    ///
    /// Fails if `page_size` is zero: the cursor's last-page arithmetic
    /// divides by it, and the scroll guard's minimum-item-count check would
    /// be meaningless.
    pub fn build(self) -> Result<FeedConfig> {
        if self.config.page_size == 0 {
            return Err(Error::config("page_size must be positive"));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FeedConfig::default();
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.base_url, "https://newsapi.org/v2");
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn test_builder() {
        let config = FeedConfig::builder()
            .base_url("http://localhost:8080")
            .api_key("secret")
            .page_size(50)
            .request_timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.page_size, 50);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = FeedConfig::builder().page_size(0).build().unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert_eq!(
            err.to_string(),
            "Configuration error: page_size must be positive"
        );
    }
}
