//! Remote fetch client
//!
//! The engine's only outbound dependency: given a feed query and a page
//! number, return one page of articles or a classified error.
//!
//! [`FetchClient`] is the seam controllers are written against;
//! [`NewsApiClient`] is the production implementation over the NewsAPI v2
//! HTTP endpoints.

mod news_api;

pub use news_api::NewsApiClient;

use crate::error::Result;
use crate::types::{FeedQuery, NewsPage};
use async_trait::async_trait;

/// Fetches one page of articles for a feed query.
///
/// Implementations must classify failures into the engine's error taxonomy:
/// transport failures for I/O-level problems, conversion failures for
/// undecodable responses, and server failures (with the server's message)
/// for non-success responses. Connectivity is checked by the caller, not
/// here.
#[async_trait]
pub trait FetchClient: Send + Sync {
    /// Fetch the given one-based page for a query
    async fn fetch_page(&self, query: &FeedQuery, page: u32) -> Result<NewsPage>;
}
