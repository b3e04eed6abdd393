//! Wire types shared across the engine
//!
//! These mirror the NewsAPI v2 JSON format. Nearly every article field is
//! optional on the wire; the only structural requirement is that a page
//! carries `totalResults` and an `articles` array.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Articles
// ============================================================================

/// The publication an article came from.
///
/// `id` is absent for sources NewsAPI has no catalog entry for. Absence is a
/// valid state meaning the article has no drill-through target.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArticleSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// A single item in the result list
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub source: Option<ArticleSource>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub content: Option<String>,
}

impl Article {
    /// Whether this article can be drilled into (opened on its own screen).
    ///
    /// Only articles whose source has a catalog id are navigable.
    pub fn has_detail_target(&self) -> bool {
        self.source
            .as_ref()
            .is_some_and(|source| source.id.is_some())
    }
}

// ============================================================================
// Pages
// ============================================================================

/// One page of results as returned by a single fetch call
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsPage {
    /// Response status tag ("ok" on success)
    #[serde(default)]
    pub status: Option<String>,
    /// Total matching results reported by the server, across all pages
    #[serde(default)]
    pub total_results: u32,
    /// Articles in this page, in server order
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// Error envelope returned by the API on non-success responses
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

// ============================================================================
// Feed queries
// ============================================================================

/// Identifies which feed a controller drives and its parameters.
///
/// The two variants map to the two screens of a news reader: the breaking
/// news feed (top headlines for a country) and the search feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedQuery {
    /// Top headlines for a country code (e.g. "us")
    Breaking { country: String },
    /// Free-text search. May be empty; the engine forwards it verbatim.
    Search { query: String },
}

impl FeedQuery {
    /// Create a breaking-news query
    pub fn breaking(country: impl Into<String>) -> Self {
        Self::Breaking {
            country: country.into(),
        }
    }

    /// Create a search query
    pub fn search(query: impl Into<String>) -> Self {
        Self::Search {
            query: query.into(),
        }
    }
}
