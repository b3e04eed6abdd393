//! Incremental response-merge cache
//!
//! Pages of results accumulate into one growing in-memory result set owned
//! by the controller. The merge is a pure append: no deduplication, no
//! reordering. The article sequence is append-only for the lifetime of a
//! controller, so its length is monotonically non-decreasing.

use crate::types::{Article, NewsPage};
use serde::Serialize;

/// All successfully fetched pages for the current feed, concatenated in
/// fetch order
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccumulatedFeed {
    /// Total matching results as reported by the latest merged page
    pub total_results: u32,
    /// Articles from all merged pages, in fetch order
    pub articles: Vec<Article>,
}

impl AccumulatedFeed {
    /// Seed an accumulated feed from the first page
    pub fn from_page(page: NewsPage) -> Self {
        Self {
            total_results: page.total_results,
            articles: page.articles,
        }
    }

    /// Number of articles accumulated so far
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// Whether nothing has been accumulated yet
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

/// Merge one fetched page into the accumulated result.
///
/// With no existing result the incoming page becomes the accumulated feed
/// verbatim. Otherwise the incoming articles are appended in order and
/// `total_results` is replaced with the incoming page's value (counts are
/// assumed stable across pages of the same query; later pages win).
///
/// The returned feed is the caller's new exclusively-owned state.
pub fn merge_page(existing: Option<AccumulatedFeed>, incoming: NewsPage) -> AccumulatedFeed {
    match existing {
        None => AccumulatedFeed::from_page(incoming),
        Some(mut feed) => {
            feed.total_results = incoming.total_results;
            feed.articles.extend(incoming.articles);
            feed
        }
    }
}

#[cfg(test)]
mod tests;
