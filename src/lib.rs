// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Newsfeed Engine
//!
//! A UI-agnostic pagination and feed-caching engine for news reader clients.
//! The scroll-driven infinite-pagination core of a mobile news app, minus the
//! mobile app.
//!
//! ## Features
//!
//! - **Two feeds, one engine**: breaking-news (by country) and search (by
//!   query) feeds share a single controller implementation
//! - **Scroll-guarded pagination**: a five-condition predicate plus a one-shot
//!   drag latch decides when the next page is fetched
//! - **Incremental merge cache**: pages accumulate into one growing in-memory
//!   result set; retried pages never advance the cursor
//! - **Latest-value state channel**: renderers observe Loading / Success /
//!   Error through a `tokio::sync::watch` slot, Loading strictly first
//! - **Explicit error taxonomy**: connectivity, transport, conversion and
//!   server failures each map to a stable user-facing message
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use newsfeed_engine::{
//!     AlwaysOnline, FeedConfig, FeedController, FeedQuery, NewsApiClient, Result,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = FeedConfig::builder().api_key("...").build()?;
//!     let client = Arc::new(NewsApiClient::new(config.clone())?);
//!
//!     let mut controller = FeedController::new(
//!         FeedQuery::breaking("us"),
//!         client,
//!         Arc::new(AlwaysOnline),
//!         config,
//!     );
//!
//!     let mut states = controller.subscribe();
//!     controller.fetch_next().await;
//!     println!("{:?}", *states.borrow_and_update());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! scroll events ──▶ ScrollGuard ──▶ FeedController ──▶ FeedChannel ──▶ renderer
//!                                   │    │    │
//!                       Connectivity┘    │    └─ AccumulatedFeed (merge cache)
//!                                        │
//!                                  FetchClient (reqwest → NewsAPI)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the engine
pub mod error;

/// Wire types and feed queries
pub mod types;

/// Feed configuration
pub mod config;

/// Connectivity monitoring trait and implementations
pub mod connectivity;

/// Remote fetch client (NewsAPI over reqwest)
pub mod client;

/// Pagination cursor and scroll guard
pub mod pagination;

/// Incremental response-merge cache
pub mod cache;

/// Feed state channel (single-slot latest-value observable)
pub mod channel;

/// Feed controller wiring everything together
pub mod controller;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use cache::{merge_page, AccumulatedFeed};
pub use channel::{FeedChannel, FeedState};
pub use client::{FetchClient, NewsApiClient};
pub use config::{FeedConfig, DEFAULT_PAGE_SIZE};
pub use connectivity::{AlwaysOnline, ConnectivityMonitor, SharedFlag};
pub use controller::FeedController;
pub use pagination::{FeedPhase, PageCursor, ScrollGuard, ScrollMetrics};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
