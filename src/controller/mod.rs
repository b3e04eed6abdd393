//! Feed controller
//!
//! Wires the connectivity monitor, fetch client, pagination cursor, merge
//! cache and state channel into the control flow of one feed:
//!
//! scroll update → guard → connectivity check → fetch → merge → publish.
//!
//! One controller instance drives one feed (breaking news or search). All
//! state mutation happens through `&mut self`, so a controller is a single
//! logical writer; at most one fetch is in flight and a trigger arriving
//! mid-fetch is suppressed, never queued.

use crate::cache::{merge_page, AccumulatedFeed};
use crate::channel::{FeedChannel, FeedState};
use crate::client::FetchClient;
use crate::config::FeedConfig;
use crate::connectivity::ConnectivityMonitor;
use crate::error::Error;
use crate::pagination::{FeedPhase, PageCursor, ScrollGuard, ScrollMetrics};
use crate::types::FeedQuery;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Controller for one paginated feed
pub struct FeedController {
    query: FeedQuery,
    client: Arc<dyn FetchClient>,
    connectivity: Arc<dyn ConnectivityMonitor>,
    cursor: PageCursor,
    guard: ScrollGuard,
    feed: Option<AccumulatedFeed>,
    channel: FeedChannel,
    request_timeout: Duration,
}

impl FeedController {
    /// Create a controller for a feed query
    pub fn new(
        query: FeedQuery,
        client: Arc<dyn FetchClient>,
        connectivity: Arc<dyn ConnectivityMonitor>,
        config: FeedConfig,
    ) -> Self {
        Self {
            query,
            client,
            connectivity,
            cursor: PageCursor::new(config.page_size),
            guard: ScrollGuard::new(config.page_size),
            feed: None,
            channel: FeedChannel::new(),
            request_timeout: config.request_timeout,
        }
    }

    /// Subscribe to feed state updates
    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.channel.subscribe()
    }

    /// The accumulated feed so far, if any page has been merged
    pub fn feed(&self) -> Option<&AccumulatedFeed> {
        self.feed.as_ref()
    }

    /// The page number the next fetch will request
    pub fn current_page(&self) -> u32 {
        self.cursor.current_page()
    }

    /// Current phase of the pagination state machine
    pub fn phase(&self) -> FeedPhase {
        self.cursor.phase()
    }

    /// Record a drag-originated scroll (arms the guard's one-shot latch)
    pub fn note_drag(&mut self) {
        self.guard.note_drag();
    }

    /// Handle a scroll-position update, fetching the next page when the
    /// guard says so. Returns true if a page was fetched and merged.
    pub async fn on_scroll(&mut self, metrics: ScrollMetrics) -> bool {
        if self.guard.should_paginate(&self.cursor, &metrics) {
            self.fetch_next().await
        } else {
            false
        }
    }

    /// Run one fetch attempt for the next page.
    ///
    /// Publishes `Loading` and then exactly one terminal state. On success
    /// the page is merged into the accumulated feed and the cursor advances;
    /// on any failure the cursor stays put and the error's user message is
    /// published, so the next trigger retries the same page. A call while a
    /// fetch is in flight or after the last page is a silent no-op.
    ///
    /// Returns true iff a page was merged.
    pub async fn fetch_next(&mut self) -> bool {
        if !self.cursor.begin_fetch() {
            debug!(phase = ?self.cursor.phase(), "fetch suppressed");
            return false;
        }

        self.channel.publish(FeedState::Loading);

        if !self.connectivity.has_connection() {
            self.cursor.fail();
            self.channel
                .publish(FeedState::Error(Error::NoConnectivity.user_message()));
            return false;
        }

        let page_number = self.cursor.current_page();
        let fetch = self.client.fetch_page(&self.query, page_number);
        let result = match timeout(self.request_timeout, fetch).await {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout {
                timeout_ms: self.request_timeout.as_millis() as u64,
            }),
        };

        match result {
            Ok(page) => {
                let merged = merge_page(self.feed.take(), page);
                self.cursor.complete(merged.total_results);
                debug!(
                    page = page_number,
                    accumulated = merged.len(),
                    last_page = self.cursor.is_last_page(),
                    "page merged"
                );
                let snapshot = Arc::new(merged.clone());
                self.feed = Some(merged);
                self.channel.publish(FeedState::Success(snapshot));
                true
            }
            Err(err) => {
                warn!(page = page_number, error = %err, "fetch attempt failed");
                self.cursor.fail();
                self.channel.publish(FeedState::Error(err.user_message()));
                false
            }
        }
    }
}

impl std::fmt::Debug for FeedController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedController")
            .field("query", &self.query)
            .field("cursor", &self.cursor)
            .field("accumulated", &self.feed.as_ref().map(AccumulatedFeed::len))
            .finish_non_exhaustive()
    }
}
