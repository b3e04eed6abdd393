//! Feed state channel
//!
//! A single-slot, latest-value publish point carrying the tagged feed state
//! to whatever renders it. Built on `tokio::sync::watch`: subscribers always
//! observe the latest published value and intermediate states are not
//! buffered.
//!
//! Every fetch attempt publishes `Loading` first and then exactly one
//! terminal state (`Success` or `Error`). The ordering guarantee is program
//! order: the controller publishes from a single logical task, so a Loading
//! can never be observed after its terminal state.

use crate::cache::AccumulatedFeed;
use std::sync::Arc;
use tokio::sync::watch;

/// Tagged state of a feed as observed by renderers
#[derive(Debug, Clone, Default)]
pub enum FeedState {
    /// Nothing has been published yet (initial slot value only)
    #[default]
    Idle,
    /// A fetch attempt is in flight
    Loading,
    /// The latest attempt succeeded; carries the full accumulated feed
    Success(Arc<AccumulatedFeed>),
    /// The latest attempt failed, with a user-facing message
    Error(String),
}

impl FeedState {
    /// Whether this is the Loading state
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Whether this is a Success state
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Whether this is an Error state
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The accumulated feed, if this is a Success state
    pub fn data(&self) -> Option<&AccumulatedFeed> {
        match self {
            Self::Success(feed) => Some(feed),
            _ => None,
        }
    }

    /// The error message, if this is an Error state
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Single-slot publisher for feed states
#[derive(Debug)]
pub struct FeedChannel {
    tx: watch::Sender<FeedState>,
}

impl Default for FeedChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedChannel {
    /// Create a channel seeded with [`FeedState::Idle`]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(FeedState::Idle);
        Self { tx }
    }

    /// Publish a new state, replacing the slot value.
    ///
    /// Publishes succeed even with no live subscribers; a renderer that
    /// attaches later still sees the latest value.
    pub fn publish(&self, state: FeedState) {
        self.tx.send_replace(state);
    }

    /// Subscribe to state updates
    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.tx.subscribe()
    }

    /// Snapshot of the latest published state
    pub fn latest(&self) -> FeedState {
        self.tx.borrow().clone()
    }
}

#[cfg(test)]
mod tests;
