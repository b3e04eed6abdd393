//! Pagination module
//!
//! The pagination state machine and the scroll guard.
//!
//! # Overview
//!
//! [`PageCursor`] tracks which page to fetch next and whether a fetch is in
//! flight, as an explicit four-phase state machine rather than a bundle of
//! boolean flags. [`ScrollGuard`] evaluates viewport positions against the
//! cursor and a one-shot drag latch to decide when the next page should be
//! requested.

mod cursor;
mod guard;

pub use cursor::{FeedPhase, PageCursor};
pub use guard::{ScrollGuard, ScrollMetrics};

#[cfg(test)]
mod tests;
