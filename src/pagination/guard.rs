//! Scroll guard
//!
//! Decides, on every scroll-position update, whether the viewport warrants
//! fetching the next page.

use super::cursor::PageCursor;

/// A snapshot of the viewport over the materialized list.
///
/// `first_visible_index` is signed: list widgets report `-1` when the list
/// is empty or no position is resolvable yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollMetrics {
    /// Index of the first visible item, or negative if none
    pub first_visible_index: i32,
    /// Number of items currently visible
    pub visible_count: u32,
    /// Total number of items materialized in the list
    pub total_item_count: u32,
}

/// The pagination predicate with its one-shot drag latch.
///
/// The latch distinguishes user-driven scrolling from programmatic or
/// inertial adjustments: [`ScrollGuard::note_drag`] arms it when a
/// drag-originated scroll is observed, and it is cleared the moment the
/// guard fires so a single drag triggers at most one fetch.
#[derive(Debug, Clone)]
pub struct ScrollGuard {
    page_size: u32,
    drag_latch: bool,
}

impl ScrollGuard {
    /// Create a guard for a feed with the given page size
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size,
            drag_latch: false,
        }
    }

    /// Record that a drag-originated scroll has occurred
    pub fn note_drag(&mut self) {
        self.drag_latch = true;
    }

    /// Whether the drag latch is currently armed
    pub fn is_armed(&self) -> bool {
        self.drag_latch
    }

    /// Evaluate the pagination predicate for one scroll update.
    ///
    /// True iff all of the following hold:
    ///
    /// 1. no fetch is in flight and the last page has not been reached,
    /// 2. the viewport reaches the end of the materialized list,
    /// 3. the list is non-empty (a valid first visible position exists),
    /// 4. at least one full page has been materialized,
    /// 5. a drag has occurred since the guard last fired.
    ///
    /// Clears the drag latch when (and only when) it returns true.
    pub fn should_paginate(&mut self, cursor: &PageCursor, metrics: &ScrollMetrics) -> bool {
        let not_loading_not_last = !cursor.is_loading() && !cursor.is_last_page();
        let at_last_item = metrics.first_visible_index.saturating_add(metrics.visible_count as i32)
            >= metrics.total_item_count as i32;
        let not_at_beginning = metrics.first_visible_index >= 0;
        let at_least_one_page = metrics.total_item_count >= self.page_size;

        let fire = not_loading_not_last
            && at_last_item
            && not_at_beginning
            && at_least_one_page
            && self.drag_latch;

        if fire {
            self.drag_latch = false;
        }
        fire
    }
}
