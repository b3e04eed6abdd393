//! Tests for the pagination module

use super::*;
use test_case::test_case;

fn end_of_list(total: u32) -> ScrollMetrics {
    ScrollMetrics {
        first_visible_index: (total as i32 - 5).max(0),
        visible_count: 5,
        total_item_count: total,
    }
}

// ============================================================================
// PageCursor Tests
// ============================================================================

#[test]
fn test_cursor_starts_at_page_one_idle() {
    let cursor = PageCursor::new(20);
    assert_eq!(cursor.current_page(), 1);
    assert_eq!(cursor.phase(), FeedPhase::Idle);
    assert!(!cursor.is_loading());
    assert!(!cursor.is_last_page());
}

#[test]
fn test_cursor_advances_one_page_per_merge() {
    let mut cursor = PageCursor::new(20);

    for expected_page in 1..=4 {
        assert_eq!(cursor.current_page(), expected_page);
        assert!(cursor.begin_fetch());
        cursor.complete(1000);
    }
    assert_eq!(cursor.current_page(), 5);
}

#[test]
fn test_begin_fetch_suppressed_while_loading() {
    let mut cursor = PageCursor::new(20);
    assert!(cursor.begin_fetch());
    // Second request while in flight must be suppressed, not queued.
    assert!(!cursor.begin_fetch());
    assert_eq!(cursor.phase(), FeedPhase::Loading);
}

#[test]
fn test_failed_fetch_does_not_advance() {
    let mut cursor = PageCursor::new(20);
    assert!(cursor.begin_fetch());
    cursor.fail();

    assert_eq!(cursor.phase(), FeedPhase::Error);
    assert_eq!(cursor.current_page(), 1);

    // Error is recoverable: the next trigger retries the same page.
    assert!(cursor.begin_fetch());
    assert_eq!(cursor.current_page(), 1);
    cursor.complete(1000);
    assert_eq!(cursor.current_page(), 2);
}

// totalResults = 95, pageSize = 20: the flag turns true after merging
// page 6 (6 == 95/20 + 2) and not a page earlier.
#[test_case(5, false ; "page five is not last")]
#[test_case(6, true ; "page six is last")]
fn test_last_page_detection(pages_to_fetch: u32, expect_last: bool) {
    let mut cursor = PageCursor::new(20);
    for _ in 0..pages_to_fetch {
        assert!(cursor.begin_fetch());
        cursor.complete(95);
    }
    assert_eq!(cursor.is_last_page(), expect_last);
}

#[test]
fn test_no_fetch_after_last_page() {
    let mut cursor = PageCursor::new(20);
    for _ in 0..6 {
        assert!(cursor.begin_fetch());
        cursor.complete(95);
    }
    assert!(cursor.is_last_page());
    assert!(!cursor.begin_fetch());
}

// ============================================================================
// ScrollGuard Tests
// ============================================================================

#[test]
fn test_guard_fires_at_end_of_list_after_drag() {
    let cursor = PageCursor::new(20);
    let mut guard = ScrollGuard::new(20);

    guard.note_drag();
    assert!(guard.should_paginate(&cursor, &end_of_list(20)));
}

#[test]
fn test_guard_suppressed_while_loading() {
    let mut cursor = PageCursor::new(20);
    let mut guard = ScrollGuard::new(20);

    assert!(cursor.begin_fetch());
    guard.note_drag();
    // Loading wins over any scroll metrics.
    assert!(!guard.should_paginate(&cursor, &end_of_list(20)));
}

#[test]
fn test_guard_suppressed_on_last_page() {
    // Drive to the last page and verify the guard goes quiet.
    let mut cursor = PageCursor::new(20);
    for _ in 0..6 {
        assert!(cursor.begin_fetch());
        cursor.complete(95);
    }
    let mut guard = ScrollGuard::new(20);
    guard.note_drag();
    assert!(!guard.should_paginate(&cursor, &end_of_list(120)));
}

#[test]
fn test_guard_requires_viewport_at_end() {
    let cursor = PageCursor::new(20);
    let mut guard = ScrollGuard::new(20);
    guard.note_drag();

    let mid_list = ScrollMetrics {
        first_visible_index: 2,
        visible_count: 5,
        total_item_count: 40,
    };
    assert!(!guard.should_paginate(&cursor, &mid_list));
    // The latch stays armed until the guard actually fires.
    assert!(guard.is_armed());
}

#[test]
fn test_guard_rejects_invalid_first_index() {
    let cursor = PageCursor::new(20);
    let mut guard = ScrollGuard::new(20);
    guard.note_drag();

    let empty = ScrollMetrics {
        first_visible_index: -1,
        visible_count: 0,
        total_item_count: 0,
    };
    assert!(!guard.should_paginate(&cursor, &empty));
}

#[test]
fn test_guard_waits_for_first_full_page() {
    let cursor = PageCursor::new(20);
    let mut guard = ScrollGuard::new(20);
    guard.note_drag();

    // 12 items < page size: too early to paginate even at the end.
    let short_list = ScrollMetrics {
        first_visible_index: 7,
        visible_count: 5,
        total_item_count: 12,
    };
    assert!(!guard.should_paginate(&cursor, &short_list));
}

#[test]
fn test_drag_latch_is_one_shot() {
    let cursor = PageCursor::new(20);
    let mut guard = ScrollGuard::new(20);

    // No drag yet: inertial scroll to the end must not fire.
    assert!(!guard.should_paginate(&cursor, &end_of_list(20)));

    guard.note_drag();
    assert!(guard.should_paginate(&cursor, &end_of_list(20)));
    // Latch cleared by the fire; the same scroll position stays quiet.
    assert!(!guard.is_armed());
    assert!(!guard.should_paginate(&cursor, &end_of_list(20)));
}
