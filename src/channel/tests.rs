//! Tests for the feed state channel

use super::*;

#[test]
fn test_channel_seeded_idle() {
    let channel = FeedChannel::new();
    assert!(matches!(channel.latest(), FeedState::Idle));
}

#[test]
fn test_subscribers_see_latest_value_only() {
    let channel = FeedChannel::new();
    let rx = channel.subscribe();

    channel.publish(FeedState::Loading);
    channel.publish(FeedState::Error("Network Failure".to_string()));

    // The intermediate Loading was overwritten; only the terminal state
    // remains in the slot.
    assert_eq!(rx.borrow().error_message(), Some("Network Failure"));
}

#[test]
fn test_late_subscriber_sees_current_state() {
    let channel = FeedChannel::new();
    channel.publish(FeedState::Success(Arc::new(AccumulatedFeed::default())));

    let rx = channel.subscribe();
    assert!(rx.borrow().is_success());
}

#[tokio::test]
async fn test_loading_observed_before_terminal() {
    let channel = FeedChannel::new();
    let mut rx = channel.subscribe();

    channel.publish(FeedState::Loading);
    rx.changed().await.unwrap();
    assert!(rx.borrow_and_update().is_loading());

    channel.publish(FeedState::Success(Arc::new(AccumulatedFeed::default())));
    rx.changed().await.unwrap();
    assert!(rx.borrow_and_update().is_success());
}

#[test]
fn test_state_accessors() {
    let feed = Arc::new(AccumulatedFeed {
        total_results: 3,
        articles: Vec::new(),
    });

    let state = FeedState::Success(feed);
    assert!(state.is_success());
    assert_eq!(state.data().unwrap().total_results, 3);
    assert!(state.error_message().is_none());

    let state = FeedState::Error("Conversion Error".to_string());
    assert!(state.is_error());
    assert!(state.data().is_none());
}

#[test]
fn test_publish_without_subscribers_is_ok() {
    let channel = FeedChannel::new();
    channel.publish(FeedState::Loading);
    assert!(channel.latest().is_loading());
}
