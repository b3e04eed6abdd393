//! Tests for the merge cache

use super::*;
use crate::types::{Article, ArticleSource, NewsPage};
use pretty_assertions::assert_eq;

fn article(title: &str) -> Article {
    Article {
        source: Some(ArticleSource {
            id: Some("src".to_string()),
            name: Some("Source".to_string()),
        }),
        title: Some(title.to_string()),
        ..Article::default()
    }
}

fn page(total: u32, titles: &[&str]) -> NewsPage {
    NewsPage {
        status: Some("ok".to_string()),
        total_results: total,
        articles: titles.iter().map(|t| article(t)).collect(),
    }
}

#[test]
fn test_first_page_becomes_feed_verbatim() {
    let first = page(95, &["a", "b", "c"]);
    let feed = merge_page(None, first.clone());

    assert_eq!(feed.total_results, first.total_results);
    assert_eq!(feed.articles, first.articles);
}

#[test]
fn test_merge_appends_in_order() {
    let feed = merge_page(None, page(95, &["a", "b"]));
    let feed = merge_page(Some(feed), page(95, &["c", "d"]));

    let titles: Vec<_> = feed
        .articles
        .iter()
        .map(|a| a.title.clone().unwrap())
        .collect();
    assert_eq!(titles, vec!["a", "b", "c", "d"]);
}

#[test]
fn test_merge_is_append_only_across_many_pages() {
    // len after page k == sum of page lengths 1..k
    let pages = vec![
        page(100, &["a", "b", "c"]),
        page(100, &["d"]),
        page(100, &["e", "f"]),
        page(100, &[]),
        page(100, &["g", "h", "i", "j"]),
    ];

    let mut feed: Option<AccumulatedFeed> = None;
    let mut expected_len = 0;
    for p in pages {
        expected_len += p.articles.len();
        let merged = merge_page(feed.take(), p);
        assert_eq!(merged.len(), expected_len);
        feed = Some(merged);
    }
}

#[test]
fn test_latest_total_results_wins() {
    let feed = merge_page(None, page(95, &["a"]));
    let feed = merge_page(Some(feed), page(97, &["b"]));
    assert_eq!(feed.total_results, 97);
}

#[test]
fn test_no_deduplication() {
    // The same article arriving twice accumulates twice. Known behavior,
    // kept deliberately.
    let feed = merge_page(None, page(10, &["a", "b"]));
    let feed = merge_page(Some(feed), page(10, &["b", "c"]));
    assert_eq!(feed.len(), 4);
}

#[test]
fn test_empty_feed_helpers() {
    let feed = AccumulatedFeed::default();
    assert!(feed.is_empty());
    assert_eq!(feed.len(), 0);
}
