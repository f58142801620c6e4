//! Tests for the pagination walker

use super::*;
use crate::error::{Error, Result};
use futures::StreamExt;
use pretty_assertions::assert_eq;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// In-memory page source over `0..total`, counting fetches
fn page_source(
    total: usize,
    calls: Arc<AtomicUsize>,
) -> impl FnMut(u32, u32) -> std::pin::Pin<Box<dyn Future<Output = Result<Page<u32>>> + Send>> {
    let data: Vec<u32> = (0..total as u32).collect();
    move |page, per_page| {
        let data = data.clone();
        let calls = calls.clone();
        Box::pin(async move {
            calls.fetch_add(1, Ordering::SeqCst);
            let start = ((page - 1) * per_page) as usize;
            let end = (start + per_page as usize).min(data.len());
            let items = if start >= data.len() {
                Vec::new()
            } else {
                data[start..end].to_vec()
            };
            let total_pages = data.len().div_ceil(per_page as usize) as u32;
            Ok(Page {
                page,
                per_page,
                total: data.len() as u64,
                total_pages,
                items,
            })
        })
    }
}

#[tokio::test]
async fn test_total_pages_yields_all_items_in_order() {
    let calls = Arc::new(AtomicUsize::new(0));
    let items = collect_all_with(page_source(120, calls.clone()), 50, PageEnd::TotalPages)
        .await
        .unwrap();

    assert_eq!(items.len(), 120);
    assert_eq!(items, (0..120).collect::<Vec<_>>());
    // ceil(120 / 50) = 3
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_total_pages_exact_multiple() {
    let calls = Arc::new(AtomicUsize::new(0));
    let items = collect_all_with(page_source(100, calls.clone()), 50, PageEnd::TotalPages)
        .await
        .unwrap();

    assert_eq!(items.len(), 100);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_short_page_exact_multiple_costs_one_extra_fetch() {
    let calls = Arc::new(AtomicUsize::new(0));
    let items = collect_all_with(page_source(100, calls.clone()), 50, PageEnd::ShortPage)
        .await
        .unwrap();

    assert_eq!(items.len(), 100);
    // The short page is only observed after an empty third fetch.
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_short_page_stops_on_partial_page() {
    let calls = Arc::new(AtomicUsize::new(0));
    let items = collect_all_with(page_source(75, calls.clone()), 50, PageEnd::ShortPage)
        .await
        .unwrap();

    assert_eq!(items.len(), 75);
    assert_eq!(items, (0..75).collect::<Vec<_>>());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_empty_collection() {
    let calls = Arc::new(AtomicUsize::new(0));
    let items = collect_all_with(page_source(0, calls.clone()), 50, PageEnd::TotalPages)
        .await
        .unwrap();

    assert!(items.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_default_walk_uses_per_page_50() {
    let calls = Arc::new(AtomicUsize::new(0));
    let items = collect_all(page_source(60, calls.clone())).await.unwrap();

    assert_eq!(DEFAULT_PER_PAGE, 50);
    assert_eq!(items.len(), 60);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_fetch_failure_propagates_after_earlier_pages() {
    let calls = Arc::new(AtomicUsize::new(0));
    let c = calls.clone();
    let fetch = move |page: u32, per_page: u32| {
        let c = c.clone();
        async move {
            c.fetch_add(1, Ordering::SeqCst);
            if page >= 2 {
                return Err(Error::http_status(502, "bad gateway"));
            }
            Ok(Page {
                page,
                per_page,
                total: 80,
                total_pages: 2,
                items: (0..per_page).collect(),
            })
        }
    };

    let mut stream = std::pin::pin!(walk_with(fetch, 50, PageEnd::TotalPages));
    let mut yielded = 0;
    let mut saw_error = false;
    while let Some(next) = stream.next().await {
        match next {
            Ok(_) => yielded += 1,
            Err(err) => {
                assert!(matches!(err, Error::HttpStatus { status: 502, .. }));
                saw_error = true;
                break;
            }
        }
    }

    assert_eq!(yielded, 50);
    assert!(saw_error);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_page_envelope_deserializes_camel_case() {
    let json = serde_json::json!({
        "page": 1,
        "perPage": 50,
        "total": 2,
        "totalPages": 1,
        "items": [{"a": 1}, {"a": 2}]
    });

    let page: Page<serde_json::Value> = serde_json::from_value(json).unwrap();
    assert_eq!(page.per_page, 50);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.items.len(), 2);
}
