//! Walker implementation
//!
//! The core loop is a `try_unfold`: pop buffered items, fetch the next page
//! when the buffer runs dry, stop once the end rule fires.

use crate::error::Result;
use futures::stream::{self, Stream, TryStreamExt};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::future::Future;

/// Page size used when the caller does not override it
pub const DEFAULT_PER_PAGE: u32 = 50;

/// One page of a remote collection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Page number, 1-based
    #[serde(default)]
    pub page: u32,
    /// Requested page size
    #[serde(default)]
    pub per_page: u32,
    /// Total items across all pages
    #[serde(default)]
    pub total: u64,
    /// Total page count
    #[serde(default)]
    pub total_pages: u32,
    /// Items on this page, in source order
    pub items: Vec<T>,
}

/// How the walker detects the end of the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEnd {
    /// Stop once the reported `total_pages` has been reached.
    ///
    /// Costs exactly `ceil(total / per_page)` fetches.
    TotalPages,
    /// Stop after a page shorter than the requested size.
    ///
    /// For sources that report no total. Costs one extra fetch when the
    /// collection size is an exact multiple of the page size.
    ShortPage,
}

struct WalkState<T, F> {
    fetch: F,
    per_page: u32,
    end: PageEnd,
    page: u32,
    buffer: VecDeque<T>,
    exhausted: bool,
}

/// Walk a paged collection with the default page size and end rule
pub fn walk<T, F, Fut>(fetch: F) -> impl Stream<Item = Result<T>>
where
    F: FnMut(u32, u32) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    walk_with(fetch, DEFAULT_PER_PAGE, PageEnd::TotalPages)
}

/// Walk a paged collection
///
/// `fetch` receives `(page, per_page)` with `page` starting at 1 and is
/// called once per page, suspending the stream for each round trip.
pub fn walk_with<T, F, Fut>(fetch: F, per_page: u32, end: PageEnd) -> impl Stream<Item = Result<T>>
where
    F: FnMut(u32, u32) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let state = WalkState {
        fetch,
        per_page,
        end,
        page: 1,
        buffer: VecDeque::new(),
        exhausted: false,
    };

    stream::try_unfold(state, |mut st| async move {
        loop {
            if let Some(item) = st.buffer.pop_front() {
                return Ok(Some((item, st)));
            }
            if st.exhausted {
                return Ok(None);
            }

            let page = (st.fetch)(st.page, st.per_page).await?;
            match st.end {
                PageEnd::TotalPages => {
                    if page.total_pages <= st.page {
                        st.exhausted = true;
                    }
                }
                PageEnd::ShortPage => {
                    if page.items.len() < st.per_page as usize {
                        st.exhausted = true;
                    }
                }
            }
            st.page += 1;
            st.buffer.extend(page.items);
        }
    })
}

/// Fetch every item of a paged collection into a `Vec`
pub async fn collect_all<T, F, Fut>(fetch: F) -> Result<Vec<T>>
where
    F: FnMut(u32, u32) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    walk(fetch).try_collect().await
}

/// Fetch every item with an explicit page size and end rule
pub async fn collect_all_with<T, F, Fut>(fetch: F, per_page: u32, end: PageEnd) -> Result<Vec<T>>
where
    F: FnMut(u32, u32) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    walk_with(fetch, per_page, end).try_collect().await
}
