//! Paginated collection walker
//!
//! Supports: total-page-count and short-page end detection
//!
//! # Overview
//!
//! Remote collections come back one page at a time. The walker turns a
//! page-fetching operation into a lazy stream of items, hiding the page and
//! page-size bookkeeping from callers. Items are yielded in source order,
//! page 1 first; each page is fetched at most once; a fetch failure
//! surfaces through the stream and ends it.

mod walker;

pub use walker::{collect_all, collect_all_with, walk, walk_with, Page, PageEnd, DEFAULT_PER_PAGE};

#[cfg(test)]
mod tests;
