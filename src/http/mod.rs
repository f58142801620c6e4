//! HTTP transport
//!
//! Thin wrapper around reqwest shared by the API client and nothing else.
//! Requests carry the bearer token as a default header; non-2xx statuses are
//! classified into typed errors. There are no retries: a failed call
//! surfaces immediately to the caller.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
