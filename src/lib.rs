//! # recipe-sweep
//!
//! Maintenance passes for a self-hosted recipe-management service.
//!
//! Each pass is a single idempotent fetch-filter-mutate sweep over one of
//! the service's collections, run through its HTTP API:
//!
//! - report recipes missing tools, categories or linked ingredients
//! - attach the Oven tool where instructions mention an oven
//! - attach meal categories by keyword
//! - merge duplicate food entities
//! - enrich foods with aliases and descriptions from a public knowledge base
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use recipe_sweep::api::RecipesApi;
//! use recipe_sweep::config::Settings;
//! use recipe_sweep::tasks;
//!
//! #[tokio::main]
//! async fn main() -> recipe_sweep::Result<()> {
//!     let api = RecipesApi::new(Settings::from_env()?);
//!     tasks::list_missing_tools(&api).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! cli ─► tasks ─► api ─► http
//!          │        │
//!          │        └─► pagination (collection walker)
//!          ├─► sweep (scan-and-patch driver)
//!          └─► enrich (knowledge-base lookup)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Process configuration
pub mod config;

/// HTTP transport
pub mod http;

/// Paginated collection walker
pub mod pagination;

/// Scan-and-patch driver
pub mod sweep;

/// Recipe-service API client
pub mod api;

/// Public knowledge-base lookup
pub mod enrich;

/// Maintenance passes
pub mod tasks;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
