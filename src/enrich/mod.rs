//! Public knowledge-base lookup
//!
//! Best-effort enrichment source for food records. A lookup failure never
//! aborts a pass: the caller logs it and moves on to the next item, so the
//! error type here is deliberately narrow — timeout, bad status, transport,
//! malformed body — rather than a catch-all.

mod wikidata;

pub use wikidata::WikidataSource;

use async_trait::async_trait;
use thiserror::Error;

/// What a knowledge-base entry contributes to a food record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeEntry {
    /// Alternate names, in source order
    pub aliases: Vec<String>,
    /// Short English description, if the entry has one
    pub description: Option<String>,
}

/// Failure modes of the knowledge-base integration
#[derive(Error, Debug)]
pub enum EnrichError {
    #[error("knowledge-base request timed out")]
    Timeout,

    #[error("knowledge base returned HTTP {0}")]
    Status(u16),

    #[error("knowledge-base request failed: {0}")]
    Http(reqwest::Error),

    #[error("malformed knowledge-base response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for EnrichError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(err)
        }
    }
}

/// A source of aliases and descriptions for food names
///
/// `Ok(None)` means the source has no entry for the name; that is a normal
/// outcome, not an error.
#[async_trait]
pub trait AliasSource: Send + Sync {
    /// Look up one name
    async fn lookup(&self, name: &str) -> Result<Option<KnowledgeEntry>, EnrichError>;
}
