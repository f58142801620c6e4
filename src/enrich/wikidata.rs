//! Wikidata-backed alias source
//!
//! Two-step keyed lookup against the public entity API: search the name for
//! the best-matching item, then fetch that item's English aliases and
//! description.

use super::{AliasSource, EnrichError, KnowledgeEntry};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

const DEFAULT_ENDPOINT: &str = "https://www.wikidata.org";

/// Entity lookup client for the public Wikidata API
pub struct WikidataSource {
    client: Client,
    endpoint: String,
}

impl WikidataSource {
    /// Create a source against the public endpoint
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Create a source against a custom endpoint
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .user_agent(format!("recipe-sweep/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build HTTP client");
        Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        }
    }

    async fn get_json(&self, query: &[(&str, &str)]) -> Result<Value, EnrichError> {
        let url = format!("{}/w/api.php", self.endpoint);
        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(EnrichError::Status(status.as_u16()));
        }
        let body: Value = response
            .json()
            .await
            .map_err(|e| EnrichError::Malformed(e.to_string()))?;
        Ok(body)
    }

    /// Search for the entity id best matching `name`
    async fn search_entity(&self, name: &str) -> Result<Option<String>, EnrichError> {
        let body = self
            .get_json(&[
                ("action", "wbsearchentities"),
                ("search", name),
                ("language", "en"),
                ("type", "item"),
                ("format", "json"),
            ])
            .await?;

        let hits = body
            .get("search")
            .and_then(Value::as_array)
            .ok_or_else(|| EnrichError::Malformed("missing 'search' array".to_string()))?;

        Ok(hits
            .first()
            .and_then(|hit| hit.get("id"))
            .and_then(Value::as_str)
            .map(String::from))
    }

    /// Fetch English aliases and description for an entity id
    async fn fetch_entry(&self, entity_id: &str) -> Result<KnowledgeEntry, EnrichError> {
        let body = self
            .get_json(&[
                ("action", "wbgetentities"),
                ("ids", entity_id),
                ("props", "aliases|descriptions"),
                ("languages", "en"),
                ("format", "json"),
            ])
            .await?;

        let entity = body
            .get("entities")
            .and_then(|e| e.get(entity_id))
            .ok_or_else(|| {
                EnrichError::Malformed(format!("missing entity '{entity_id}' in response"))
            })?;

        let aliases = entity
            .get("aliases")
            .and_then(|a| a.get("en"))
            .and_then(Value::as_array)
            .map(|list| {
                list.iter()
                    .filter_map(|a| a.get("value").and_then(Value::as_str))
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let description = entity
            .get("descriptions")
            .and_then(|d| d.get("en"))
            .and_then(|d| d.get("value"))
            .and_then(Value::as_str)
            .map(String::from);

        Ok(KnowledgeEntry {
            aliases,
            description,
        })
    }
}

impl Default for WikidataSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AliasSource for WikidataSource {
    async fn lookup(&self, name: &str) -> Result<Option<KnowledgeEntry>, EnrichError> {
        let Some(entity_id) = self.search_entity(name).await? else {
            return Ok(None);
        };
        debug!("'{name}' resolved to entity {entity_id}");
        let entry = self.fetch_entry(&entity_id).await?;
        Ok(Some(entry))
    }
}
