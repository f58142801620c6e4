//! Process configuration
//!
//! Every maintenance pass needs the same two settings: the base URL of the
//! recipe service and an API bearer token. They are read once, up front,
//! through [`Settings::from_env`]; a missing or unparsable value aborts the
//! process before any remote call is made.

use crate::error::{Error, Result};
use url::Url;

/// Environment variable holding the service base URL
pub const ENV_BASE_URL: &str = "RECIPE_URL";

/// Environment variable holding the API bearer token
pub const ENV_API_TOKEN: &str = "RECIPE_API_TOKEN";

/// Typed process settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the recipe-management service
    pub base_url: Url,
    /// API bearer token
    pub api_token: String,
}

impl Settings {
    /// Build settings from explicit values
    pub fn new(base_url: &str, api_token: &str) -> Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| Error::invalid_env(ENV_BASE_URL, e.to_string()))?;
        if api_token.trim().is_empty() {
            return Err(Error::missing_env(ENV_API_TOKEN));
        }
        Ok(Self {
            base_url,
            api_token: api_token.to_string(),
        })
    }

    /// Load settings from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load settings through a variable lookup function
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = lookup(ENV_BASE_URL)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| Error::missing_env(ENV_BASE_URL))?;
        let api_token = lookup(ENV_API_TOKEN)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| Error::missing_env(ENV_API_TOKEN))?;
        Self::new(&base_url, &api_token)
    }

    /// Human-facing link to a recipe page
    pub fn recipe_link(&self, slug: &str) -> String {
        format!("{}/g/home/r/{slug}", self.base_url.as_str().trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_from_lookup_ok() {
        let vars = env(&[
            (ENV_BASE_URL, "https://recipes.example.com"),
            (ENV_API_TOKEN, "secret"),
        ]);
        let settings = Settings::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(settings.base_url.as_str(), "https://recipes.example.com/");
        assert_eq!(settings.api_token, "secret");
    }

    #[test]
    fn test_missing_base_url() {
        let vars = env(&[(ENV_API_TOKEN, "secret")]);
        let err = Settings::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: RECIPE_URL"
        );
        assert!(err.is_config());
    }

    #[test]
    fn test_missing_token() {
        let vars = env(&[(ENV_BASE_URL, "https://recipes.example.com")]);
        let err = Settings::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: RECIPE_API_TOKEN"
        );
    }

    #[test]
    fn test_empty_values_count_as_missing() {
        let vars = env(&[(ENV_BASE_URL, ""), (ENV_API_TOKEN, "secret")]);
        let err = Settings::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, Error::MissingEnv { .. }));
    }

    #[test]
    fn test_invalid_url() {
        let vars = env(&[(ENV_BASE_URL, "not a url"), (ENV_API_TOKEN, "secret")]);
        let err = Settings::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, Error::InvalidEnv { .. }));
    }

    #[test]
    fn test_recipe_link() {
        let settings = Settings::new("https://recipes.example.com", "t").unwrap();
        assert_eq!(
            settings.recipe_link("beef-stew"),
            "https://recipes.example.com/g/home/r/beef-stew"
        );
    }
}
