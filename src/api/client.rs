//! Typed client for the recipe service

use super::types::{CategoryRef, Food, Recipe, RecipeSummary, ToolRef};
use crate::config::Settings;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::pagination::{collect_all, Page};
use serde_json::json;

/// Client session for one maintenance run
///
/// Holds the authenticated HTTP client and the settings needed to build
/// human-facing links. Dropped when the process exits.
#[derive(Debug)]
pub struct RecipesApi {
    http: HttpClient,
    settings: Settings,
}

impl RecipesApi {
    /// Build a client from process settings
    pub fn new(settings: Settings) -> Self {
        let config = HttpClientConfig::builder()
            .base_url(settings.base_url.as_str())
            .bearer(&settings.api_token)
            .build();
        Self {
            http: HttpClient::with_config(config),
            settings,
        }
    }

    /// Settings this client was built from
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Human-facing link to a recipe page
    pub fn recipe_link(&self, slug: &str) -> String {
        self.settings.recipe_link(slug)
    }

    // ========================================================================
    // Recipes
    // ========================================================================

    /// Fetch one page of recipe summaries
    pub async fn recipes_page(&self, page: u32, per_page: u32) -> Result<Page<RecipeSummary>> {
        self.http
            .get_json_with_config(
                "/api/recipes",
                RequestConfig::new()
                    .query("page", page.to_string())
                    .query("perPage", per_page.to_string()),
            )
            .await
    }

    /// Fetch every recipe summary
    pub async fn all_recipes(&self) -> Result<Vec<RecipeSummary>> {
        collect_all(|page, per_page| self.recipes_page(page, per_page)).await
    }

    /// Fetch one recipe in full
    pub async fn recipe(&self, id: &str) -> Result<Recipe> {
        self.http.get_json(&format!("/api/recipes/{id}")).await
    }

    /// Replace one recipe wholesale
    pub async fn update_recipe(&self, recipe: &Recipe) -> Result<()> {
        self.http
            .put(
                &format!("/api/recipes/{}", recipe.id),
                serde_json::to_value(recipe)?,
            )
            .await?;
        Ok(())
    }

    // ========================================================================
    // Organizers
    // ========================================================================

    /// Fetch one page of tools
    pub async fn tools_page(&self, page: u32, per_page: u32) -> Result<Page<ToolRef>> {
        self.http
            .get_json_with_config(
                "/api/organizers/tools",
                RequestConfig::new()
                    .query("page", page.to_string())
                    .query("perPage", per_page.to_string()),
            )
            .await
    }

    /// Fetch every tool
    pub async fn all_tools(&self) -> Result<Vec<ToolRef>> {
        collect_all(|page, per_page| self.tools_page(page, per_page)).await
    }

    /// Fetch one page of categories
    pub async fn categories_page(&self, page: u32, per_page: u32) -> Result<Page<CategoryRef>> {
        self.http
            .get_json_with_config(
                "/api/organizers/categories",
                RequestConfig::new()
                    .query("page", page.to_string())
                    .query("perPage", per_page.to_string()),
            )
            .await
    }

    /// Fetch every category
    pub async fn all_categories(&self) -> Result<Vec<CategoryRef>> {
        collect_all(|page, per_page| self.categories_page(page, per_page)).await
    }

    // ========================================================================
    // Foods
    // ========================================================================

    /// Fetch one page of foods
    pub async fn foods_page(&self, page: u32, per_page: u32) -> Result<Page<Food>> {
        self.http
            .get_json_with_config(
                "/api/foods",
                RequestConfig::new()
                    .query("page", page.to_string())
                    .query("perPage", per_page.to_string()),
            )
            .await
    }

    /// Fetch every food
    pub async fn all_foods(&self) -> Result<Vec<Food>> {
        collect_all(|page, per_page| self.foods_page(page, per_page)).await
    }

    /// Create a food with the given canonical name
    pub async fn create_food(&self, name: &str) -> Result<Food> {
        let response = self.http.post("/api/foods", json!({ "name": name })).await?;
        let food: Food = response.json().await?;
        Ok(food)
    }

    /// Replace one food wholesale
    pub async fn update_food(&self, food: &Food) -> Result<()> {
        self.http
            .put(&format!("/api/foods/{}", food.id), serde_json::to_value(food)?)
            .await?;
        Ok(())
    }

    /// Absorb the food `absorb_id` into `keep_id`
    ///
    /// The absorbed food is deleted by the service and its recipe
    /// references are redirected to the kept one.
    pub async fn merge_foods(&self, keep_id: &str, absorb_id: &str) -> Result<()> {
        self.http
            .put(
                "/api/foods/merge",
                json!({ "fromFood": absorb_id, "toFood": keep_id }),
            )
            .await?;
        Ok(())
    }
}
