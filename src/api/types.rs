//! Entity shapes mirrored from the recipe service
//!
//! Updates are whole-object replacement, so every mutable entity carries a
//! `#[serde(flatten)]` capture bag: fields this tool does not model survive
//! a read-modify-write round trip untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Recipe summary as returned by the paged listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
    pub slug: String,
}

/// Full recipe detail
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub recipe_instructions: Vec<RecipeStep>,
    #[serde(default)]
    pub recipe_ingredient: Vec<IngredientLine>,
    #[serde(default)]
    pub recipe_category: Vec<CategoryRef>,
    #[serde(default)]
    pub tags: Vec<TagRef>,
    #[serde(default)]
    pub tools: Vec<ToolRef>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One instruction step
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStep {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One ingredient line, optionally linked to a resolved food
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientLine {
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub food: Option<Food>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Category reference attached to a recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

/// Tag reference attached to a recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagRef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

/// Kitchen-equipment entity attachable to a recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolRef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

/// Ingredient entity, distinct from a recipe's free-text ingredient line
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub plural_name: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub aliases: Vec<FoodAlias>,
    #[serde(default)]
    pub label: Option<LabelRef>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Stored alternate name on a food
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodAlias {
    pub name: String,
}

/// Label reference on a food
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelRef {
    pub id: String,
    pub name: String,
}
