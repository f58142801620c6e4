//! Recipe-service API client
//!
//! Typed access to the operations the maintenance passes consume: paged
//! recipe/tool/category/food listings, recipe detail and whole-object
//! update, food create/update, and the merge operation that absorbs one
//! food into another. Entities are owned by the remote service; this
//! module only mirrors their shape.

mod client;
mod types;

pub use client::RecipesApi;
pub use types::{
    CategoryRef, Food, FoodAlias, IngredientLine, LabelRef, Recipe, RecipeStep, RecipeSummary,
    TagRef, ToolRef,
};

#[cfg(test)]
mod tests;
