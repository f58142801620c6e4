//! Report-only passes
//!
//! These never write back; they print one line per flagged recipe with a
//! link the operator can follow.

use crate::api::{Recipe, RecipesApi};
use crate::error::Result;
use crate::pagination::{collect_all_with, PageEnd};

/// True when no ingredient line is linked to a food entity
pub fn has_unlinked_ingredients(recipe: &Recipe) -> bool {
    recipe
        .recipe_ingredient
        .iter()
        .all(|line| line.food.is_none())
}

/// List recipes with no tools attached
pub async fn list_missing_tools(api: &RecipesApi) -> Result<usize> {
    println!("Fetching recipes…");
    let recipes = api.all_recipes().await?;
    println!("Found {} recipes.", recipes.len());

    let mut flagged = 0;
    for summary in recipes {
        let recipe = api.recipe(&summary.id).await?;
        if recipe.tools.is_empty() {
            println!(
                "'{}' ({}) has no tools",
                recipe.name,
                api.recipe_link(&recipe.slug)
            );
            flagged += 1;
        }
    }
    println!("{flagged} recipes without tools.");
    Ok(flagged)
}

/// List recipes with no categories attached
pub async fn list_missing_categories(api: &RecipesApi) -> Result<usize> {
    println!("Fetching recipes…");
    let recipes = api.all_recipes().await?;
    println!("Found {} recipes.", recipes.len());

    let mut flagged = 0;
    for summary in recipes {
        let recipe = api.recipe(&summary.id).await?;
        if recipe.recipe_category.is_empty() {
            println!(
                "'{}' ({}) has no categories",
                recipe.name,
                api.recipe_link(&recipe.slug)
            );
            flagged += 1;
        }
    }
    println!("{flagged} recipes without categories.");
    Ok(flagged)
}

/// List recipes whose ingredient lines are not linked to foods
///
/// Polls with the short-page end rule: this listing predates the
/// total-page count on the service side.
pub async fn list_unparsed_ingredients(api: &RecipesApi) -> Result<usize> {
    println!("Fetching recipes…");
    let recipes = collect_all_with(
        |page, per_page| api.recipes_page(page, per_page),
        100,
        PageEnd::ShortPage,
    )
    .await?;
    println!("Found {} recipes.", recipes.len());

    let mut flagged = 0;
    for summary in recipes {
        let recipe = api.recipe(&summary.id).await?;
        if has_unlinked_ingredients(&recipe) {
            println!(
                "'{}' ({}) has unparsed ingredients",
                recipe.name,
                api.recipe_link(&recipe.slug)
            );
            flagged += 1;
        }
    }
    println!("{flagged} recipes with unparsed ingredients.");
    Ok(flagged)
}
