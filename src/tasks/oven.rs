//! Oven tool tagging

use crate::api::{Recipe, RecipesApi};
use crate::error::Result;
use crate::sweep::{scan_and_patch, SweepStats};
use once_cell::sync::Lazy;
use regex::Regex;

/// Name of the tool this pass attaches
pub const OVEN_TOOL_NAME: &str = "Oven";

// Word-boundary match so "ovenproof" does not count as a mention.
static OVEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\boven\b").expect("oven pattern"));

/// True when any instruction step mentions an oven
pub fn mentions_oven(recipe: &Recipe) -> bool {
    recipe
        .recipe_instructions
        .iter()
        .any(|step| OVEN_RE.is_match(&step.text))
}

/// Attach the Oven tool to recipes whose instructions mention one
///
/// Requires the tool to exist on the service; otherwise prints a
/// diagnostic and returns without scanning.
pub async fn tag_oven_recipes(api: &RecipesApi) -> Result<SweepStats> {
    println!("Fetching recipes…");
    let recipes = api.all_recipes().await?;
    println!("Found {} recipes.", recipes.len());

    let tools = api.all_tools().await?;
    let Some(oven) = tools.into_iter().find(|t| t.name == OVEN_TOOL_NAME) else {
        println!("'{OVEN_TOOL_NAME}' tool not found on the service. Please create it.");
        return Ok(SweepStats::default());
    };

    let stats = scan_and_patch(
        recipes,
        |summary| {
            let oven = oven.clone();
            async move {
                let recipe = api.recipe(&summary.id).await?;
                if mentions_oven(&recipe) && !recipe.tools.iter().any(|t| t.id == oven.id) {
                    println!(
                        "'{}' mentions an oven but is missing the '{}' tool. Adding it…",
                        recipe.name, oven.name
                    );
                    let mut patched = recipe;
                    patched.tools.push(oven);
                    Ok(Some(patched))
                } else {
                    Ok(None)
                }
            }
        },
        |recipe: Recipe| async move { api.update_recipe(&recipe).await },
    )
    .await?;

    println!("Updated {} of {} recipes.", stats.patched, stats.scanned);
    Ok(stats)
}
