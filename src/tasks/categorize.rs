//! Keyword-driven categorization

use crate::api::{CategoryRef, Recipe, RecipesApi};
use crate::error::Result;
use crate::sweep::{scan_and_patch, SweepStats};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Keyword → category name mapping applied by this pass
pub const CATEGORY_KEYWORDS: &[(&str, &str)] = &[
    ("dinner", "Dinner"),
    ("lunch", "Lunch"),
    ("breakfast", "Breakfast"),
];

static KEYWORD_PATTERNS: Lazy<Vec<(Regex, &'static str, &'static str)>> = Lazy::new(|| {
    CATEGORY_KEYWORDS
        .iter()
        .map(|(keyword, category)| {
            let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(keyword)))
                .expect("keyword pattern");
            (pattern, *keyword, *category)
        })
        .collect()
});

/// Text a recipe is matched against: name, description and tag names
pub fn searchable_text(recipe: &Recipe) -> String {
    let tags = recipe
        .tags
        .iter()
        .map(|t| t.name.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    format!("{} {} {}", recipe.name, recipe.description, tags)
}

/// `(keyword, category name)` pairs matching a recipe, word-boundary matched
pub fn matched_keywords(recipe: &Recipe) -> Vec<(&'static str, &'static str)> {
    let text = searchable_text(recipe);
    KEYWORD_PATTERNS
        .iter()
        .filter(|(pattern, _, _)| pattern.is_match(&text))
        .map(|(_, keyword, category)| (*keyword, *category))
        .collect()
}

/// Attach meal categories to recipes whose text matches a keyword
///
/// Every target category must already exist on the service; otherwise the
/// pass prints which one is missing and returns without scanning.
pub async fn categorize_recipes(api: &RecipesApi) -> Result<SweepStats> {
    println!("Fetching categories and recipes…");

    let categories: HashMap<String, CategoryRef> = api
        .all_categories()
        .await?
        .into_iter()
        .map(|c| (c.name.clone(), c))
        .collect();

    for (_, target) in CATEGORY_KEYWORDS {
        if !categories.contains_key(*target) {
            println!("Category '{target}' not found on the service. Please create it.");
            return Ok(SweepStats::default());
        }
    }

    let recipes = api.all_recipes().await?;
    println!("Found {} recipes.", recipes.len());

    let categories = &categories;
    let stats = scan_and_patch(
        recipes,
        |summary| async move {
            let mut recipe = api.recipe(&summary.id).await?;
            let mut changed = false;
            for (keyword, target) in matched_keywords(&recipe) {
                let category = &categories[target];
                if !recipe.recipe_category.iter().any(|c| c.id == category.id) {
                    println!(
                        "'{}' contains '{}'. Adding the '{}' category…",
                        recipe.name, keyword, category.name
                    );
                    recipe.recipe_category.push(category.clone());
                    changed = true;
                }
            }
            Ok(changed.then_some(recipe))
        },
        |recipe: Recipe| async move { api.update_recipe(&recipe).await },
    )
    .await?;

    println!("Updated {} of {} recipes.", stats.patched, stats.scanned);
    Ok(stats)
}
