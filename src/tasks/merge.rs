//! Manual food merge

use crate::api::{Food, RecipesApi};
use crate::error::Result;
use std::collections::HashMap;

/// Merge the food named `absorb_name` into the one named `keep_name`
///
/// Both names must resolve against the current food collection; if either
/// is missing the pass reports which one and performs no merge. Returns
/// whether a merge was issued.
pub async fn merge_named_foods(
    api: &RecipesApi,
    keep_name: &str,
    absorb_name: &str,
) -> Result<bool> {
    if keep_name == absorb_name {
        println!("'{keep_name}' and '{absorb_name}' are the same food. Nothing to do.");
        return Ok(false);
    }

    println!("Fetching foods to merge '{absorb_name}' into '{keep_name}'…");

    let mut foods: HashMap<String, Food> = api
        .all_foods()
        .await?
        .into_iter()
        .map(|f| (f.name.clone(), f))
        .collect();

    let Some(keep) = foods.remove(keep_name) else {
        println!("Food '{keep_name}' not found.");
        return Ok(false);
    };
    let Some(absorb) = foods.remove(absorb_name) else {
        println!("Food '{absorb_name}' not found.");
        return Ok(false);
    };

    println!("Keeping '{}' (id {})", keep.name, keep.id);
    println!("Absorbing '{}' (id {})", absorb.name, absorb.id);

    api.merge_foods(&keep.id, &absorb.id).await?;

    println!("Merged '{absorb_name}' into '{keep_name}'.");
    Ok(true)
}
