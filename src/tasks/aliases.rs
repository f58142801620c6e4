//! Knowledge-base alias and description enrichment

use crate::api::{Food, RecipesApi};
use crate::enrich::AliasSource;
use crate::error::Result;
use crate::sweep::SweepStats;
use std::collections::HashMap;
use tracing::warn;

/// Enrich foods that have no aliases yet
///
/// For every such food the knowledge base is queried once. Aliases become
/// foods of their own (created if absent) and are immediately absorbed into
/// the canonical food by merge; an empty description is filled from the
/// entry when one is available. Lookup failures are logged per item and do
/// not abort the pass.
///
/// The name-keyed map doubles as run state: a food absorbed as an earlier
/// food's alias is removed from it and skipped when its own list position
/// comes up.
pub async fn enrich_foods(api: &RecipesApi, source: &dyn AliasSource) -> Result<SweepStats> {
    println!("Fetching foods…");
    let foods = api.all_foods().await?;
    let mut by_name: HashMap<String, Food> = foods
        .iter()
        .cloned()
        .map(|f| (f.name.clone(), f))
        .collect();
    println!("Found {} foods to process.", by_name.len());

    let mut stats = SweepStats::default();
    for food in &foods {
        if !by_name.contains_key(&food.name) {
            // Already merged away as an alias earlier in this run.
            continue;
        }
        stats.scanned += 1;

        if !food.aliases.is_empty() {
            continue;
        }

        println!("'{}' has no aliases. Querying the knowledge base…", food.name);
        let entry = match source.lookup(&food.name).await {
            Ok(Some(entry)) => entry,
            Ok(None) => {
                println!("  No entry found for '{}'.", food.name);
                continue;
            }
            Err(err) => {
                warn!(food = %food.name, error = %err, "knowledge-base lookup failed");
                println!("  Could not look up '{}': {err}", food.name);
                continue;
            }
        };

        if food.description.is_empty() {
            if let Some(description) = &entry.description {
                println!("  Setting description: {description}");
                let mut patched = food.clone();
                patched.description = description.clone();
                api.update_food(&patched).await?;
                by_name.insert(patched.name.clone(), patched);
                stats.patched += 1;
            }
        }

        if entry.aliases.is_empty() {
            println!("  No aliases found for '{}'.", food.name);
            continue;
        }
        println!("  Found aliases: {}", entry.aliases.join(", "));

        for alias_name in &entry.aliases {
            // The entry sometimes echoes the food's own name.
            if alias_name.eq_ignore_ascii_case(&food.name) {
                continue;
            }

            let alias_food = match by_name.get(alias_name) {
                Some(existing) => existing.clone(),
                None => {
                    println!("  Creating food for alias '{alias_name}'…");
                    let created = api.create_food(alias_name).await?;
                    by_name.insert(created.name.clone(), created.clone());
                    created
                }
            };

            println!("  Merging '{}' into '{}'…", alias_food.name, food.name);
            api.merge_foods(&food.id, &alias_food.id).await?;
            by_name.remove(alias_name);
            stats.patched += 1;
        }
    }

    println!(
        "Processed {} foods, {} writes issued.",
        stats.scanned, stats.patched
    );
    Ok(stats)
}
