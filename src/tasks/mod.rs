//! Maintenance passes
//!
//! One function per pass. Every pass follows the same contract: take a
//! snapshot of a collection through the walker, evaluate a pure predicate
//! per item, and either report the item or mutate a local copy and issue a
//! single whole-object write-back. Passes are idempotent: a second run over
//! a corrected collection performs zero writes.

mod aliases;
mod categorize;
mod merge;
mod oven;
mod reports;

pub use aliases::enrich_foods;
pub use categorize::{categorize_recipes, matched_keywords, searchable_text, CATEGORY_KEYWORDS};
pub use merge::merge_named_foods;
pub use oven::{mentions_oven, tag_oven_recipes, OVEN_TOOL_NAME};
pub use reports::{
    has_unlinked_ingredients, list_missing_categories, list_missing_tools,
    list_unparsed_ingredients,
};
