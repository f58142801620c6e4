//! CLI runner - executes passes

use crate::api::RecipesApi;
use crate::cli::commands::{Cli, Commands};
use crate::config::Settings;
use crate::enrich::WikidataSource;
use crate::error::Result;
use crate::tasks;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected pass
    ///
    /// Settings are loaded up front so a missing variable aborts before
    /// any remote call; the client session lives for exactly one pass.
    pub async fn run(&self) -> Result<()> {
        let settings = Settings::from_env()?;
        let api = RecipesApi::new(settings);

        match &self.cli.command {
            Commands::MissingTools => {
                tasks::list_missing_tools(&api).await?;
            }
            Commands::MissingCategories => {
                tasks::list_missing_categories(&api).await?;
            }
            Commands::UnparsedIngredients => {
                tasks::list_unparsed_ingredients(&api).await?;
            }
            Commands::TagOven => {
                tasks::tag_oven_recipes(&api).await?;
            }
            Commands::Categorize => {
                tasks::categorize_recipes(&api).await?;
            }
            Commands::MergeFoods { keep, absorb } => {
                tasks::merge_named_foods(&api, keep, absorb).await?;
            }
            Commands::EnrichFoods => {
                let source = WikidataSource::new();
                tasks::enrich_foods(&api, &source).await?;
            }
        }

        Ok(())
    }
}
