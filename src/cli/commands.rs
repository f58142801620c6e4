//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// Maintenance passes for a self-hosted recipe-management service
#[derive(Parser, Debug)]
#[command(name = "recipe-sweep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands, one per pass
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List recipes with no tools attached
    MissingTools,

    /// List recipes with no categories attached
    MissingCategories,

    /// List recipes whose ingredient lines are not linked to foods
    UnparsedIngredients,

    /// Attach the Oven tool to recipes whose instructions mention an oven
    TagOven,

    /// Attach meal categories to recipes matching dinner/lunch/breakfast keywords
    Categorize,

    /// Merge one food into another, absorbing and deleting it
    MergeFoods {
        /// Name of the food to keep
        keep: String,

        /// Name of the food to absorb and remove
        absorb: String,
    },

    /// Pull aliases and descriptions for foods from the public knowledge base
    EnrichFoods,
}
