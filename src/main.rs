//! recipe-sweep CLI
//!
//! Command-line entry point for the maintenance passes

use clap::Parser;
use recipe_sweep::cli::{Cli, Runner};

#[tokio::main]
async fn main() {
    // Settings may live in a .env next to the binary; absence is fine.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
