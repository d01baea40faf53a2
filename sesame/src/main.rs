// sesame/src/main.rs

use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug sesame check ... pour voir les détails
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        // --- USE CASE: ACCESS CHECK ---
        Commands::Check { data, subject, resource } => {
            commands::check::execute(&data, &subject, &resource).await?;
        }

        // --- USE CASE: SNAPSHOT DUMP ---
        Commands::Snapshot { data, subject } => {
            commands::snapshot::execute(&data, &subject).await?;
        }
    }

    Ok(())
}
