//! openclaw-migrate - move OpenClaw memory into the Nexus memory layout

use anyhow::{Context, Result};
use clap::Parser;
use nexus_migrate_core::{Config, Migrator};
use tracing_subscriber::EnvFilter;

mod pretty;

use pretty::{ConsoleProgress, Icons};

/// Takes no arguments: sources and target come from the home directory, or
/// from `~/.config/nexus/openclaw-migrate.toml` when present.
#[derive(Debug, Parser)]
#[command(
    name = "openclaw-migrate",
    author,
    version,
    about = "One-time migration of OpenClaw memory into Nexus"
)]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let _cli = Cli::parse();

    // Initialize logging; RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = Config::load().context("Failed to load migration config")?;
    tracing::debug!(?config, "Loaded config");
    let migrator = Migrator::new(&config);
    let icons = Icons::detect();

    pretty::print_banner(&icons);
    let report = migrator
        .run_with(&mut ConsoleProgress::new(icons))
        .await
        .with_context(|| {
            format!(
                "Migration into {} failed",
                migrator.target().memory_dir().display()
            )
        })?;
    pretty::print_summary(&icons, &report, &migrator.target().memory_dir());

    Ok(())
}
