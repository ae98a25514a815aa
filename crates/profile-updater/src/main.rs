//! Profile Updater - pushes the default profile to every device in a CSV file.

use anyhow::{Context, Result};
use clap::Parser;
use profile_updater::{BatchUpdater, Config, CsvMacSource, RegistryClient};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "profile-updater")]
#[command(about = "Push the default application profile to every listed device")]
#[command(version)]
struct Cli {
    /// CSV file with a MAC address in the first column (overrides INPUT__PATH)
    input: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load()?;
    if let Some(input) = cli.input {
        config.input.path = input;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        input = %config.input.path.display(),
        registry = %config.api.base_url,
        "Starting batch profile update"
    );

    let client = RegistryClient::new(
        &config.api.base_url,
        &config.api.client_id,
        &config.auth.token,
        config.api.timeout,
    )
    .context("Failed to create registry client")?;

    let source = CsvMacSource::open(&config.input.path)
        .with_context(|| format!("Couldn't open {}", config.input.path.display()))?;

    let report = BatchUpdater::new(client, &config.input.header_sentinel)
        .run(source)
        .await
        .context("Failed to read input records")?;

    println!(
        "{} updated, {} failed, {} skipped",
        report.updated, report.failed, report.skipped
    );

    Ok(())
}
