use anyhow::Result;
use clap::Parser;
use job_tracker::cli::{self, Cli};
use job_tracker::core::ConfigManager;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging first; diagnostics go to stderr so command output
    // stays pipeable.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let config = ConfigManager::load()?;
    config.ensure_directories().await?;

    cli::run(cli, config).await
}
