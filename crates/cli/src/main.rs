//! npsfind entry point.
//!
//! Logging goes to stderr so stdout stays the interactive surface.

use anyhow::Result;
use clap::Parser;
use npsfind_core::AppConfig;
use tracing_subscriber::EnvFilter;

mod cli;
mod menu;
mod render;
mod repl;
mod resolve;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let cli = cli::Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_with_file(Some(path))?,
        None => AppConfig::load()?,
    };
    if let Some(dir) = cli.cache_dir.clone() {
        config.cache_dir = dir;
    }

    tracing::info!(cache_dir = %config.cache_dir.display(), freshness = ?cli.freshness(), "starting npsfind");

    let resolve::Resolvers { mut directory, catalog, places } = resolve::Resolvers::from_config(&config, cli.freshness())?;
    let states = directory.build().await?;

    let mut session = repl::Session::new(states, catalog, places);
    session.run(&mut std::io::stdin().lock(), &mut std::io::stdout().lock()).await?;

    Ok(())
}
