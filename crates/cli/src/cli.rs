//! Command-line argument parsing.

use clap::Parser;
use npsfind_core::Freshness;
use std::path::PathBuf;

/// Browse national park sites by state and look up places nearby
#[derive(Parser, Debug)]
#[command(name = "npsfind")]
#[command(version)]
pub struct Cli {
    /// Directory holding the cache documents (overrides config)
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Ignore cached entries from earlier runs and fetch again
    #[arg(long)]
    pub refresh: bool,

    /// TOML config file, merged below NPSFIND_* environment variables
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn freshness(&self) -> Freshness {
        if self.refresh { Freshness::Refresh } else { Freshness::Forever }
    }
}
