//! Tapedeck - console music library browser
//!
//! Loads an album list from JSON and simulates playback through a numbered
//! menu on stdin/stdout. Diagnostics go to stderr.

use anyhow::Context;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tapedeck_cli::{load_catalog, CliConfig, Console};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "tapedeck", version, about = "Browse a music library and simulate playback")]
struct Cli {
    /// JSON album list (overrides `library.path`)
    #[arg(short, long)]
    library: Option<PathBuf>,

    /// TOML config file (defaults to ./tapedeck.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        CliConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(library) = cli.library {
        config.library.path = library;
    }
    config.validate()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::debug!("Using library at {}", config.library.path.display());

    let mut stdout = io::stdout().lock();
    let catalog = load_catalog(&config.library.path, &mut stdout)?;

    let mut console = Console::new(Arc::new(catalog), stdout);
    let mut stdin = io::stdin().lock();
    console.run(&mut stdin)?;

    Ok(())
}
