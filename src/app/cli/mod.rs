//! CLI Adapter.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, ConfigOverrides};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "botstrap")]
#[command(version)]
#[command(
    about = "Fetch, configure and launch a remote program archive",
    long_about = None
)]
struct Cli {
    /// Base directory holding the workspace and local config (default: current directory)
    #[arg(short = 'C', long, global = true)]
    base_dir: Option<PathBuf>,
    /// Settings file (default: <base>/botstrap.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Override the archive URL
    #[arg(long, global = true)]
    url: Option<String>,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Prepare, fetch, overlay config and launch (default)
    #[clap(visible_alias = "r")]
    Run,
    /// Create the placeholder tree and extraction target only
    #[clap(visible_alias = "p")]
    Prepare,
    /// Prepare, then download and extract the archive
    #[clap(visible_alias = "f")]
    Fetch,
    /// Overlay config and launch an already extracted program
    #[clap(visible_alias = "l")]
    Launch,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match dispatch(cli) {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "botstrap=debug" } else { "botstrap=info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn dispatch(cli: Cli) -> Result<i32, AppError> {
    let base = match cli.base_dir {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let overrides = ConfigOverrides { config_path: cli.config, archive_url: cli.url };

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let outcome = api::run_at(&base, &overrides)?;
            Ok(outcome.launch.exit_code)
        }
        Commands::Prepare => {
            let outcome = api::prepare_at(&base, &overrides)?;
            println!(
                "✅ Prepared workspace ({} directories created, extraction target {})",
                outcome.created.len(),
                outcome.extraction_target.display()
            );
            Ok(0)
        }
        Commands::Fetch => {
            let outcome = api::fetch_at(&base, &overrides)?;
            println!(
                "✅ Extracted {} entries ({} bytes, sha256 {})",
                outcome.extraction.entries(),
                outcome.size,
                outcome.sha256
            );
            Ok(0)
        }
        Commands::Launch => {
            let outcome = api::launch_at(&base, &overrides)?;
            Ok(outcome.exit_code)
        }
    }
}
