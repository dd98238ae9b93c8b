//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together configuration
//! loading, context creation and command execution.

use std::path::Path;

use crate::adapters::archive_http::HttpArchiveSource;
use crate::adapters::process_command::CommandLauncher;
use crate::app::{
    AppContext,
    commands::{pipeline, prepare},
    config::load_config,
};
use crate::domain::{BootstrapConfig, WorkspaceLayout};

pub use crate::adapters::zip_extractor::ExtractionSummary;
pub use crate::app::commands::fetch::FetchOutcome;
pub use crate::app::commands::overlay::OverlayOutcome;
pub use crate::app::commands::pipeline::{LaunchOutcome, RunOutcome};
pub use crate::app::commands::prepare::PrepareOutcome;
pub use crate::app::config::ConfigOverrides;
pub use crate::domain::AppError;

fn load(
    base: &Path,
    overrides: &ConfigOverrides,
) -> Result<(BootstrapConfig, WorkspaceLayout), AppError> {
    let config = load_config(base, overrides)?;
    let layout = WorkspaceLayout::new(base, &config);
    Ok((config, layout))
}

/// Create an `AppContext` backed by HTTP and child processes.
fn create_context(
    config: &BootstrapConfig,
) -> Result<AppContext<HttpArchiveSource, CommandLauncher>, AppError> {
    let source = HttpArchiveSource::new(&config.archive)?;
    Ok(AppContext::new(source, CommandLauncher::new()))
}

/// Create the placeholder tree and extraction target under `base`.
pub fn prepare_at(base: &Path, overrides: &ConfigOverrides) -> Result<PrepareOutcome, AppError> {
    let (config, layout) = load(base, overrides)?;
    prepare::execute(&layout, &config.workspace.placeholders)
}

/// Prepare the workspace, then download and extract the archive.
pub fn fetch_at(base: &Path, overrides: &ConfigOverrides) -> Result<FetchOutcome, AppError> {
    let (config, layout) = load(base, overrides)?;
    let ctx = create_context(&config)?;
    pipeline::prepare_and_fetch(&ctx, &config, &layout)
}

/// Overlay configuration and launch a previously extracted program.
pub fn launch_at(base: &Path, overrides: &ConfigOverrides) -> Result<LaunchOutcome, AppError> {
    let (config, layout) = load(base, overrides)?;
    let ctx = create_context(&config)?;
    pipeline::start_extracted(&ctx, &config, &layout)
}

/// Run the complete bootstrap flow.
pub fn run_at(base: &Path, overrides: &ConfigOverrides) -> Result<RunOutcome, AppError> {
    let (config, layout) = load(base, overrides)?;
    let ctx = create_context(&config)?;
    pipeline::execute(&ctx, &config, &layout)
}
