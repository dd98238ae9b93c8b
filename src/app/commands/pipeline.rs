//! Full bootstrap flow: prepare, fetch, overlay, launch.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::app::commands::{fetch, launch, overlay, prepare};
use crate::domain::{AppError, BootstrapConfig, WorkspaceLayout};
use crate::ports::{ArchiveSource, ProcessLauncher};

use super::fetch::FetchOutcome;
use super::overlay::OverlayOutcome;

/// Result of starting an extracted program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOutcome {
    pub program_root: PathBuf,
    pub overlay: OverlayOutcome,
    pub exit_code: i32,
}

/// Result of a complete bootstrap run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub fetch: FetchOutcome,
    pub launch: LaunchOutcome,
}

/// Prepare the workspace and download the archive into the extraction target.
pub fn prepare_and_fetch<A: ArchiveSource, L: ProcessLauncher>(
    ctx: &AppContext<A, L>,
    config: &BootstrapConfig,
    layout: &WorkspaceLayout,
) -> Result<FetchOutcome, AppError> {
    let url = config.archive_url()?;
    let prepared = prepare::execute(layout, &config.workspace.placeholders)?;
    fetch::execute(ctx.source(), &url, &prepared.extraction_target)
}

/// Resolve the extracted program, overlay local configuration and launch it.
///
/// The program root is resolved before the overlay so an empty extraction
/// aborts without touching any file.
pub fn start_extracted<A: ArchiveSource, L: ProcessLauncher>(
    ctx: &AppContext<A, L>,
    config: &BootstrapConfig,
    layout: &WorkspaceLayout,
) -> Result<LaunchOutcome, AppError> {
    let program_root = launch::resolve_program_root(layout.extraction_target())?;
    let overlay =
        overlay::execute(layout.local_config(), &program_root, &config.program.config_file)?;
    let exit_code = launch::execute(ctx.launcher(), &program_root, &config.program)?;

    Ok(LaunchOutcome { program_root, overlay, exit_code })
}

/// Run every step in order. The first failure stops the run.
pub fn execute<A: ArchiveSource, L: ProcessLauncher>(
    ctx: &AppContext<A, L>,
    config: &BootstrapConfig,
    layout: &WorkspaceLayout,
) -> Result<RunOutcome, AppError> {
    let fetch = prepare_and_fetch(ctx, config, layout)?;
    let launch = start_extracted(ctx, config, layout)?;
    Ok(RunOutcome { fetch, launch })
}
