use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, WorkspaceLayout};

/// Result of preparing the placeholder tree and extraction target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepareOutcome {
    pub extraction_target: PathBuf,
    /// Directories that did not exist before this call.
    pub created: Vec<PathBuf>,
}

/// Ensure the workspace root, every placeholder directory and the extraction
/// target exist. Existing directories are left untouched.
pub fn execute(layout: &WorkspaceLayout, placeholders: &[String]) -> Result<PrepareOutcome, AppError> {
    let mut created = Vec::new();

    ensure_dir(layout.workspace_root(), &mut created)?;
    for name in placeholders {
        ensure_dir(&layout.placeholder_dir(name), &mut created)?;
    }
    ensure_dir(layout.extraction_target(), &mut created)?;

    Ok(PrepareOutcome { extraction_target: layout.extraction_target().to_path_buf(), created })
}

fn ensure_dir(path: &Path, created: &mut Vec<PathBuf>) -> Result<(), AppError> {
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path)?;
    debug!(path = %path.display(), "created directory");
    created.push(path.to_path_buf());
    Ok(())
}
