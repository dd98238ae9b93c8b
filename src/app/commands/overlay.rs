use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::domain::AppError;

/// What the configuration overlay did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayOutcome {
    /// Local file copied over the program's configuration.
    Copied { destination: PathBuf, bytes: u64 },
    /// No local file; the program keeps its own configuration.
    MissingLocalConfig { expected: PathBuf },
}

/// Copy `local_config` into `program_root` as `file_name`, replacing any file
/// already there. A missing local file only produces a warning.
pub fn execute(
    local_config: &Path,
    program_root: &Path,
    file_name: &str,
) -> Result<OverlayOutcome, AppError> {
    if !local_config.is_file() {
        warn!(
            expected = %local_config.display(),
            "{} not found, using the program's default configuration",
            file_name
        );
        return Ok(OverlayOutcome::MissingLocalConfig { expected: local_config.to_path_buf() });
    }

    let destination = program_root.join(file_name);
    let bytes = fs::copy(local_config, &destination)?;
    info!(destination = %destination.display(), bytes, "{} copied", file_name);

    Ok(OverlayOutcome::Copied { destination, bytes })
}
