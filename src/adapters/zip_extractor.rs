//! Zip archive extraction.

use std::fs::{self, File};
use std::io::{self, Cursor};
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::AppError;

/// Counts reported after an archive has been unpacked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionSummary {
    pub files: usize,
    pub directories: usize,
    /// Entries whose names would escape the destination.
    pub skipped: usize,
}

impl ExtractionSummary {
    pub fn entries(&self) -> usize {
        self.files + self.directories
    }
}

/// Expand every entry of an in-memory zip archive into `destination`.
///
/// Existing files at the same paths are overwritten. Entries with absolute
/// paths or `..` components are skipped.
pub fn extract_archive(bytes: &[u8], destination: &Path) -> Result<ExtractionSummary, AppError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| AppError::Extraction(e.to_string()))?;

    fs::create_dir_all(destination)?;

    let mut summary = ExtractionSummary::default();

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(|e| AppError::Extraction(e.to_string()))?;

        let relative_path = match entry.enclosed_name() {
            Some(path) => path.to_owned(),
            None => {
                warn!(entry = entry.name(), "skipping archive entry outside extraction target");
                summary.skipped += 1;
                continue;
            }
        };
        let out_path = destination.join(&relative_path);

        if entry.is_dir() {
            fs::create_dir_all(&out_path)?;
            summary.directories += 1;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // A previous extraction may have left a read-only file here.
        if let Ok(meta) = fs::symlink_metadata(&out_path) {
            if !meta.is_dir() {
                fs::remove_file(&out_path)?;
            }
        }

        let mut out_file = File::create(&out_path)?;
        io::copy(&mut entry, &mut out_file)
            .map_err(|e| AppError::Extraction(format!("{}: {}", entry.name(), e)))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                fs::set_permissions(&out_path, fs::Permissions::from_mode(mode & 0o777))?;
            }
        }

        debug!(path = %relative_path.display(), "extracted");
        summary.files += 1;
    }

    Ok(summary)
}
