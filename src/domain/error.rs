use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for botstrap operations.
///
/// Every variant is fatal: the CLI reports it and exits with code 1.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Archive URL could not be parsed.
    #[error("Invalid archive URL '{url}': {details}")]
    InvalidUrl { url: String, details: String },

    /// Network failure or non-success response while downloading the archive.
    #[error("Failed to download {url}: {message}")]
    Download { url: String, message: String, status: Option<u16> },

    /// Downloaded payload could not be read as a zip archive.
    #[error("Failed to extract archive: {0}")]
    Extraction(String),

    /// Extraction target holds no directory to launch.
    #[error("Archive extracted no directory into {}", .0.display())]
    ExtractedDirectoryMissing(PathBuf),

    /// Program root lacks the entry point file.
    #[error("Entry point not found: {}", .0.display())]
    EntryPointMissing(PathBuf),

    /// Child process could not be started.
    #[error("Failed to launch '{command}': {details}")]
    Launch { command: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
