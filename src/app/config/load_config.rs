//! Bootstrap configuration loading from `botstrap.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::layout;
use crate::domain::{AppError, BootstrapConfig, parse_config_content};

/// Values supplied on the command line that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Explicit settings file. Must exist when given.
    pub config_path: Option<PathBuf>,
    /// Archive URL replacing `archive.url`.
    pub archive_url: Option<String>,
}

/// Load settings for a bootstrap rooted at `base`.
///
/// A missing `<base>/botstrap.toml` yields defaults; a missing explicit
/// `--config` file is an error.
pub fn load_config(base: &Path, overrides: &ConfigOverrides) -> Result<BootstrapConfig, AppError> {
    let mut config = match &overrides.config_path {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::config_error(format!(
                    "Settings file not found: {}",
                    path.display()
                )));
            }
            read_config(path)?
        }
        None => {
            let path = layout::settings_file(base);
            if path.is_file() {
                read_config(&path)?
            } else {
                debug!(path = %path.display(), "no settings file, using defaults");
                BootstrapConfig::default()
            }
        }
    };

    if let Some(url) = &overrides.archive_url {
        config.archive.url = url.clone();
    }

    config.validate()?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<BootstrapConfig, AppError> {
    debug!(path = %path.display(), "reading settings file");
    let content = fs::read_to_string(path)?;
    parse_config_content(&content)
}
