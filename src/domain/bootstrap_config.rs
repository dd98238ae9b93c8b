//! Bootstrap settings loaded from `botstrap.toml`.

use std::path::{Component, Path};

use serde::Deserialize;
use url::Url;

use crate::domain::AppError;

pub const DEFAULT_ARCHIVE_URL: &str =
    "https://github.com/popkidmd/POPKID-MD/archive/refs/heads/main.zip";

/// Placeholder directory names created under the workspace root.
pub const DEFAULT_PLACEHOLDERS: [&str; 30] = [
    "axios",
    "chalk",
    "rimraf",
    "dotenv",
    "morgan",
    "winston",
    "minimist",
    "yargs",
    "colors",
    "commander",
    "express",
    "uuid",
    "body-parser",
    "nodemon",
    "pino",
    "mkdirp",
    "debug",
    "cookie-parser",
    "fs-extra",
    "glob",
    "inquirer",
    "pm2",
    "cors",
    "react",
    "vue",
    "jest",
    "ts-node",
    "dayjs",
    "ms",
    "boxen",
];

/// Complete bootstrap configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BootstrapConfig {
    /// Remote archive settings.
    #[serde(default)]
    pub archive: ArchiveConfig,
    /// Workspace layout settings.
    #[serde(default)]
    pub workspace: WorkspaceConfig,
    /// Extracted program settings.
    #[serde(default)]
    pub program: ProgramConfig,
}

/// Remote archive settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArchiveConfig {
    /// Zip archive URL.
    #[serde(default = "default_archive_url")]
    pub url: String,
    /// Total request timeout in seconds. `None` means no timeout.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self { url: default_archive_url(), timeout_secs: None }
    }
}

/// Workspace layout, relative to the base directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkspaceConfig {
    /// Directory holding the placeholder tree.
    #[serde(default = "default_workspace_root")]
    pub root: String,
    /// Placeholder directory names.
    #[serde(default = "default_placeholders")]
    pub placeholders: Vec<String>,
    /// Directory receiving the unpacked archive.
    #[serde(default = "default_extraction_dir")]
    pub extraction_dir: String,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            root: default_workspace_root(),
            placeholders: default_placeholders(),
            extraction_dir: default_extraction_dir(),
        }
    }
}

/// How the extracted program is configured and started.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProgramConfig {
    /// Local configuration file name, also used as the overlay target name.
    #[serde(default = "default_config_file")]
    pub config_file: String,
    /// Entry point path relative to the program root.
    #[serde(default = "default_entry_point")]
    pub entry_point: String,
    /// Command that runs the entry point.
    #[serde(default = "default_runtime")]
    pub runtime: String,
    /// Arguments placed between the runtime and the entry point.
    #[serde(default)]
    pub runtime_args: Vec<String>,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            config_file: default_config_file(),
            entry_point: default_entry_point(),
            runtime: default_runtime(),
            runtime_args: Vec::new(),
        }
    }
}

fn default_archive_url() -> String {
    DEFAULT_ARCHIVE_URL.to_string()
}

fn default_workspace_root() -> String {
    "node_modules/lx".to_string()
}

fn default_placeholders() -> Vec<String> {
    DEFAULT_PLACEHOLDERS.iter().map(|name| name.to_string()).collect()
}

fn default_extraction_dir() -> String {
    "popkid-temp".to_string()
}

fn default_config_file() -> String {
    "config.js".to_string()
}

fn default_entry_point() -> String {
    "index.js".to_string()
}

fn default_runtime() -> String {
    "node".to_string()
}

impl BootstrapConfig {
    /// Parsed archive URL.
    pub fn archive_url(&self) -> Result<Url, AppError> {
        parse_archive_url(&self.archive.url)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.archive_url()?;

        if self.archive.timeout_secs == Some(0) {
            return Err(AppError::config_error("archive.timeout_secs must be greater than zero"));
        }

        if self.workspace.root.trim().is_empty() {
            return Err(AppError::config_error("workspace.root must not be empty"));
        }
        if !is_relative_within(&self.workspace.root) {
            return Err(AppError::config_error(format!(
                "workspace.root '{}' must be a relative path without '..'",
                self.workspace.root
            )));
        }
        for name in &self.workspace.placeholders {
            if !is_single_component(name) {
                return Err(AppError::config_error(format!(
                    "Invalid placeholder directory name '{}'",
                    name
                )));
            }
        }
        if !is_relative_within(&self.workspace.extraction_dir) {
            return Err(AppError::config_error(format!(
                "workspace.extraction_dir '{}' must be a relative path without '..'",
                self.workspace.extraction_dir
            )));
        }

        if !is_single_component(&self.program.config_file) {
            return Err(AppError::config_error(format!(
                "program.config_file '{}' must be a plain file name",
                self.program.config_file
            )));
        }
        if !is_relative_within(&self.program.entry_point) {
            return Err(AppError::config_error(format!(
                "program.entry_point '{}' must be a relative path without '..'",
                self.program.entry_point
            )));
        }
        if self.program.runtime.trim().is_empty() {
            return Err(AppError::config_error("program.runtime must not be empty"));
        }

        Ok(())
    }
}

/// Parse and validate bootstrap configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<BootstrapConfig, AppError> {
    let config: BootstrapConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Parse an archive URL, accepting only http(s).
pub fn parse_archive_url(raw: &str) -> Result<Url, AppError> {
    let url = Url::parse(raw)
        .map_err(|e| AppError::InvalidUrl { url: raw.to_string(), details: e.to_string() })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AppError::InvalidUrl {
            url: raw.to_string(),
            details: format!("unsupported scheme '{}'", other),
        }),
    }
}

fn is_single_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!((components.next(), components.next()), (Some(Component::Normal(_)), None))
}

fn is_relative_within(path: &str) -> bool {
    !path.trim().is_empty()
        && Path::new(path).components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
