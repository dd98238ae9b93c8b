use std::path::{Path, PathBuf};

use crate::domain::BootstrapConfig;

/// Default settings file name, looked up in the base directory.
pub const SETTINGS_FILE: &str = "botstrap.toml";

/// `<base>/botstrap.toml`
pub fn settings_file(base: &Path) -> PathBuf {
    base.join(SETTINGS_FILE)
}

/// Resolved filesystem locations for one bootstrap run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceLayout {
    base: PathBuf,
    workspace_root: PathBuf,
    extraction_target: PathBuf,
    local_config: PathBuf,
}

impl WorkspaceLayout {
    pub fn new(base: impl Into<PathBuf>, config: &BootstrapConfig) -> Self {
        let base = base.into();
        let workspace_root = base.join(&config.workspace.root);
        let extraction_target = base.join(&config.workspace.extraction_dir);
        let local_config = base.join(&config.program.config_file);
        Self { base, workspace_root, extraction_target, local_config }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// `<base>/<workspace.root>`
    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// `<base>/<workspace.root>/<name>`
    pub fn placeholder_dir(&self, name: &str) -> PathBuf {
        self.workspace_root.join(name)
    }

    /// `<base>/<workspace.extraction_dir>`
    pub fn extraction_target(&self) -> &Path {
        &self.extraction_target
    }

    /// `<base>/<program.config_file>`
    pub fn local_config(&self) -> &Path {
        &self.local_config
    }
}
