use crate::ports::{ArchiveSource, ProcessLauncher};

/// Application context holding dependencies for command execution.
pub struct AppContext<A: ArchiveSource, L: ProcessLauncher> {
    source: A,
    launcher: L,
}

impl<A: ArchiveSource, L: ProcessLauncher> AppContext<A, L> {
    /// Create a new application context.
    pub fn new(source: A, launcher: L) -> Self {
        Self { source, launcher }
    }

    /// Get a reference to the archive source.
    pub fn source(&self) -> &A {
        &self.source
    }

    /// Get a reference to the process launcher.
    pub fn launcher(&self) -> &L {
        &self.launcher
    }
}
