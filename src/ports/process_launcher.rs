//! Child process launch port definition.

use std::path::PathBuf;

use crate::domain::AppError;

/// Command line and working directory for the extracted program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    /// Runtime executable (e.g. `node`).
    pub program: String,
    /// Runtime arguments followed by the entry point.
    pub args: Vec<String>,
    /// Program root; the child runs with this as its current directory.
    pub working_dir: PathBuf,
}

impl LaunchRequest {
    /// Human-readable command line for logs and errors.
    pub fn display_command(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Port for running the extracted program to completion.
pub trait ProcessLauncher {
    /// Spawn the program, wait for it, and return its exit code.
    fn launch(&self, request: &LaunchRequest) -> Result<i32, AppError>;
}
