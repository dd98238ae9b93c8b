use std::process::Command;

use crate::domain::AppError;
use crate::ports::{LaunchRequest, ProcessLauncher};

/// Runs the extracted program as a child process with inherited stdio.
#[derive(Debug, Clone, Default)]
pub struct CommandLauncher;

impl CommandLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessLauncher for CommandLauncher {
    fn launch(&self, request: &LaunchRequest) -> Result<i32, AppError> {
        let mut command = Command::new(&request.program);
        command.args(&request.args);
        command.current_dir(&request.working_dir);

        let status = command.status().map_err(|e| AppError::Launch {
            command: request.display_command(),
            details: e.to_string(),
        })?;

        // A child killed by a signal has no code.
        Ok(status.code().unwrap_or(1))
    }
}
