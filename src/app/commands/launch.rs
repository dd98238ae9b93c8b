use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::domain::{AppError, ProgramConfig, select_program_root};
use crate::ports::{LaunchRequest, ProcessLauncher};

/// Locate the extracted program directory under `extraction_target`.
pub fn resolve_program_root(extraction_target: &Path) -> Result<PathBuf, AppError> {
    if !extraction_target.is_dir() {
        return Err(AppError::ExtractedDirectoryMissing(extraction_target.to_path_buf()));
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(extraction_target)? {
        let entry = entry?;
        if entry.path().is_dir() {
            names.push(entry.file_name());
        }
    }

    let choice = select_program_root(names)
        .ok_or_else(|| AppError::ExtractedDirectoryMissing(extraction_target.to_path_buf()))?;

    if !choice.ignored.is_empty() {
        warn!(
            selected = ?choice.selected,
            ignored = ?choice.ignored,
            "archive has several top-level directories"
        );
    }

    Ok(extraction_target.join(choice.selected))
}

/// Build the child command for the program's entry point.
pub fn build_request(program_root: &Path, program: &ProgramConfig) -> Result<LaunchRequest, AppError> {
    let entry_file = program_root.join(&program.entry_point);
    if !entry_file.is_file() {
        return Err(AppError::EntryPointMissing(entry_file));
    }

    let mut args = program.runtime_args.clone();
    args.push(program.entry_point.clone());

    Ok(LaunchRequest {
        program: program.runtime.clone(),
        args,
        working_dir: program_root.to_path_buf(),
    })
}

/// Start the entry point and wait for it. Returns the child's exit code.
pub fn execute(
    launcher: &impl ProcessLauncher,
    program_root: &Path,
    program: &ProgramConfig,
) -> Result<i32, AppError> {
    let request = build_request(program_root, program)?;
    info!(
        command = %request.display_command(),
        cwd = %request.working_dir.display(),
        "launching program"
    );

    let code = launcher.launch(&request)?;
    if code == 0 {
        info!("program exited");
    } else {
        warn!(code, "program exited with failure");
    }
    Ok(code)
}
