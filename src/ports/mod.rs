mod archive_source;
mod process_launcher;

pub use archive_source::ArchiveSource;
pub use process_launcher::{LaunchRequest, ProcessLauncher};
