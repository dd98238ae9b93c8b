pub mod bootstrap_config;
pub mod error;
pub mod layout;
pub mod program_root;

pub use bootstrap_config::{
    ArchiveConfig, BootstrapConfig, ProgramConfig, WorkspaceConfig, parse_config_content,
};
pub use error::AppError;
pub use layout::WorkspaceLayout;
pub use program_root::{ProgramRootChoice, select_program_root};
