//! botstrap: prepare a placeholder workspace, fetch a remote program archive,
//! overlay local configuration and launch the extracted program.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{
    ConfigOverrides, ExtractionSummary, FetchOutcome, LaunchOutcome, OverlayOutcome,
    PrepareOutcome, RunOutcome, fetch_at, launch_at, prepare_at, run_at,
};
pub use domain::{AppError, BootstrapConfig};
