//! Settings-file backed configuration loading.
//!
//! Pure schema parsing lives in `domain::bootstrap_config`.

mod load_config;

pub use load_config::{ConfigOverrides, load_config};
