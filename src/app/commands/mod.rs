pub mod fetch;
pub mod launch;
pub mod overlay;
pub mod pipeline;
pub mod prepare;
