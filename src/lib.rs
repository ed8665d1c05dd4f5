pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod extension;
pub mod fs;
pub mod gather;
pub mod patterns;
pub mod safety;

pub use app::{run_app, Deps};
pub use cli::Args;
pub use config::GatherOptions;
pub use error::GatherError;
pub use extension::{determine_output_extension, ExtensionPriority};
pub use gather::{gather, GatherReport, Gatherer};
