pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::Settings;
pub use core::{engine::GenerationEngine, pipeline::GdapPipeline};
pub use domain::model::{Descriptor, FilterPolicy, RunMode};
pub use utils::error::{GdapError, Result};
