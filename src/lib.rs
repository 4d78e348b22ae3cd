pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{http::HttpFetcher, storage::LocalStorage};
pub use config::Settings;
pub use crate::core::{etl::MergeEngine, pipeline::MergePipeline};
pub use utils::error::{MergeError, Result};
