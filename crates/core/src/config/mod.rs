//! Batch configuration: types, loading and validation.

mod loader;
mod types;
mod validate;

pub use loader::{load_config, load_config_from_str};
pub use types::BatchConfig;
pub use validate::validate_config;

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file does not exist.
    #[error("config file not found: {0}")]
    FileNotFound(String),

    /// Config file or environment could not be parsed.
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// Input root does not exist or is not a directory.
    #[error("input directory '{path}' does not exist")]
    InputDirNotFound { path: PathBuf },

    /// Concurrency limit must be at least one.
    #[error("max_parallel_jobs must be at least 1")]
    InvalidConcurrency,

    /// At least one recognized extension is required.
    #[error("at least one input extension must be configured")]
    NoExtensions,

    /// Output bitrate must be nonzero.
    #[error("converter bitrate_kbps must be at least 1")]
    InvalidBitrate,
}
