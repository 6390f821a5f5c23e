//! Configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::converter::ConverterConfig;

/// Configuration for a batch conversion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Root directory of the source library.
    pub input_dir: PathBuf,

    /// Root directory for the mirrored MP3 tree.
    pub output_dir: PathBuf,

    /// Whether to recurse into subdirectories; off lists only the input
    /// root's immediate children.
    #[serde(default)]
    pub recursive: bool,

    /// Recognized input-format extensions.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Maximum number of files converted concurrently.
    #[serde(default = "default_max_parallel")]
    pub max_parallel_jobs: usize,

    /// Converter settings.
    #[serde(default)]
    pub converter: ConverterConfig,
}

fn default_extensions() -> Vec<String> {
    vec!["wav".to_string(), "aiff".to_string()]
}

fn default_max_parallel() -> usize {
    4
}

impl BatchConfig {
    /// Creates a config for the given roots with default settings.
    pub fn new(input_dir: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            input_dir,
            output_dir,
            recursive: false,
            extensions: default_extensions(),
            max_parallel_jobs: default_max_parallel(),
            converter: ConverterConfig::default(),
        }
    }

    /// Sets recursive traversal.
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Sets the concurrency limit.
    pub fn with_max_parallel(mut self, max: usize) -> Self {
        self.max_parallel_jobs = max;
        self
    }
}
