//! File discovery: tree walking and audio filtering.

mod filter;
mod walker;

pub use filter::filter_audio_files;
pub use walker::walk;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during file discovery.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The scan root could not be read.
    #[error("cannot read scan root {path}")]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Traversal failed below the root.
    #[error("traversal of {path} failed: {reason}")]
    Walk { path: PathBuf, reason: String },
}
