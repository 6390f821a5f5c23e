//! Error types for the cover module.

use std::path::PathBuf;
use thiserror::Error;

use crate::converter::SourceFormat;

/// Errors that can occur while extracting an embedded cover image.
#[derive(Debug, Error)]
pub enum CoverError {
    /// The file's container is not the expected format variant.
    #[error("unsupported container format for {path}: expected {expected}, detected {detected}")]
    UnsupportedFormat {
        path: PathBuf,
        expected: SourceFormat,
        detected: String,
    },

    /// The container carries no embedded picture frame.
    #[error("no embedded cover art in {path}")]
    MissingCover { path: PathBuf },

    /// The container could not be opened or parsed.
    #[error("failed to read {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    /// The embedded picture could not be decoded or re-encoded.
    #[error("failed to decode embedded image in {path}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
