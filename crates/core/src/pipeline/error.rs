//! Per-job error taxonomy.

use std::path::PathBuf;
use thiserror::Error;

use crate::converter::TranscodeError;
use crate::cover::CoverError;
use crate::mapper::PathMappingError;

/// A single job's failure. Never fatal to the batch; collected into the
/// final report alongside sibling outcomes.
#[derive(Debug, Error)]
pub enum JobError {
    /// The source extension is not a recognized input format.
    #[error("unrecognized source format '{extension}'")]
    InvalidFormat { extension: String },

    /// The source path could not be mapped under the output root.
    #[error(transparent)]
    PathMapping(#[from] PathMappingError),

    /// Probe or encode failure.
    #[error(transparent)]
    Transcode(#[from] TranscodeError),

    /// Cover extraction failure.
    #[error(transparent)]
    Cover(#[from] CoverError),

    /// Writing the cover frame into the output file failed.
    #[error("failed to write cover tag to {path}")]
    TagWrite {
        path: PathBuf,
        #[source]
        source: id3::Error,
    },

    /// The worker task itself failed (panicked or was torn down).
    #[error("worker task failed: {0}")]
    Worker(String),
}

impl JobError {
    /// Short machine-readable failure kind for summary lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidFormat { .. } => "invalid_format",
            Self::PathMapping(_) => "path_mapping",
            Self::Transcode(TranscodeError::Timeout { .. }) => "timeout",
            Self::Transcode(_) => "transcode",
            Self::Cover(CoverError::MissingCover { .. }) => "missing_cover",
            Self::Cover(CoverError::UnsupportedFormat { .. }) => "unsupported_format",
            Self::Cover(_) => "cover",
            Self::TagWrite { .. } => "tag_write",
            Self::Worker(_) => "worker",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_strings() {
        let err = JobError::InvalidFormat {
            extension: "ogg".to_string(),
        };
        assert_eq!(err.kind(), "invalid_format");

        let err = JobError::Cover(CoverError::MissingCover {
            path: PathBuf::from("/lib/b.aiff"),
        });
        assert_eq!(err.kind(), "missing_cover");

        let err = JobError::Worker("boom".to_string());
        assert_eq!(err.kind(), "worker");
    }
}
