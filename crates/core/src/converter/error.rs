//! Error types for the converter module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while probing or transcoding a file.
#[derive(Debug, Error)]
pub enum TranscodeError {
    /// FFmpeg binary not found.
    #[error("ffmpeg not found at path: {path}")]
    FfmpegNotFound { path: PathBuf },

    /// FFprobe binary not found.
    #[error("ffprobe not found at path: {path}")]
    FfprobeNotFound { path: PathBuf },

    /// Input file not found.
    #[error("input file not found: {path}")]
    InputNotFound { path: PathBuf },

    /// The audio payload could not be decoded or re-encoded.
    #[error("decode failed: {reason}")]
    Decode {
        reason: String,
        stderr: Option<String>,
    },

    /// Output directory does not exist and could not be created.
    #[error("failed to create output directory: {path}")]
    OutputDirectoryFailed { path: PathBuf },

    /// Transcode timed out.
    #[error("transcode timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    /// Failed to probe the source file.
    #[error("failed to probe media file: {reason}")]
    Probe { reason: String },

    /// Failed to parse ffprobe output.
    #[error("failed to parse media info: {reason}")]
    Parse { reason: String },

    /// I/O error during transcode.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TranscodeError {
    /// Creates a new decode error with optional stderr output.
    pub fn decode_failed(reason: impl Into<String>, stderr: Option<String>) -> Self {
        Self::Decode {
            reason: reason.into(),
            stderr,
        }
    }

    /// Creates a new probe error.
    pub fn probe_failed(reason: impl Into<String>) -> Self {
        Self::Probe {
            reason: reason.into(),
        }
    }
}
