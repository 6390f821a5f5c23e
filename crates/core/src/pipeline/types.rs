//! Types for batch outcomes.

use std::path::PathBuf;

use super::error::JobError;

/// A successfully converted file.
#[derive(Debug, Clone)]
pub struct JobSuccess {
    /// Source file path.
    pub source_path: PathBuf,
    /// Destination file path.
    pub dest_path: PathBuf,
    /// Output file size in bytes.
    pub output_size_bytes: u64,
    /// Wall-clock encode duration in milliseconds.
    pub duration_ms: u64,
}

/// A failed job, recorded without aborting its siblings.
#[derive(Debug)]
pub struct FailedJob {
    /// Source file path.
    pub source_path: PathBuf,
    /// What went wrong.
    pub error: JobError,
}

/// Final summary of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Number of files that passed the audio filter.
    pub total: usize,
    /// Jobs that completed successfully.
    pub succeeded: Vec<JobSuccess>,
    /// Jobs that failed, with their failure kinds.
    pub failed: Vec<FailedJob>,
    /// Wall-clock duration of the whole batch in milliseconds.
    pub duration_ms: u64,
}

impl BatchReport {
    /// Number of successful jobs.
    pub fn success_count(&self) -> usize {
        self.succeeded.len()
    }

    /// Number of failed jobs.
    pub fn failure_count(&self) -> usize {
        self.failed.len()
    }

    /// Whether every dispatched job completed successfully.
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}
