//! Batch orchestration: scan, map, dispatch, collect.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{info, warn};

use super::error::JobError;
use super::types::{BatchReport, FailedJob, JobSuccess};
use super::worker::process_job;
use crate::config::BatchConfig;
use crate::converter::{ConversionJob, SourceFormat, Transcoder};
use crate::mapper::map_output_path;
use crate::scanner::{filter_audio_files, walk, ScanError};

/// Runs a whole conversion batch against one transcoder.
///
/// Jobs run concurrently, at most `max_parallel_jobs` at a time. A failed
/// job never aborts its siblings; failures are collected into the report.
pub struct BatchRunner<T: Transcoder + 'static> {
    config: BatchConfig,
    transcoder: Arc<T>,
    semaphore: Arc<Semaphore>,
}

impl<T: Transcoder + 'static> BatchRunner<T> {
    pub fn new(config: BatchConfig, transcoder: Arc<T>) -> Self {
        let semaphore = Arc::new(Semaphore::new(config.max_parallel_jobs));
        Self {
            config,
            transcoder,
            semaphore,
        }
    }

    /// Scans the input root and converts every recognized audio file.
    ///
    /// Fails only when the input root itself cannot be scanned; anything
    /// after that point is a per-job failure in the report.
    pub async fn run(&self) -> Result<BatchReport, ScanError> {
        let started = Instant::now();

        let entries = walk(&self.config.input_dir, self.config.recursive)?;
        let files = filter_audio_files(entries, &self.config.extensions);
        info!(
            input = %self.config.input_dir.display(),
            output = %self.config.output_dir.display(),
            files = files.len(),
            max_parallel = self.config.max_parallel_jobs,
            "starting batch"
        );

        let mut report = BatchReport {
            total: files.len(),
            ..Default::default()
        };

        let mut tasks: JoinSet<(ConversionJob, Result<JobSuccess, JobError>)> = JoinSet::new();
        for source_path in files {
            let job = match self.build_job(source_path) {
                Ok(job) => job,
                Err(failed) => {
                    warn!(
                        source = %failed.source_path.display(),
                        kind = failed.error.kind(),
                        error = %failed.error,
                        "job rejected"
                    );
                    report.failed.push(failed);
                    continue;
                }
            };

            let transcoder = Arc::clone(&self.transcoder);
            let semaphore = Arc::clone(&self.semaphore);
            tasks.spawn(async move {
                let result = match semaphore.acquire_owned().await {
                    Ok(_permit) => process_job(transcoder.as_ref(), &job).await,
                    Err(_) => Err(JobError::Worker("job queue closed".to_string())),
                };
                (job, result)
            });
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((job, Ok(success))) => {
                    info!(
                        source = %job.source_path.display(),
                        dest = %success.dest_path.display(),
                        size_bytes = success.output_size_bytes,
                        duration_ms = success.duration_ms,
                        "converted"
                    );
                    report.succeeded.push(success);
                }
                Ok((job, Err(error))) => {
                    warn!(
                        source = %job.source_path.display(),
                        kind = error.kind(),
                        error = %error,
                        "job failed"
                    );
                    report.failed.push(FailedJob {
                        source_path: job.source_path,
                        error,
                    });
                }
                Err(join_error) => {
                    warn!(error = %join_error, "worker task panicked");
                    report.failed.push(FailedJob {
                        source_path: PathBuf::from("<unknown>"),
                        error: JobError::Worker(join_error.to_string()),
                    });
                }
            }
        }

        report.duration_ms = started.elapsed().as_millis() as u64;
        info!(
            succeeded = report.success_count(),
            failed = report.failure_count(),
            duration_ms = report.duration_ms,
            "batch finished"
        );
        Ok(report)
    }

    fn build_job(&self, source_path: PathBuf) -> Result<ConversionJob, FailedJob> {
        let extension = source_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        let source_format = match SourceFormat::from_extension(extension) {
            Some(format) => format,
            None => {
                return Err(FailedJob {
                    error: JobError::InvalidFormat {
                        extension: extension.to_string(),
                    },
                    source_path,
                })
            }
        };

        let dest_path = match map_output_path(
            &self.config.input_dir,
            &self.config.output_dir,
            &source_path,
        ) {
            Ok(path) => path,
            Err(e) => {
                return Err(FailedJob {
                    source_path,
                    error: JobError::PathMapping(e),
                })
            }
        };

        Ok(ConversionJob {
            source_path,
            dest_path,
            source_format,
        })
    }
}
