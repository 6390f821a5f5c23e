//! Per-file transcode worker.

use tracing::debug;

use super::error::JobError;
use super::types::JobSuccess;
use crate::converter::{ConversionJob, Transcoder};
use crate::cover::{attach_front_cover, extract_cover};

/// Runs the full pipeline for one file: probe the source's tag set,
/// extract the cover from the source container, encode to MP3
/// (destination directory created by the transcoder), then attach the
/// cover to the freshly written output.
///
/// The cover is extracted before the encode, so a coverless source fails
/// without ever writing a destination file. A failure after the encode
/// removes the destination file; a failed job never leaves partial
/// output behind.
pub async fn process_job<T: Transcoder + ?Sized>(
    transcoder: &T,
    job: &ConversionJob,
) -> Result<JobSuccess, JobError> {
    debug!(
        source = %job.source_path.display(),
        dest = %job.dest_path.display(),
        format = %job.source_format,
        "processing job"
    );

    let info = transcoder.probe(&job.source_path).await?;

    // Cover handling is synchronous (lofty/image/id3); hop off the runtime.
    let source_path = job.source_path.clone();
    let source_format = job.source_format;
    let cover = tokio::task::spawn_blocking(move || extract_cover(&source_path, source_format))
        .await
        .map_err(|e| JobError::Worker(e.to_string()))??;

    let encoded = transcoder.transcode(job, &info.tags).await?;

    let dest_path = job.dest_path.clone();
    let attach_path = dest_path.clone();
    let attached = tokio::task::spawn_blocking(move || attach_front_cover(&attach_path, &cover))
        .await
        .map_err(|e| JobError::Worker(e.to_string()))
        .and_then(|r| {
            r.map_err(|source| JobError::TagWrite {
                path: dest_path,
                source,
            })
        });
    if let Err(error) = attached {
        let _ = tokio::fs::remove_file(&job.dest_path).await;
        return Err(error);
    }

    Ok(JobSuccess {
        source_path: job.source_path.clone(),
        dest_path: job.dest_path.clone(),
        output_size_bytes: encoded.output_size_bytes,
        duration_ms: encoded.duration_ms,
    })
}
