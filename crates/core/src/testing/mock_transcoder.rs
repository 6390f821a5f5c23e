//! Mock transcoder for testing.

use async_trait::async_trait;
use id3::TagLike;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::converter::{
    ConversionJob, EncodeOutput, MediaInfo, TagSet, TranscodeError, Transcoder,
};

/// Mock implementation of the Transcoder trait.
///
/// Provides controllable behavior for testing:
/// - Track submitted jobs for assertions
/// - Simulate encode failures
/// - Control probe results and the tag set they carry
/// - Track how many transcodes run at once
///
/// On success the mock actually writes the destination file and stamps it
/// with an ID3v2 tag built from the supplied tag set, so downstream cover
/// attachment runs against a real file.
#[derive(Debug)]
pub struct MockTranscoder {
    /// Recorded jobs.
    jobs: Arc<RwLock<Vec<ConversionJob>>>,
    /// Pre-configured probe results by path.
    probe_results: Arc<RwLock<HashMap<PathBuf, MediaInfo>>>,
    /// Tags returned by probe for paths without a pre-configured result.
    default_tags: Arc<RwLock<TagSet>>,
    /// If set, the next transcode will fail with this error.
    next_transcode_error: Arc<RwLock<Option<TranscodeError>>>,
    /// Simulated encode duration in milliseconds.
    transcode_delay_ms: u64,
    /// Transcodes currently in flight.
    active: Arc<AtomicUsize>,
    /// High-water mark of concurrent transcodes.
    max_active: Arc<AtomicUsize>,
}

impl Default for MockTranscoder {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTranscoder {
    /// Create a new mock transcoder.
    pub fn new() -> Self {
        Self {
            jobs: Arc::new(RwLock::new(Vec::new())),
            probe_results: Arc::new(RwLock::new(HashMap::new())),
            default_tags: Arc::new(RwLock::new(TagSet::new())),
            next_transcode_error: Arc::new(RwLock::new(None)),
            transcode_delay_ms: 0,
            active: Arc::new(AtomicUsize::new(0)),
            max_active: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Set a simulated encode duration.
    pub fn with_transcode_delay_ms(mut self, delay_ms: u64) -> Self {
        self.transcode_delay_ms = delay_ms;
        self
    }

    /// Get all recorded jobs.
    pub async fn recorded_jobs(&self) -> Vec<ConversionJob> {
        self.jobs.read().await.clone()
    }

    /// Get the number of transcodes performed.
    pub async fn job_count(&self) -> usize {
        self.jobs.read().await.len()
    }

    /// Set a probe result for a specific path.
    pub async fn set_probe_result(&self, path: impl AsRef<Path>, info: MediaInfo) {
        self.probe_results
            .write()
            .await
            .insert(path.as_ref().to_path_buf(), info);
    }

    /// Set the tag set reported by probe for unconfigured paths.
    pub async fn set_default_tags(&self, tags: TagSet) {
        *self.default_tags.write().await = tags;
    }

    /// Configure the next transcode to fail with the given error.
    pub async fn set_next_transcode_error(&self, error: TranscodeError) {
        *self.next_transcode_error.write().await = Some(error);
    }

    /// Highest number of transcodes that ran concurrently.
    pub fn max_active(&self) -> usize {
        self.max_active.load(Ordering::SeqCst)
    }

    async fn take_transcode_error(&self) -> Option<TranscodeError> {
        self.next_transcode_error.write().await.take()
    }

    /// Create a default MediaInfo for a probed path.
    async fn create_default_info(&self, path: &Path) -> MediaInfo {
        let format = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_else(|| "unknown".to_string());

        MediaInfo {
            path: path.to_path_buf(),
            size_bytes: 1024 * 1024,
            duration_secs: 180.0,
            format,
            codec: Some("pcm_s16le".to_string()),
            sample_rate_hz: Some(44_100),
            channels: Some(2),
            tags: self.default_tags.read().await.clone(),
        }
    }

    async fn write_output(
        &self,
        job: &ConversionJob,
        tags: &TagSet,
    ) -> Result<EncodeOutput, TranscodeError> {
        if self.transcode_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.transcode_delay_ms)).await;
        }

        if let Some(parent) = job.dest_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&job.dest_path, b"mock mp3 payload").await?;

        let mut tag = id3::Tag::new();
        for (key, value) in tags.iter() {
            match key {
                "title" => tag.set_title(value),
                "artist" => tag.set_artist(value),
                "album" => tag.set_album(value),
                _ => {
                    tag.add_frame(id3::frame::ExtendedText {
                        description: key.to_string(),
                        value: value.to_string(),
                    });
                }
            }
        }
        tag.write_to_path(&job.dest_path, id3::Version::Id3v24)
            .map_err(|e| {
                TranscodeError::decode_failed(format!("failed to write tags: {e}"), None)
            })?;

        let size = tokio::fs::metadata(&job.dest_path).await?.len();
        Ok(EncodeOutput {
            dest_path: job.dest_path.clone(),
            output_size_bytes: size,
            duration_ms: self.transcode_delay_ms,
        })
    }
}

#[async_trait]
impl Transcoder for MockTranscoder {
    fn name(&self) -> &str {
        "mock"
    }

    async fn probe(&self, path: &Path) -> Result<MediaInfo, TranscodeError> {
        if let Some(info) = self.probe_results.read().await.get(path) {
            return Ok(info.clone());
        }
        Ok(self.create_default_info(path).await)
    }

    async fn transcode(
        &self,
        job: &ConversionJob,
        tags: &TagSet,
    ) -> Result<EncodeOutput, TranscodeError> {
        self.jobs.write().await.push(job.clone());

        if let Some(err) = self.take_transcode_error().await {
            return Err(err);
        }

        let active = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_active.fetch_max(active, Ordering::SeqCst);

        let result = self.write_output(job, tags).await;
        self.active.fetch_sub(1, Ordering::SeqCst);
        result
    }

    async fn validate(&self) -> Result<(), TranscodeError> {
        Ok(())
    }
}
