//! Trait definitions for the converter module.

use async_trait::async_trait;
use std::path::Path;

use super::error::TranscodeError;
use super::types::{ConversionJob, EncodeOutput, MediaInfo, TagSet};

/// A transcoder that can probe source files and re-encode them to MP3.
#[async_trait]
pub trait Transcoder: Send + Sync {
    /// Returns the name of this transcoder implementation.
    fn name(&self) -> &str;

    /// Probes a source file, returning its properties and full tag set.
    async fn probe(&self, path: &Path) -> Result<MediaInfo, TranscodeError>;

    /// Transcodes the job's source file to MP3, embedding the given tags.
    ///
    /// The destination directory is created if absent. On success the
    /// destination file exists and carries the tag set.
    async fn transcode(
        &self,
        job: &ConversionJob,
        tags: &TagSet,
    ) -> Result<EncodeOutput, TranscodeError>;

    /// Validates that the transcoder is properly configured and ready.
    async fn validate(&self) -> Result<(), TranscodeError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::SourceFormat;
    use std::path::PathBuf;

    struct NoopTranscoder;

    #[async_trait]
    impl Transcoder for NoopTranscoder {
        fn name(&self) -> &str {
            "noop"
        }

        async fn probe(&self, path: &Path) -> Result<MediaInfo, TranscodeError> {
            Ok(MediaInfo {
                path: path.to_path_buf(),
                size_bytes: 1024,
                duration_secs: 3.0,
                format: "wav".to_string(),
                codec: Some("pcm_s16le".to_string()),
                sample_rate_hz: Some(44100),
                channels: Some(2),
                tags: TagSet::new(),
            })
        }

        async fn transcode(
            &self,
            job: &ConversionJob,
            _tags: &TagSet,
        ) -> Result<EncodeOutput, TranscodeError> {
            Ok(EncodeOutput {
                dest_path: job.dest_path.clone(),
                output_size_bytes: 512,
                duration_ms: 10,
            })
        }

        async fn validate(&self) -> Result<(), TranscodeError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_noop_transcoder_probe() {
        let transcoder = NoopTranscoder;
        let info = transcoder.probe(Path::new("/music/a.wav")).await.unwrap();
        assert_eq!(info.format, "wav");
        assert_eq!(info.sample_rate_hz, Some(44100));
    }

    #[tokio::test]
    async fn test_noop_transcoder_transcode() {
        let transcoder = NoopTranscoder;
        let job = ConversionJob {
            source_path: PathBuf::from("/music/a.wav"),
            dest_path: PathBuf::from("/out/a.mp3"),
            source_format: SourceFormat::Wav,
        };
        let output = transcoder.transcode(&job, &TagSet::new()).await.unwrap();
        assert_eq!(output.dest_path, PathBuf::from("/out/a.mp3"));
    }
}
