//! Converter module for re-encoding lossless audio files to MP3.
//!
//! Provides the `Transcoder` trait and the FFmpeg-backed implementation.
//! Probing goes through ffprobe and returns the source's properties along
//! with its full tag dictionary; encoding goes through ffmpeg's libmp3lame
//! at a constant bitrate, writing the tag dictionary into the output.
//!
//! # Example
//!
//! ```ignore
//! use shellac_core::converter::{ConversionJob, FfmpegTranscoder, SourceFormat, Transcoder};
//!
//! let transcoder = FfmpegTranscoder::with_defaults();
//! transcoder.validate().await?;
//!
//! let info = transcoder.probe(Path::new("/lib/a.wav")).await?;
//! let job = ConversionJob {
//!     source_path: PathBuf::from("/lib/a.wav"),
//!     dest_path: PathBuf::from("/out/a.mp3"),
//!     source_format: SourceFormat::Wav,
//! };
//! let output = transcoder.transcode(&job, &info.tags).await?;
//! ```

mod config;
mod error;
mod ffmpeg;
mod traits;
mod types;

pub use config::ConverterConfig;
pub use error::TranscodeError;
pub use ffmpeg::FfmpegTranscoder;
pub use traits::Transcoder;
pub use types::{ConversionJob, EncodeOutput, MediaInfo, SourceFormat, TagSet};
