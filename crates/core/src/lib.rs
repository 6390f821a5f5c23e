pub mod config;
pub mod converter;
pub mod cover;
pub mod mapper;
pub mod pipeline;
pub mod scanner;
pub mod testing;

pub use config::{load_config, load_config_from_str, validate_config, BatchConfig, ConfigError};
pub use converter::{
    ConversionJob, ConverterConfig, EncodeOutput, FfmpegTranscoder, MediaInfo, SourceFormat,
    TagSet, TranscodeError, Transcoder,
};
pub use cover::{attach_front_cover, extract_cover, CoverError, CoverImage};
pub use mapper::{map_output_path, PathMappingError};
pub use pipeline::{BatchReport, BatchRunner, FailedJob, JobError, JobSuccess};
pub use scanner::{filter_audio_files, walk, ScanError};
