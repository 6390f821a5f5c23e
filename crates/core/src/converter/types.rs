//! Types for the converter module.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::PathBuf;

/// Recognized source container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    /// WAVE (RIFF)
    Wav,
    /// Audio Interchange File Format
    Aiff,
}

impl SourceFormat {
    /// Parses a format from a file extension, case-insensitively.
    pub fn from_extension(ext: &str) -> Option<Self> {
        if ext.eq_ignore_ascii_case("wav") {
            Some(Self::Wav)
        } else if ext.eq_ignore_ascii_case("aiff") {
            Some(Self::Aiff)
        } else {
            None
        }
    }

    /// Returns the canonical file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Aiff => "aiff",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// The textual tag dictionary carried alongside the audio payload.
///
/// Keys are unique; iteration is sorted by key so the generated ffmpeg
/// arguments are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(BTreeMap<String, String>);

impl TagSet {
    /// Creates an empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a tag, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Looks up a tag value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Number of tags in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Converts the tag set to ffmpeg `-metadata` arguments.
    pub fn to_ffmpeg_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(self.0.len() * 2);
        for (key, value) in &self.0 {
            args.push("-metadata".to_string());
            args.push(format!("{}={}", key, value));
        }
        args
    }
}

impl From<HashMap<String, String>> for TagSet {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map.into_iter().collect())
    }
}

impl FromIterator<(String, String)> for TagSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A single-file conversion request.
///
/// Created by the batch runner after filtering and path mapping; consumed
/// exactly once by a transcode worker.
#[derive(Debug, Clone)]
pub struct ConversionJob {
    /// Source file path.
    pub source_path: PathBuf,
    /// Destination file path (always ends in `.mp3`).
    pub dest_path: PathBuf,
    /// Container format of the source file.
    pub source_format: SourceFormat,
}

/// Result of a successful encode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodeOutput {
    /// Destination file path.
    pub dest_path: PathBuf,
    /// Output file size in bytes.
    pub output_size_bytes: u64,
    /// Encode duration in milliseconds.
    pub duration_ms: u64,
}

/// Information about a source audio file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaInfo {
    /// File path.
    pub path: PathBuf,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Duration in seconds.
    pub duration_secs: f64,
    /// Container format name (e.g. "wav", "aiff").
    pub format: String,
    /// Audio codec (if reported).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec: Option<String>,
    /// Audio sample rate in Hz (if reported).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_rate_hz: Option<u32>,
    /// Audio channel count (if reported).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<u8>,
    /// The full textual tag dictionary of the container.
    #[serde(default)]
    pub tags: TagSet,
}
