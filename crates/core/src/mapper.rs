//! Output path mapping.
//!
//! Derives the mirrored destination path for a source file: the input-root
//! prefix is replaced by the output root and the final extension by `mp3`.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error raised when a source path does not lie under the input root.
#[derive(Debug, Error)]
#[error("source path {source_path} does not lie under input root {input_root}")]
pub struct PathMappingError {
    pub source_path: PathBuf,
    pub input_root: PathBuf,
}

/// Maps a source path under `input_root` to its mirrored `.mp3` path under
/// `output_root`.
pub fn map_output_path(
    input_root: &Path,
    output_root: &Path,
    source: &Path,
) -> Result<PathBuf, PathMappingError> {
    let relative = source
        .strip_prefix(input_root)
        .map_err(|_| PathMappingError {
            source_path: source.to_path_buf(),
            input_root: input_root.to_path_buf(),
        })?;

    // When the input root is itself the source file, mirror it directly
    // under the output root instead of producing an empty relative path.
    let mapped = if relative.as_os_str().is_empty() {
        match source.file_name() {
            Some(name) => output_root.join(name),
            None => output_root.to_path_buf(),
        }
    } else {
        output_root.join(relative)
    };

    Ok(mapped.with_extension("mp3"))
}
