//! Directory tree walker.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::ScanError;

/// Enumerates every regular file reachable from `root`.
///
/// A root that is itself a regular file yields a single-element result.
/// With `recursive` set, descent covers the whole tree; otherwise only the
/// root's immediate children are listed. Symbolic links are never
/// followed, so link cycles cannot cause unbounded traversal. Order is
/// unspecified.
pub fn walk(root: &Path, recursive: bool) -> Result<Vec<PathBuf>, ScanError> {
    let metadata = std::fs::metadata(root).map_err(|source| ScanError::RootUnreadable {
        path: root.to_path_buf(),
        source,
    })?;

    if metadata.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut walker = WalkDir::new(root).follow_links(false);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| ScanError::Walk {
            path: root.to_path_buf(),
            reason: e.to_string(),
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
