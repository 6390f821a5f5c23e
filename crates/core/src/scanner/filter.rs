//! Extension-based audio file filter.

use std::path::PathBuf;

/// Keeps the paths whose final extension is in the recognized set.
///
/// Pure and order-preserving. Extensions are compared case-insensitively;
/// paths without an extension never match.
pub fn filter_audio_files<I>(paths: I, extensions: &[String]) -> Vec<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    paths
        .into_iter()
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| {
                    let ext = ext.to_lowercase();
                    extensions.iter().any(|e| e.to_lowercase() == ext)
                })
                .unwrap_or(false)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exts(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_filter_keeps_recognized_extensions() {
        let paths = vec![
            PathBuf::from("/lib/a.wav"),
            PathBuf::from("/lib/b.aiff"),
            PathBuf::from("/lib/c.flac"),
            PathBuf::from("/lib/d.txt"),
        ];
        let kept = filter_audio_files(paths, &exts(&["wav", "aiff"]));
        assert_eq!(
            kept,
            vec![PathBuf::from("/lib/a.wav"), PathBuf::from("/lib/b.aiff")]
        );
    }

    #[test]
    fn test_filter_rejects_flac() {
        let paths = vec![PathBuf::from("/lib/c.flac")];
        let kept = filter_audio_files(paths, &exts(&["wav", "aiff"]));
        assert!(kept.is_empty());
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let paths = vec![PathBuf::from("/lib/LOUD.WAV")];
        let kept = filter_audio_files(paths, &exts(&["wav"]));
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_filter_ignores_extensionless_paths() {
        let paths = vec![PathBuf::from("/lib/README"), PathBuf::from("/lib/.hidden")];
        let kept = filter_audio_files(paths, &exts(&["wav", "aiff"]));
        assert!(kept.is_empty());
    }

    #[test]
    fn test_filter_preserves_order() {
        let paths = vec![
            PathBuf::from("/lib/z.wav"),
            PathBuf::from("/lib/a.aiff"),
            PathBuf::from("/lib/m.wav"),
        ];
        let kept = filter_audio_files(paths.clone(), &exts(&["wav", "aiff"]));
        assert_eq!(kept, paths);
    }
}
