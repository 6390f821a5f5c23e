//! Configuration validation.

use super::{types::BatchConfig, ConfigError};

/// Validates a batch configuration before any work starts.
pub fn validate_config(config: &BatchConfig) -> Result<(), ConfigError> {
    if !config.input_dir.is_dir() {
        return Err(ConfigError::InputDirNotFound {
            path: config.input_dir.clone(),
        });
    }

    if config.max_parallel_jobs == 0 {
        return Err(ConfigError::InvalidConcurrency);
    }

    if config.extensions.is_empty() {
        return Err(ConfigError::NoExtensions);
    }

    if config.converter.bitrate_kbps == 0 {
        return Err(ConfigError::InvalidBitrate);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn valid_config() -> (TempDir, BatchConfig) {
        let dir = TempDir::new().unwrap();
        let config = BatchConfig::new(dir.path().to_path_buf(), PathBuf::from("/out"));
        (dir, config)
    }

    #[test]
    fn test_valid_config() {
        let (_dir, config) = valid_config();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_missing_input_dir() {
        let config = BatchConfig::new(
            PathBuf::from("/nonexistent/shellac-input"),
            PathBuf::from("/out"),
        );
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::InputDirNotFound { .. })
        ));
    }

    #[test]
    fn test_zero_concurrency() {
        let (_dir, mut config) = valid_config();
        config.max_parallel_jobs = 0;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::InvalidConcurrency)
        ));
    }

    #[test]
    fn test_empty_extensions() {
        let (_dir, mut config) = valid_config();
        config.extensions.clear();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::NoExtensions)
        ));
    }

    #[test]
    fn test_zero_bitrate() {
        let (_dir, mut config) = valid_config();
        config.converter.bitrate_kbps = 0;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::InvalidBitrate)
        ));
    }
}
