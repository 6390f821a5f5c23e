//! Configuration loading.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::Path;

use super::{types::BatchConfig, ConfigError};

/// Loads configuration by layering a TOML file and environment variable
/// overrides (`SHELLAC_`, nested keys separated by `__`) over a base
/// config.
pub fn load_config(path: &Path, base: BatchConfig) -> Result<BatchConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let config: BatchConfig = Figment::from(Serialized::defaults(base))
        .merge(Toml::file(path))
        .merge(Env::prefixed("SHELLAC_").split("__"))
        .extract()
        .map_err(|e| ConfigError::Parse(e.to_string()))?;

    Ok(config)
}

/// Loads configuration from a TOML string (useful for testing).
pub fn load_config_from_str(toml_str: &str) -> Result<BatchConfig, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_str_valid() {
        let toml = r#"
input_dir = "/lib"
output_dir = "/out"
max_parallel_jobs = 2

[converter]
bitrate_kbps = 320
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.max_parallel_jobs, 2);
        assert_eq!(config.converter.bitrate_kbps, 320);
    }

    #[test]
    fn test_load_config_from_str_missing_roots() {
        let result = load_config_from_str("max_parallel_jobs = 2");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let base = BatchConfig::new(PathBuf::from("/lib"), PathBuf::from("/out"));
        let result = load_config(Path::new("/nonexistent/shellac.toml"), base);
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_config_file_overrides_base() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
recursive = true
max_parallel_jobs = 16
"#
        )
        .unwrap();

        let base = BatchConfig::new(PathBuf::from("/lib"), PathBuf::from("/out"));
        let config = load_config(temp_file.path(), base).unwrap();
        assert!(config.recursive);
        assert_eq!(config.max_parallel_jobs, 16);
        // Base values survive where the file is silent
        assert_eq!(config.input_dir, PathBuf::from("/lib"));
        assert_eq!(config.output_dir, PathBuf::from("/out"));
    }
}
