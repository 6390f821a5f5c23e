//! Command-line argument parsing.

use std::path::PathBuf;
use thiserror::Error;

/// Usage text printed for `-h` and on argument errors.
pub const USAGE: &str = "\
shellac - batch WAV/AIFF to MP3 converter

Usage: shellac -d <input-dir> -o <output-dir> [options]

Options:
  -d, --directory <path>   Input root to scan for audio files (required)
  -o, --out-dir <path>     Output root for the mirrored MP3 tree (required)
  -r, --recursive          Recurse into subdirectories
  -j, --jobs <n>           Maximum number of concurrent conversions
  -c, --config <path>      TOML config file
  -h, --help               Print this help
";

/// Parsed command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Input root.
    pub input_dir: PathBuf,
    /// Output root.
    pub output_dir: PathBuf,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Concurrency override, when given.
    pub jobs: Option<usize>,
    /// Config file path, when given.
    pub config_path: Option<PathBuf>,
}

/// Argument parsing failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    /// `-h` / `--help` was passed; not an error, but parsing stops.
    #[error("help requested")]
    HelpRequested,

    /// A flag that takes a value appeared without one.
    #[error("flag '{flag}' requires a value")]
    MissingValue { flag: String },

    /// A required flag is absent.
    #[error("missing required flag '{flag}'")]
    MissingRequired { flag: String },

    /// Unrecognized argument.
    #[error("unknown argument '{arg}'")]
    UnknownFlag { arg: String },

    /// `-j` value is not a positive integer.
    #[error("invalid jobs value '{value}'")]
    InvalidJobs { value: String },
}

impl CliArgs {
    /// Parses arguments, not including the program name.
    pub fn parse<I>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut input_dir = None;
        let mut output_dir = None;
        let mut recursive = false;
        let mut jobs = None;
        let mut config_path = None;

        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-h" | "--help" => return Err(ArgsError::HelpRequested),
                "-r" | "--recursive" => recursive = true,
                "-d" | "--directory" => {
                    input_dir = Some(PathBuf::from(value_for(&arg, &mut iter)?));
                }
                "-o" | "--out-dir" => {
                    output_dir = Some(PathBuf::from(value_for(&arg, &mut iter)?));
                }
                "-c" | "--config" => {
                    config_path = Some(PathBuf::from(value_for(&arg, &mut iter)?));
                }
                "-j" | "--jobs" => {
                    let value = value_for(&arg, &mut iter)?;
                    let parsed: usize = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidJobs {
                            value: value.clone(),
                        })?;
                    if parsed == 0 {
                        return Err(ArgsError::InvalidJobs { value });
                    }
                    jobs = Some(parsed);
                }
                _ => return Err(ArgsError::UnknownFlag { arg }),
            }
        }

        Ok(Self {
            input_dir: input_dir.ok_or(ArgsError::MissingRequired {
                flag: "-d".to_string(),
            })?,
            output_dir: output_dir.ok_or(ArgsError::MissingRequired {
                flag: "-o".to_string(),
            })?,
            recursive,
            jobs,
            config_path,
        })
    }
}

fn value_for<I>(flag: &str, iter: &mut I) -> Result<String, ArgsError>
where
    I: Iterator<Item = String>,
{
    iter.next().ok_or_else(|| ArgsError::MissingValue {
        flag: flag.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, ArgsError> {
        CliArgs::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_minimal() {
        let args = parse(&["-d", "/lib", "-o", "/out"]).unwrap();
        assert_eq!(args.input_dir, PathBuf::from("/lib"));
        assert_eq!(args.output_dir, PathBuf::from("/out"));
        assert!(!args.recursive);
        assert_eq!(args.jobs, None);
        assert_eq!(args.config_path, None);
    }

    #[test]
    fn test_long_flags() {
        let args = parse(&[
            "--directory",
            "/lib",
            "--out-dir",
            "/out",
            "--recursive",
            "--jobs",
            "8",
            "--config",
            "shellac.toml",
        ])
        .unwrap();
        assert!(args.recursive);
        assert_eq!(args.jobs, Some(8));
        assert_eq!(args.config_path, Some(PathBuf::from("shellac.toml")));
    }

    #[test]
    fn test_help() {
        assert_eq!(parse(&["-h"]), Err(ArgsError::HelpRequested));
        assert_eq!(
            parse(&["-d", "/lib", "--help"]),
            Err(ArgsError::HelpRequested)
        );
    }

    #[test]
    fn test_missing_required() {
        assert_eq!(
            parse(&["-o", "/out"]),
            Err(ArgsError::MissingRequired {
                flag: "-d".to_string()
            })
        );
        assert_eq!(
            parse(&["-d", "/lib"]),
            Err(ArgsError::MissingRequired {
                flag: "-o".to_string()
            })
        );
    }

    #[test]
    fn test_missing_value() {
        assert_eq!(
            parse(&["-d"]),
            Err(ArgsError::MissingValue {
                flag: "-d".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_flag() {
        assert_eq!(
            parse(&["-d", "/lib", "-o", "/out", "--verbose"]),
            Err(ArgsError::UnknownFlag {
                arg: "--verbose".to_string()
            })
        );
    }

    #[test]
    fn test_invalid_jobs() {
        assert!(matches!(
            parse(&["-d", "/lib", "-o", "/out", "-j", "zero"]),
            Err(ArgsError::InvalidJobs { .. })
        ));
        assert!(matches!(
            parse(&["-d", "/lib", "-o", "/out", "-j", "0"]),
            Err(ArgsError::InvalidJobs { .. })
        ));
    }
}
