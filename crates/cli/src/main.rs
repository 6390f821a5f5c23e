mod args;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shellac_core::{
    load_config, validate_config, BatchConfig, BatchRunner, FfmpegTranscoder, Transcoder,
};

use args::{ArgsError, CliArgs, USAGE};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(ArgsError::HelpRequested) => {
            print!("{USAGE}");
            return Ok(());
        }
        Err(e) => {
            eprint!("{USAGE}");
            anyhow::bail!(e);
        }
    };

    let base = BatchConfig::new(cli.input_dir.clone(), cli.output_dir.clone());
    let config = match &cli.config_path {
        Some(path) => load_config(path, base)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => base,
    };
    let config = apply_cli_overrides(config, &cli);

    validate_config(&config).context("configuration validation failed")?;

    let transcoder = Arc::new(FfmpegTranscoder::new(config.converter.clone()));
    transcoder
        .validate()
        .await
        .context("ffmpeg is not available")?;

    println!(
        "Processing files from {} into {}...",
        config.input_dir.display(),
        config.output_dir.display()
    );

    let runner = BatchRunner::new(config, transcoder);
    let report = runner.run().await.context("failed to scan input root")?;

    for failed in &report.failed {
        eprintln!(
            "failed [{}] {}: {}",
            failed.error.kind(),
            failed.source_path.display(),
            failed.error
        );
    }
    println!(
        "Done: {} converted, {} failed ({} ms)",
        report.success_count(),
        report.failure_count(),
        report.duration_ms
    );

    Ok(())
}

/// Flags win over file and environment, including the roots given with
/// `-d` and `-o`.
fn apply_cli_overrides(mut config: BatchConfig, cli: &CliArgs) -> BatchConfig {
    config.input_dir = cli.input_dir.clone();
    config.output_dir = cli.output_dir.clone();
    if cli.recursive {
        config.recursive = true;
    }
    if let Some(jobs) = cli.jobs {
        config.max_parallel_jobs = jobs;
    }
    config
}
