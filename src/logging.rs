//! Logging setup
//!
//! One global subscriber: an `EnvFilter`, a rolling non-blocking file layer
//! (JSON or plain text) and an optional ANSI stdout layer.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::{AppConfig, LogRotation};

/// Install the global subscriber.
///
/// `RUST_LOG` overrides `log_level` when set. Keep the returned guard alive
/// for the lifetime of the process or buffered file output is lost.
pub fn init_logging(config: &AppConfig) -> Result<WorkerGuard> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) => parse_filter(&directives)?,
        Err(_) => parse_filter(&config.log_level)?,
    };

    let appender = file_appender(&config.log_dir, &config.log_file, config.rotation)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let (json_layer, text_layer) = if config.use_json {
        let layer = fmt::layer()
            .json()
            .with_target(true)
            .with_writer(non_blocking)
            .with_ansi(false);
        (Some(layer), None)
    } else {
        let layer = fmt::layer()
            .with_target(false)
            .with_writer(non_blocking)
            .with_ansi(false);
        (None, Some(layer))
    };
    let stdout_layer = config
        .log_stdout
        .then(|| fmt::layer().with_target(false).with_ansi(true));

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .with(stdout_layer)
        .try_init()
        .context("Global tracing subscriber already installed")?;

    Ok(guard)
}

/// Parse filter directives such as `info` or `warn,account_transfer=debug`.
pub fn parse_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives)
        .with_context(|| format!("Invalid log filter '{}'", directives))
}

/// Rolling appender writing `<dir>/<file>.<period>`; creates `dir` if missing.
fn file_appender(dir: &str, file: &str, rotation: LogRotation) -> Result<RollingFileAppender> {
    let dir = Path::new(dir);
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let rotation = match rotation {
        LogRotation::Hourly => Rotation::HOURLY,
        LogRotation::Daily => Rotation::DAILY,
        LogRotation::Never => Rotation::NEVER,
    };

    RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(file)
        .build(dir)
        .with_context(|| format!("Failed to open log file {} in {}", file, dir.display()))
}
