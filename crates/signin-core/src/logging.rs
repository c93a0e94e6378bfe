//! Tracing setup.
//!
//! The interactive form owns the terminal, so it logs to a file under
//! `${SIGNIN_HOME}/logs`. Headless commands log to stderr.
//! `RUST_LOG` always wins over the configured level.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// File name used inside the logs directory.
pub const LOG_FILE_NAME: &str = "signin.log";

fn env_filter(fallback: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(fallback)
            .with_context(|| format!("Invalid log level '{fallback}'")),
    }
}

/// Installs a subscriber that appends to `<dir>/signin.log`.
///
/// The returned guard flushes buffered lines on drop; keep it alive for the
/// whole session.
///
/// # Errors
/// Returns an error if the directory cannot be created, the filter is
/// invalid, or a global subscriber is already installed.
pub fn init_file(dir: &Path, fallback_level: &str) -> Result<WorkerGuard> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_env_filter(env_filter(fallback_level)?)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to install file logger")?;

    Ok(guard)
}

/// Installs a subscriber that writes to stderr.
///
/// # Errors
/// Returns an error if the filter is invalid or a global subscriber is
/// already installed.
pub fn init_stderr(fallback_level: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(fallback_level)?)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to install stderr logger")
}
