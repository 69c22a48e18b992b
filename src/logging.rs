//! File logging for the terminal binary.
//!
//! The terminal is owned by the renderer, so log output only ever goes to a
//! file, and only when a path is configured.

use std::path::Path;

use anyhow::{anyhow, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Install the global subscriber if `config.log_path` is set.
///
/// Keep the returned guard alive for the whole session; dropping it flushes
/// and stops the background writer.
pub fn init(config: &Config) -> Result<Option<WorkerGuard>> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("log path has no file name: {}", path.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_new(&config.log_filter)
        .map_err(|e| anyhow!("invalid log filter {:?}: {e}", config.log_filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;

    tracing::info!(path = %path.display(), filter = %config.log_filter, "logging started");
    Ok(Some(guard))
}
