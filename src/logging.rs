//! File-backed tracing setup. The terminal belongs to the UI, so log events
//! never go to stdout or stderr.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;
use crate::error::{Error, Result};

/// Directory log files are written to.
pub fn log_directory(settings: &LoggingSettings) -> PathBuf {
    settings
        .directory
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("quaver"))
}

/// `RUST_LOG` wins over the configured filter.
fn env_filter(settings: &LoggingSettings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.filter))
}

/// Install the global subscriber. Keep the returned guard alive for as long as
/// events should be flushed.
pub fn init(settings: &LoggingSettings) -> Result<WorkerGuard> {
    let dir = log_directory(settings);
    std::fs::create_dir_all(&dir)?;

    let appender = tracing_appender::rolling::never(&dir, &settings.file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_target(true)
        .with_ansi(false)
        .with_env_filter(env_filter(settings))
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    tracing::info!(dir = %dir.display(), "logging initialised");
    Ok(guard)
}
