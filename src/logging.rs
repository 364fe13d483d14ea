//! File logging for the binary.
//!
//! The terminal is owned by the UI, so every event goes to
//! `<log dir>/anchor.log` through a non-blocking writer.

use anchor_config::{LogConfig, log::LOG_FILE_NAME};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable checked before `RUST_LOG`.
pub const LOG_ENV_VAR: &str = "ANCHOR_LOG";

/// Builds the filter from `ANCHOR_LOG`, then `RUST_LOG`, then the configured
/// level.
fn filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Installs the global subscriber.
///
/// The returned guard flushes buffered lines when dropped and must live
/// until the program exits.
///
/// # Errors
///
/// Returns an error if the log directory cannot be resolved or created.
pub fn init(config: &LogConfig) -> anyhow::Result<WorkerGuard> {
    let dir = config.resolved_directory()?;
    std::fs::create_dir_all(&dir)?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter(config))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .with_line_number(true)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(guard)
}
