//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable that overrides the log filter
pub const LOG_ENV_VAR: &str = "STRANGERCHAT_LOG";

const DEFAULT_FILTER: &str = "strangerchat=info,stranger_chat=info,warn";

const LOG_FILE_PREFIX: &str = "strangerchat.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/strangerchat/logs/` so they never
/// interleave with the TUI or the headless NDJSON stream.
/// Log level is controlled by `STRANGERCHAT_LOG` environment variable.
///
/// # Examples
/// ```bash
/// STRANGERCHAT_LOG=debug strangerchat
/// STRANGERCHAT_LOG=strangerchat_app=trace strangerchat --headless
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Stranger Chat starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Build the filter from `STRANGERCHAT_LOG`, falling back to info for our crates
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("strangerchat").join("logs"))
}

/// Get the log file path for the current day
///
/// The daily appender suffixes the file name with the UTC date.
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    let date = chrono::Utc::now().format("%Y-%m-%d");
    Ok(dir.join(format!("{}.{}", LOG_FILE_PREFIX, date)))
}
