//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "ANKILLM_LOG";

const LOG_FILE_NAME: &str = "anki-llm.log";

const DEFAULT_FILTER: &str = "anki_llm=info,ankillm_app=info,ankillm_remote=info,ankillm_tui=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/anki-llm/logs/`, never to stdout:
/// the terminal belongs to the TUI (or to NDJSON events in headless mode).
/// Log level is controlled by the `ANKILLM_LOG` environment variable.
///
/// # Examples
/// ```bash
/// ANKILLM_LOG=debug anki-llm
/// ANKILLM_LOG=ankillm_remote=trace anki-llm --pdf notes.pdf --deck Biology
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
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
    tracing::info!("anki-llm starting (v{})", env!("CARGO_PKG_VERSION"));
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
pub fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("anki-llm").join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_is_namespaced() {
        let dir = get_log_directory().unwrap();
        assert!(dir.ends_with("anki-llm/logs"));
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
