//! File-based logging setup.
//!
//! The TUI owns the terminal, so diagnostics go to a log file under
//! ${GREETER_HOME}/logs instead of stderr. The level is controlled by
//! RUST_LOG (default "info").

use std::fs;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber writing to greeter.log.
///
/// Call once at startup, before the TUI takes over the terminal.
pub fn init_file_logging() -> Result<()> {
    let dir = crate::config::paths::logs_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, "greeter.log");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))
}
