//! Interactive session command (the default when no subcommand is given).

use anyhow::{Context, Result};
use greeter_core::config::Config;
use greeter_core::logging;

pub fn run(config: &Config) -> Result<()> {
    // The TUI owns the terminal, so diagnostics go to the log file.
    logging::init_file_logging().context("init logging")?;

    greeter_tui::run_interactive(config)
}
