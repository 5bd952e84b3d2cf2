//! Full-screen TUI implementation for greeter.

pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
pub use features::{login, welcome};
use greeter_core::config::Config;
pub use runtime::TuiRuntime;

/// Runs the interactive login/logout loop.
pub fn run_interactive(config: &Config) -> Result<()> {
    // The form needs a terminal to render
    if !stderr().is_terminal() {
        anyhow::bail!("greeter requires a terminal.");
    }

    let mut runtime = TuiRuntime::new(config.clone())?;
    runtime.run()
}
