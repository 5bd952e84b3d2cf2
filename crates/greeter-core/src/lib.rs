//! Core library for greeter: session state machine, config, logging.

pub mod config;
pub mod logging;
pub mod session;
