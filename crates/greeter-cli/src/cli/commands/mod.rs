//! Command handlers for the CLI.

pub mod config;
pub mod session;
