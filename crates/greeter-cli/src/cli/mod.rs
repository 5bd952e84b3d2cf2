//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use greeter_core::config;

mod commands;

#[derive(Parser)]
#[command(name = "greeter")]
#[command(version = "0.1")]
#[command(about = "Terminal login/logout greeter")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // default to the interactive session
    let Some(command) = cli.command else {
        let config = config::Config::load().context("load config")?;
        return commands::session::run(&config);
    };

    match command {
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
