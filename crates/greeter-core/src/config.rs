//! Configuration management for greeter.
//!
//! Loads configuration from ${GREETER_HOME}/config.toml with sensible
//! defaults. Everything here is presentation-only: nothing in the
//! config affects the session state machine.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix for the welcome line shown while logged in.
    pub greeting: String,

    /// Whether to render keybinding hint lines.
    pub show_hints: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            greeting: Self::DEFAULT_GREETING.to_string(),
            show_hints: true,
        }
    }
}

impl Config {
    const DEFAULT_GREETING: &str = "Welcome";

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}

pub mod paths {
    //! Path resolution for greeter configuration and data directories.
    //!
    //! GREETER_HOME resolution order:
    //! 1. GREETER_HOME environment variable (if set)
    //! 2. ~/.config/greeter (default)

    use std::path::PathBuf;

    /// Returns the greeter home directory.
    ///
    /// Checks GREETER_HOME env var first, falls back to ~/.config/greeter
    pub fn greeter_home() -> PathBuf {
        if let Ok(home) = std::env::var("GREETER_HOME") {
            return PathBuf::from(home);
        }

        home_dir()
            .map(|h| h.join(".config").join("greeter"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        greeter_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        greeter_home().join("logs")
    }

    /// Returns the user's home directory, if it can be determined.
    pub fn home_dir() -> Option<PathBuf> {
        #[cfg(windows)]
        let var = "USERPROFILE";
        #[cfg(not(windows))]
        let var = "HOME";
        std::env::var_os(var).map(PathBuf::from)
    }
}
