//! Configuration management for signin.
//!
//! Loads configuration from ${SIGNIN_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub mod paths {
    //! Path resolution for signin configuration and log directories.
    //!
    //! SIGNIN_HOME resolution order:
    //! 1. SIGNIN_HOME environment variable (if set)
    //! 2. ~/.config/signin (default)
    //! 3. ./.signin when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the signin home directory.
    pub fn signin_home() -> PathBuf {
        if let Ok(home) = std::env::var("SIGNIN_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".signin"),
            |h| h.join(".config").join("signin"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        signin_home().join("config.toml")
    }

    /// Returns the directory interactive sessions write logs to.
    pub fn logs_dir() -> PathBuf {
        signin_home().join("logs")
    }
}

fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Heading shown above the form
    pub title: String,

    /// Line shown under the heading
    pub subtitle: String,

    /// Glyph drawn per character of the secret field
    pub mask_char: char,

    /// Fallback log filter when RUST_LOG is unset
    pub log_level: String,

    /// Whether to draw the key hint line
    pub show_key_hints: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: Self::DEFAULT_TITLE.to_string(),
            subtitle: Self::DEFAULT_SUBTITLE.to_string(),
            mask_char: Self::DEFAULT_MASK_CHAR,
            log_level: Self::DEFAULT_LOG_LEVEL.to_string(),
            show_key_hints: true,
        }
    }
}

impl Config {
    const DEFAULT_TITLE: &str = "Simple Login";
    const DEFAULT_SUBTITLE: &str = "Enter credentials to see the greeting message.";
    const DEFAULT_MASK_CHAR: char = '•';
    const DEFAULT_LOG_LEVEL: &str = "info";

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
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
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}
