//! Front-end configuration loaded from TOML.

use crate::games::tictactoe::Player;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "noughts.toml";

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "NOUGHTS_CONFIG";

/// Configuration for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Symbol drawn for player X.
    #[serde(default = "default_x_mark")]
    x_mark: String,

    /// Symbol drawn for player O.
    #[serde(default = "default_o_mark")]
    o_mark: String,

    /// Ring the terminal bell on win, draw and reset cues.
    #[serde(default = "default_bell")]
    bell: bool,

    /// File receiving log output while the TUI owns the terminal.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_x_mark() -> String {
    "X".to_string()
}

fn default_o_mark() -> String {
    "O".to_string()
}

fn default_bell() -> bool {
    true
}

fn default_log_file() -> PathBuf {
    PathBuf::from("noughts.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            x_mark: default_x_mark(),
            o_mark: default_o_mark(),
            bell: default_bell(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(bell = config.bell, log_file = %config.log_file.display(), "Config loaded");
        Ok(config)
    }

    /// Resolves the config to use.
    ///
    /// An explicit path wins, then the `NOUGHTS_CONFIG` variable, then
    /// `noughts.toml` in the working directory. With none of them present
    /// the defaults apply. A named file that fails to load is an error.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            debug!(%path, "Using config from environment");
            return Self::from_file(path);
        }

        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return Self::from_file(local);
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Symbol drawn for the given player.
    pub fn mark(&self, player: Player) -> &str {
        match player {
            Player::X => &self.x_mark,
            Player::O => &self.o_mark,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, mark) in [("x_mark", &self.x_mark), ("o_mark", &self.o_mark)] {
            if mark.trim().is_empty() {
                return Err(ConfigError::new(format!("{} must not be empty", name)));
            }
        }
        if self.x_mark == self.o_mark {
            return Err(ConfigError::new(format!(
                "x_mark and o_mark must differ (both are {:?})",
                self.x_mark
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
