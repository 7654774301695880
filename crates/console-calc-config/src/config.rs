//! Application configuration: load, save, and sanitize.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

/// File name of the config file placed next to the executable.
pub const CONFIG_FILE_NAME: &str = "console-calc.json";

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "CONSOLE_CALC_CONFIG";

pub const DEFAULT_PROMPT: &str = "> ";

/// Default strftime pattern for history timestamps (rendered in UTC).
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Text printed before each input line.
    pub prompt: String,
    /// Whether to print the greeting banner on startup.
    pub show_banner: bool,
    /// Whether `hist` shows when each operation was created.
    pub show_timestamps: bool,
    pub timestamp_format: String,
    /// Max lines `hist` prints. 0 = unlimited.
    pub max_history_display: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            show_banner: true,
            show_timestamps: true,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            max_history_display: 0,
        }
    }
}

impl AppConfig {
    /// Resolves the config file path.
    ///
    /// Resolution order:
    /// 1. `CONSOLE_CALC_CONFIG` environment variable
    /// 2. `console-calc.json` next to the executable
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return PathBuf::from(path);
        }
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|d| d.join(CONFIG_FILE_NAME)))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads config from `path`, creating a default file if it doesn't exist.
    /// Returns defaults on any error (unreadable file, parse error, etc.).
    pub fn load_or_create(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(contents) => match serde_json::from_str::<AppConfig>(&contents) {
                    Ok(mut config) => {
                        config.sanitize();
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {}: {e}", path.display());
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {}: {e}", path.display());
                }
            }
            // Don't overwrite a broken file
            Self::default()
        } else {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                tracing::warn!("Failed to create default config at {}: {e:#}", path.display());
            }
            config
        }
    }

    /// Saves config to `path` as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// Resets invalid fields to their defaults.
    pub fn sanitize(&mut self) {
        if self.prompt.is_empty() {
            self.prompt = DEFAULT_PROMPT.to_string();
        }
        if !is_valid_timestamp_format(&self.timestamp_format) {
            tracing::warn!(
                "Invalid timestamp format {:?}, using default",
                self.timestamp_format
            );
            self.timestamp_format = DEFAULT_TIMESTAMP_FORMAT.to_string();
        }
    }
}

/// Whether `pattern` is a non-empty strftime pattern chrono can render.
pub fn is_valid_timestamp_format(pattern: &str) -> bool {
    !pattern.is_empty() && !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}
