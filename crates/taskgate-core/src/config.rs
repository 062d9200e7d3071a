//! TOML-based application configuration.
//!
//! Stores the locations of the rule document and the run log, plus the
//! command the gate executes when a run is permitted.
//!
//! Configuration is stored at `~/.config/taskgate/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/taskgate[-dev]/` based on TASKGATE_ENV.
///
/// Set TASKGATE_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TASKGATE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("taskgate-dev")
    } else {
        base_dir.join("taskgate")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// File locations the gate reads and writes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Rule document location. Defaults to `<data_dir>/rules.json`.
    #[serde(default)]
    pub rules: Option<PathBuf>,
    /// Run log location. Defaults to `<data_dir>/taskgate.log`.
    #[serde(default)]
    pub log: Option<PathBuf>,
}

/// The command executed when the gate permits a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskConfig {
    /// Program to spawn. Empty means no-op: the gate only logs.
    #[serde(default)]
    pub command: String,
    /// Arguments passed to the program.
    #[serde(default)]
    pub args: Vec<String>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/taskgate/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub task: TaskConfig,
}

impl Config {
    fn path() -> Result<PathBuf, std::io::Error> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk; a missing or unreadable file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/taskgate"),
            message: e.to_string(),
        })?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Write to disk as pretty TOML.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path().map_err(|e| ConfigError::SaveFailed {
            path: PathBuf::from("~/.config/taskgate"),
            message: e.to_string(),
        })?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Effective rule document path, configured or default.
    pub fn rules_path(&self) -> Result<PathBuf, std::io::Error> {
        match &self.paths.rules {
            Some(path) => Ok(path.clone()),
            None => Ok(data_dir()?.join("rules.json")),
        }
    }

    /// Effective run log path, configured or default.
    pub fn log_path(&self) -> Result<PathBuf, std::io::Error> {
        match &self.paths.log {
            Some(path) => Ok(path.clone()),
            None => Ok(data_dir()?.join("taskgate.log")),
        }
    }

    /// Get a config value by dotted key, e.g. "paths.rules" or
    /// "task.command".
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let mut node = &json;
        for part in key.split('.') {
            node = node.get(part)?;
        }
        match node {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dotted key and persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown, the value does not fit the
    /// field, or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;

        let mut node = &mut json;
        for part in key.split('.') {
            node = node
                .get_mut(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        }
        *node = parse_value(value);

        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.save()
    }
}

/// Interpret a CLI-provided value: JSON if it parses (arrays, numbers,
/// booleans), plain string otherwise.
fn parse_value(value: &str) -> serde_json::Value {
    serde_json::from_str(value).unwrap_or_else(|_| serde_json::Value::String(value.to_string()))
}
