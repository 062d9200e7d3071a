//! Core error types for taskgate-core.
//!
//! Load failures are fatal to an invocation; a deny decision is not an
//! error and never appears here.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for taskgate-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Rule document could not be loaded
    #[error("Rule load error: {0}")]
    Load(#[from] LoadError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure to obtain a usable rule document.
///
/// Any of these terminates the invocation with a non-zero exit status
/// before a decision is attempted.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The rule document does not exist at its configured location
    #[error("Rule document not found at {}", path.display())]
    MissingDocument { path: PathBuf },

    /// The rule document exists but could not be read
    #[error("Cannot read rule document at {}: {source}", path.display())]
    UnreadableDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes do not parse as a rule object with an `enabled` key
    #[error("Invalid rule document: {0}")]
    InvalidFormat(String),
}

/// Failure surfaced by the task body during a `Run` outcome.
///
/// Caught at the runner boundary, logged, and mapped to an exit status;
/// never propagated as a crash.
#[derive(Error, Debug)]
pub enum TaskError {
    /// Task process could not be spawned
    #[error("Failed to start task command '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Task process ran and reported failure
    #[error("Task command exited with status {status}")]
    ExitedNonZero { status: i32 },

    /// Anything else the deployer's task body reports
    #[error("{0}")]
    Failed(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {}: {message}", path.display())]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {}: {message}", path.display())]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}
