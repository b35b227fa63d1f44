//! Error types for configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading an [`EditorConfig`](super::EditorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Error reading a configuration file.
    #[error("I/O error reading {path}: {source}")]
    Io {
        /// Path to the file that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON or does not match the config schema.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value parsed but is out of range.
    #[error("invalid config value: {0}")]
    Invalid(String),
}
