//! Error types for configuration operations.

use std::path::PathBuf;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file at {path}: {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a JSON5 configuration file.
    #[error("failed to parse config: {0}")]
    ParseJson5(#[from] serde_json5::Error),

    /// No destination repository could be determined from any source.
    ///
    /// Raised after the explicit overrides, the Actions-provided variables,
    /// and the legacy config file have all been exhausted. Always fatal:
    /// publishing never proceeds against a partial target.
    #[error(
        "missing repository target: set {}/{} (or {} under GitHub Actions)",
        crate::env::ENV_OWNER,
        crate::env::ENV_REPO,
        crate::env::ENV_ACTIONS_REPOSITORY
    )]
    MissingTarget,

    /// A target was constructed from an empty owner or repository name.
    #[error("invalid repository target: {0}")]
    InvalidTarget(String),
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
