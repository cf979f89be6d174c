//! Error types for the fallible edges of extraction.
//!
//! The line scan itself never fails; these cover configuration loading,
//! file I/O and (de)serialization around it.

use thiserror::Error;

/// Errors that can occur around an extraction run.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration values outside their accepted range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Convenience alias for results with [`ExtractError`].
pub type Result<T> = std::result::Result<T, ExtractError>;
