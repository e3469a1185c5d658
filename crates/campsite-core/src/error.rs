//! Error types for campsite-info

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for campsite-info
#[derive(Debug, Error)]
pub enum CampsiteError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Campsite not found
    #[error("Campsite not found: {0}")]
    CampsiteNotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data file not found
    #[error("Data file not found: {0}")]
    DataFileNotFound(PathBuf),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<CampsiteError>,
    },
}

impl CampsiteError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        CampsiteError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

impl From<toml::de::Error> for CampsiteError {
    fn from(err: toml::de::Error) -> Self {
        CampsiteError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for CampsiteError {
    fn from(err: toml::ser::Error) -> Self {
        CampsiteError::Toml(err.to_string())
    }
}

/// Result type alias for campsite-info
pub type Result<T> = std::result::Result<T, CampsiteError>;
