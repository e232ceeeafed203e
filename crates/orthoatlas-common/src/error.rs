//! Error types shared across orthoatlas crates

use thiserror::Error;

/// Result type alias for shared operations
pub type Result<T> = std::result::Result<T, OrthoError>;

/// Main error type for shared orthoatlas functionality
#[derive(Error, Debug)]
pub enum OrthoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown assay type: {0}")]
    UnknownAssay(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl OrthoError {
    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
        }
    }
}
