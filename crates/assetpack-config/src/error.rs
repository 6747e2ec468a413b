//! Error types for settings loading and configuration validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Filesystem validation errors (for CLI use)
    #[error("copy source not found: {}", .path.display())]
    CopySourceNotFound { path: PathBuf },

    #[error("project root not found: {}", .path.display())]
    RootNotFound { path: PathBuf },

    // Settings loading errors
    #[error("invalid setting '{field}'{}", .hint.as_deref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue {
        field: String,
        hint: Option<String>,
    },

    // Routing errors
    #[error("invalid routing pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    // Structural validation errors (no filesystem checks)
    #[error("structural validation failed: {message}")]
    Structure {
        message: String,
        hint: Option<String>,
    },

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        let field = if err.path.is_empty() {
            "settings".to_string()
        } else {
            err.path.join(".")
        };
        ConfigError::InvalidValue {
            field,
            hint: Some(err.to_string()),
        }
    }
}
