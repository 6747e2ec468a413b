//! Error handling for the assetpack CLI.
//!
//! `CliError` wraps the library's `ConfigError` plus the I/O and JSON
//! failures that only happen at the command boundary. `main` converts it into
//! a miette report (see [`miette`](self::miette)).

pub mod miette;

use std::path::PathBuf;
use thiserror::Error;

pub use assetpack_config::ConfigError;

pub use self::miette::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Settings, routing or validation errors from the library
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Project directory given with --cwd does not exist
    #[error("Project directory not found: {}", .0.display())]
    ProjectNotFound(PathBuf),

    /// I/O errors while writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;
