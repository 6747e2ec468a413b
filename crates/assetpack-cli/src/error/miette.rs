//! Miette diagnostic conversion for CLI errors.

use ::miette::Report;

use super::{CliError, ConfigError};

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::ProjectNotFound(path) => ::miette::miette!(
            help = "Pass an existing directory to --cwd",
            "Project directory not found: {}",
            path.display()
        ),
        _ => ::miette::miette!("{}", err),
    }
}

/// Convert a library ConfigError to miette Report
pub fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::CopySourceNotFound { path } => ::miette::miette!(
            help = "Create it under the project's src directory or run from the project root",
            "Copy source not found: {}",
            path.display()
        ),
        ConfigError::InvalidValue {
            field,
            hint: Some(hint),
        } => ::miette::miette!(
            help = "Check assetpack.toml and ASSETPACK_* environment variables",
            "Invalid setting '{}': {}",
            field,
            hint
        ),
        ConfigError::Structure {
            message,
            hint: Some(hint),
        } => ::miette::miette!(help = hint, "Invalid configuration: {}", message),
        other => ::miette::miette!("{}", other),
    }
}
