//! Pluggable validation of a composed configuration
//!
//! Separates structural validation (pure, no I/O) from filesystem validation
//! of the copy sources (for CLI use).

use std::path::Path;

use crate::chain::STYLE_EXTRACTION_ID;
use crate::compose::BuildConfig;
use crate::error::{ConfigError, Result};
use crate::layout::ProjectLayout;
use crate::mode::Mode;
use crate::plugin::Plugin;

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()>;
}

/// Structural validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use assetpack_config::{ConfigComposer, ConfigValidator, Mode, ModeContext, ProjectLayout, SchemaValidator};
///
/// let layout = ProjectLayout::new("/app");
/// let config = ConfigComposer::new(ModeContext::new(Mode::Development), &layout).compose();
///
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        let plugins = &config.plugins;

        // Cleanup must run before copy
        if let (Some(clean), Some(copy)) = (
            plugins.iter().position(|p| matches!(p, Plugin::CleanOutput)),
            plugins.iter().position(|p| matches!(p, Plugin::CopyAssets(_))),
        ) {
            if clean > copy {
                return Err(ConfigError::Structure {
                    message: "output cleanup is ordered after asset copy".to_string(),
                    hint: Some("Place the cleanup plugin before the copy plugin".to_string()),
                });
            }
        }

        // Extraction loader requires the extraction plugin
        let uses_extraction = config
            .rules
            .rules()
            .iter()
            .any(|rule| rule.chain.contains(STYLE_EXTRACTION_ID));
        if uses_extraction && !config.has_plugin(STYLE_EXTRACTION_ID) {
            return Err(ConfigError::Structure {
                message: "style rules extract styles but no extraction plugin is configured"
                    .to_string(),
                hint: Some(format!("Add the '{STYLE_EXTRACTION_ID}' plugin")),
            });
        }

        let expected_minimizers = match config.mode {
            Mode::Production => vec![Plugin::MinifyStyles, Plugin::MinifyScripts],
            Mode::Development => Vec::new(),
        };
        if config.optimization.minimizer != expected_minimizers {
            return Err(ConfigError::Structure {
                message: format!("minimizers do not match {} mode", config.mode),
                hint: None,
            });
        }

        // Every pattern must compile
        config.rules.matcher()?;

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs [`SchemaValidator`] first, then checks that every copy source exists
/// with the right kind.
///
/// # Example
///
/// ```no_run
/// use assetpack_config::{ConfigComposer, ConfigValidator, FsValidator, ModeContext, ProjectLayout};
///
/// let layout = ProjectLayout::new(".");
/// let config = ConfigComposer::new(ModeContext::from_env(), &layout).compose();
///
/// FsValidator::new(&layout).validate(&config).unwrap();
/// ```
pub struct FsValidator {
    layout: ProjectLayout,
}

impl FsValidator {
    pub fn new(layout: &ProjectLayout) -> Self {
        Self {
            layout: layout.clone(),
        }
    }

    /// The icon must be a file and the assets source a directory; any other
    /// copy source only has to exist.
    fn copy_source_present(&self, from: &Path) -> bool {
        if from == self.layout.icon_file().as_path() {
            from.is_file()
        } else if from == self.layout.assets_dir().as_path() {
            from.is_dir()
        } else {
            from.exists()
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        let root = self.layout.root();
        if !root.is_dir() {
            return Err(ConfigError::RootNotFound {
                path: root.to_path_buf(),
            });
        }

        for plugin in &config.plugins {
            let Plugin::CopyAssets(options) = plugin else {
                continue;
            };
            for pattern in &options.patterns {
                if !self.copy_source_present(&pattern.from) {
                    return Err(ConfigError::CopySourceNotFound {
                        path: pattern.from.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Convenience function for structural validation
pub fn validate_schema(config: &BuildConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &BuildConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(&ProjectLayout::new(root.as_ref())).validate(config)
}
