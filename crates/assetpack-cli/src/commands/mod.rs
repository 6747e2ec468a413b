//! Command implementations for the assetpack CLI.
//!
//! - [`print`] - Emit the composed configuration
//! - [`check`] - Validate the configuration against the project directory
//! - [`route`] - Resolve files to routing rules
//! - [`schema`] - Emit the configuration's JSON schema
//!
//! Every command receives a [`Session`]: the mode, resolved exactly once,
//! plus the loaded tool settings.

pub mod check;
pub mod print;
pub mod route;
pub mod schema;

use std::path::{Path, PathBuf};

use assetpack_config::{BuildConfig, ConfigComposer, ModeContext, ProjectLayout, ToolSettings};

use crate::cli::ModeArg;
use crate::error::{CliError, Result};

pub use check::execute as check_execute;
pub use print::execute as print_execute;
pub use route::execute as route_execute;
pub use schema::execute as schema_execute;

/// Inputs shared by every command
#[derive(Debug, Clone)]
pub struct Session {
    pub ctx: ModeContext,
    pub settings: ToolSettings,
}

impl Session {
    pub fn new(ctx: ModeContext, settings: ToolSettings) -> Self {
        Self { ctx, settings }
    }

    /// Load settings for the project directory.
    ///
    /// # Errors
    ///
    /// Fails when `cwd` is given but is not a directory, or when a settings
    /// source holds an invalid value.
    pub fn load_settings(cwd: Option<&Path>) -> Result<ToolSettings> {
        let dir = match cwd {
            Some(dir) if !dir.is_dir() => {
                return Err(CliError::ProjectNotFound(dir.to_path_buf()));
            }
            Some(dir) => dir.to_path_buf(),
            None => PathBuf::from("."),
        };

        tracing::debug!(dir = %dir.display(), "loading settings");
        Ok(ToolSettings::load(dir)?)
    }

    /// Resolve the mode: the `--mode` flag when given, the environment signal
    /// otherwise. This is the only place the signal is read.
    pub fn resolve_mode(arg: Option<ModeArg>) -> ModeContext {
        match arg {
            Some(arg) => {
                let ctx = ModeContext::new(arg.into());
                tracing::debug!(mode = %ctx.mode(), "mode set by --mode");
                ctx
            }
            None => ModeContext::from_env(),
        }
    }

    pub fn layout(&self) -> ProjectLayout {
        self.settings.layout()
    }

    pub fn compose(&self) -> BuildConfig {
        let layout = self.layout();
        ConfigComposer::with_settings(self.ctx, &layout, &self.settings).compose()
    }
}
