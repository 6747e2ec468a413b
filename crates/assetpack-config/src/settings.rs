//! Tool settings shared by every command.
//!
//! Sources, lowest priority first: built-in defaults, `assetpack.toml` in the project
//! directory, then `ASSETPACK_`-prefixed environment variables with
//! `__` separating nested keys (`ASSETPACK_DEV_SERVER__PORT=8080`).
//!
//! The build mode is not a setting; see [`crate::ModeContext`].

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format as _, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::layout::ProjectLayout;

pub const SETTINGS_FILE: &str = "assetpack.toml";
pub const ENV_PREFIX: &str = "ASSETPACK_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSettings {
    /// Project root; copy sources and output paths resolve against it
    #[serde(default = "default_root")]
    pub root: PathBuf,

    #[serde(default)]
    pub dev_server: DevServerSettings,

    #[serde(default)]
    pub log_level: Option<String>,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            root: default_root(),
            dev_server: DevServerSettings::default(),
            log_level: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServerSettings {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for DevServerSettings {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_port() -> u16 {
    5000
}

/// A relative `root` from the settings file or environment names a directory
/// under `dir`, not under the process working directory.
fn resolve_root(dir: &Path, root: PathBuf) -> PathBuf {
    if root.is_relative() && root != dir {
        dir.join(root)
    } else {
        root
    }
}

impl ToolSettings {
    /// Layered figment for `dir`, without extracting it.
    ///
    /// The default root is `dir` itself, so a settings file that omits
    /// `root` describes the directory it lives in.
    pub fn figment(dir: impl AsRef<Path>) -> Figment {
        let dir = dir.as_ref();
        let defaults = ToolSettings {
            root: dir.to_path_buf(),
            ..ToolSettings::default()
        };

        let mut figment = Figment::new().merge(Serialized::defaults(defaults));

        let file = dir.join(SETTINGS_FILE);
        if file.is_file() {
            tracing::debug!(path = %file.display(), "loading settings file");
            figment = figment.merge(Toml::file(file));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load settings for the project in `dir`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when a source holds a value of the
    /// wrong type, such as a non-numeric port.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut settings = Self::from_figment(Self::figment(dir))?;
        settings.root = resolve_root(dir, settings.root);
        Ok(settings)
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        Ok(figment.extract()?)
    }

    pub fn layout(&self) -> ProjectLayout {
        ProjectLayout::new(&self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = ToolSettings::default();
        assert_eq!(settings.root, PathBuf::from("."));
        assert_eq!(settings.dev_server.port, 5000);
        assert!(settings.log_level.is_none());
    }

    #[test]
    fn serialized_overrides_win() {
        let figment = ToolSettings::figment("/nonexistent-dir")
            .merge(Serialized::default("dev_server.port", 7000));
        let settings = ToolSettings::from_figment(figment).unwrap();
        assert_eq!(settings.dev_server.port, 7000);
        assert_eq!(settings.root, PathBuf::from("/nonexistent-dir"));
    }

    #[test]
    fn relative_root_resolves_under_dir() {
        assert_eq!(
            resolve_root(Path::new("/proj"), PathBuf::from("web")),
            PathBuf::from("/proj/web")
        );
        assert_eq!(
            resolve_root(Path::new("/proj"), PathBuf::from("/srv/app")),
            PathBuf::from("/srv/app")
        );
        assert_eq!(resolve_root(Path::new("."), PathBuf::from(".")), PathBuf::from("."));
    }

    #[test]
    fn wrong_type_names_the_field() {
        let figment = Figment::from(Serialized::defaults(ToolSettings::default()))
            .merge(Serialized::default("dev_server.port", "not-a-port"));
        let err = ToolSettings::from_figment(figment).unwrap_err();
        match err {
            crate::ConfigError::InvalidValue { field, hint } => {
                assert_eq!(field, "dev_server.port");
                assert!(hint.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
