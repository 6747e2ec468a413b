//! Fixed project layout resolved against a project root.

use std::path::{Path, PathBuf};

const SOURCE_DIR: &str = "src";
const OUTPUT_DIR: &str = "dist";
const ICON_FILE: &str = "favicon.ico";
const ASSETS_DIR: &str = "assets";

/// Where sources are read from and output is written to.
///
/// Directory names are fixed; only the root varies between projects.
///
/// ```
/// use assetpack_config::ProjectLayout;
/// use std::path::PathBuf;
///
/// let layout = ProjectLayout::new("/srv/app");
/// assert_eq!(layout.icon_file(), PathBuf::from("/srv/app/src/favicon.ico"));
/// assert_eq!(layout.output_dir(), PathBuf::from("/srv/app/dist"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    /// HTML template, relative to the source root
    pub const TEMPLATE: &'static str = "./index.html";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Source root; also the bundler's resolution context
    pub fn source_dir(&self) -> PathBuf {
        self.root.join(SOURCE_DIR)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join(OUTPUT_DIR)
    }

    pub fn icon_file(&self) -> PathBuf {
        self.source_dir().join(ICON_FILE)
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.source_dir().join(ASSETS_DIR)
    }

    pub fn output_assets_dir(&self) -> PathBuf {
        self.output_dir().join(ASSETS_DIR)
    }
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self::new(".")
    }
}
