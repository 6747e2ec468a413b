//! Output naming policy.

use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layout::ProjectLayout;
use crate::mode::ModeContext;

/// Hash placeholder embedded in emitted filenames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashKind {
    /// Derived from file content; stable across builds of identical input
    Content,
    /// Shared by every file of one build session
    BuildSession,
}

impl HashKind {
    pub fn for_mode(ctx: ModeContext) -> Self {
        if ctx.is_production() {
            HashKind::Content
        } else {
            HashKind::BuildSession
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            HashKind::Content => "[contenthash]",
            HashKind::BuildSession => "[hash]",
        }
    }

    /// `[name].<placeholder>.<ext>`
    pub fn filename(self, extension: &str) -> String {
        format!("[name].{}.{extension}", self.placeholder())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OutputNaming {
    pub filename: String,
    pub path: PathBuf,
    pub public_path: String,
}

impl OutputNaming {
    pub fn build(ctx: ModeContext, layout: &ProjectLayout) -> Self {
        Self {
            filename: HashKind::for_mode(ctx).filename("js"),
            path: layout.output_dir(),
            public_path: "/".to_string(),
        }
    }
}
