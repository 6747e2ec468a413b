//! Minification and chunk-splitting policy.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::mode::ModeContext;
use crate::plugin::Plugin;

/// Which chunk types are eligible for splitting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SplitChunks {
    #[default]
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct SplitChunksOptions {
    pub chunks: SplitChunks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationPolicy {
    pub split_chunks: SplitChunksOptions,

    /// Applied in order: styles first, then scripts
    pub minimizer: Vec<Plugin>,
}

#[derive(Debug, Clone, Copy)]
pub struct OptimizationPolicyBuilder {
    ctx: ModeContext,
}

impl OptimizationPolicyBuilder {
    pub fn new(ctx: ModeContext) -> Self {
        Self { ctx }
    }

    /// Splitting covers every chunk type in both modes; minimizers only run
    /// in production.
    pub fn build(&self) -> OptimizationPolicy {
        let minimizer = if self.ctx.is_production() {
            vec![Plugin::MinifyStyles, Plugin::MinifyScripts]
        } else {
            Vec::new()
        };

        OptimizationPolicy {
            split_chunks: SplitChunksOptions {
                chunks: SplitChunks::All,
            },
            minimizer,
        }
    }
}
