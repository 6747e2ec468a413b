use super::{TransformChain, TransformStage, TranspileOptions, TranspilePreset};
use crate::mode::ModeContext;

/// Builds the transform chain for plain script inputs.
///
/// Development builds lint after transpiling; production builds drop the
/// lint stage entirely.
#[derive(Debug, Clone, Copy)]
pub struct ScriptChainBuilder {
    ctx: ModeContext,
}

impl ScriptChainBuilder {
    pub fn new(ctx: ModeContext) -> Self {
        Self { ctx }
    }

    pub fn build(&self) -> TransformChain {
        let mut chain = TransformChain::new(vec![TransformStage::Transpile(
            TranspileOptions::with_presets([]),
        )]);

        if self.ctx.is_development() {
            chain.push(TransformStage::Lint);
        }

        chain
    }
}

/// Builds the fixed transform chain for statically-typed script inputs.
///
/// Type checking happens outside the bundle pipeline, so there is no lint
/// stage and no dependency on mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypedScriptChainBuilder;

impl TypedScriptChainBuilder {
    pub fn build(&self) -> TransformChain {
        TransformChain::new(vec![TransformStage::Transpile(
            TranspileOptions::with_presets([TranspilePreset::TypeScript]),
        )])
    }
}
