use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{ExtractStylesOptions, TransformChain, TransformStage};
use crate::mode::ModeContext;

/// Style dialect handled by a style chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum StyleDialect {
    #[default]
    Plain,
    Less,
    Sass,
}

impl StyleDialect {
    /// Map a dialect or extension name onto a dialect.
    ///
    /// Unrecognized names resolve to [`StyleDialect::Plain`] instead of
    /// failing, so the caller always gets the base chain.
    ///
    /// ```
    /// use assetpack_config::StyleDialect;
    ///
    /// assert_eq!(StyleDialect::from_name("scss"), StyleDialect::Sass);
    /// assert_eq!(StyleDialect::from_name("unknownext"), StyleDialect::Plain);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name {
            "plain" | "css" => StyleDialect::Plain,
            "less" => StyleDialect::Less,
            "sass" | "scss" => StyleDialect::Sass,
            other => {
                tracing::debug!(dialect = other, "unrecognized style dialect, using plain css");
                StyleDialect::Plain
            }
        }
    }

    fn preprocessor(self) -> Option<TransformStage> {
        match self {
            StyleDialect::Plain => None,
            StyleDialect::Less => Some(TransformStage::Less),
            StyleDialect::Sass => Some(TransformStage::Sass),
        }
    }
}

/// Builds the transform chain for style inputs.
#[derive(Debug, Clone, Copy)]
pub struct StyleChainBuilder {
    ctx: ModeContext,
}

impl StyleChainBuilder {
    pub fn new(ctx: ModeContext) -> Self {
        Self { ctx }
    }

    /// `[extract, css]` followed by the dialect's preprocessor, if any.
    pub fn build(&self, dialect: StyleDialect) -> TransformChain {
        let mut chain = TransformChain::new(vec![
            TransformStage::ExtractStyles(ExtractStylesOptions {
                hmr: self.ctx.is_development(),
                reload_all: true,
            }),
            TransformStage::ParseCss,
        ]);

        if let Some(stage) = dialect.preprocessor() {
            chain.push(stage);
        }

        chain
    }
}
