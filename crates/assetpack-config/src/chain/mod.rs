//! Transform stages and the chain builders for each file-type class.
//!
//! A chain is declared in bundler order: the last stage is applied first, and
//! each earlier stage consumes the output of the one after it.

mod script;
mod style;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use script::{ScriptChainBuilder, TypedScriptChainBuilder};
pub use style::{StyleChainBuilder, StyleDialect};

/// Identifier shared by the style-extraction loader and its plugin.
pub const STYLE_EXTRACTION_ID: &str = "mini-css-extract-plugin";

/// One named transformation applied to a file's content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "loader", content = "options")]
pub enum TransformStage {
    /// Pulls compiled styles out of the script bundle
    #[serde(rename = "mini-css-extract-plugin")]
    ExtractStyles(ExtractStylesOptions),

    #[serde(rename = "css-loader")]
    ParseCss,

    #[serde(rename = "less-loader")]
    Less,

    #[serde(rename = "sass-loader")]
    Sass,

    #[serde(rename = "babel-loader")]
    Transpile(TranspileOptions),

    #[serde(rename = "eslint-loader")]
    Lint,

    /// Emits the file as-is and returns its public URL
    #[serde(rename = "file-loader")]
    File,

    #[serde(rename = "xml-loader")]
    Xml,

    #[serde(rename = "csv-loader")]
    Csv,
}

impl TransformStage {
    pub fn identifier(&self) -> &'static str {
        match self {
            TransformStage::ExtractStyles(_) => STYLE_EXTRACTION_ID,
            TransformStage::ParseCss => "css-loader",
            TransformStage::Less => "less-loader",
            TransformStage::Sass => "sass-loader",
            TransformStage::Transpile(_) => "babel-loader",
            TransformStage::Lint => "eslint-loader",
            TransformStage::File => "file-loader",
            TransformStage::Xml => "xml-loader",
            TransformStage::Csv => "csv-loader",
        }
    }

    /// Whether this stage is supplied by the host bundler and passes content
    /// through without transformation owned by this configuration.
    pub fn is_pass_through(&self) -> bool {
        matches!(
            self,
            TransformStage::File | TransformStage::Xml | TransformStage::Csv
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractStylesOptions {
    /// Hot module reload wiring; only active in development
    pub hmr: bool,

    /// Reload every stylesheet when any one of them changes
    pub reload_all: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TranspileOptions {
    pub presets: Vec<TranspilePreset>,
    pub plugins: Vec<TranspilePlugin>,
}

impl TranspileOptions {
    /// Baseline environment preset plus class-property support, followed by
    /// any extra presets.
    pub fn with_presets(extra: impl IntoIterator<Item = TranspilePreset>) -> Self {
        let mut presets = vec![TranspilePreset::Env];
        presets.extend(extra);
        Self {
            presets,
            plugins: vec![TranspilePlugin::ClassProperties],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum TranspilePreset {
    #[serde(rename = "@babel/preset-env")]
    Env,
    #[serde(rename = "@babel/preset-typescript")]
    TypeScript,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum TranspilePlugin {
    #[serde(rename = "@babel/plugin-proposal-class-properties")]
    ClassProperties,
}

/// Ordered sequence of transform stages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct TransformChain(Vec<TransformStage>);

impl TransformChain {
    pub fn new(stages: Vec<TransformStage>) -> Self {
        Self(stages)
    }

    /// Chain made of a single host-supplied loader.
    pub fn pass_through(stage: TransformStage) -> Self {
        debug_assert!(stage.is_pass_through());
        Self(vec![stage])
    }

    pub(crate) fn push(&mut self, stage: TransformStage) {
        self.0.push(stage);
    }

    pub fn stages(&self) -> &[TransformStage] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn identifiers(&self) -> Vec<&'static str> {
        self.0.iter().map(TransformStage::identifier).collect()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.0.iter().any(|stage| stage.identifier() == identifier)
    }

    /// Stages in the order they touch the file content (innermost first).
    pub fn application_order(&self) -> impl Iterator<Item = &TransformStage> {
        self.0.iter().rev()
    }
}

impl<'a> IntoIterator for &'a TransformChain {
    type Item = &'a TransformStage;
    type IntoIter = std::slice::Iter<'a, TransformStage>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
