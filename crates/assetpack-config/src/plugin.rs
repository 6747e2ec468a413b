//! Build-wide plugins and the assembler that picks them for a mode.

use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::chain::STYLE_EXTRACTION_ID;
use crate::layout::ProjectLayout;
use crate::mode::ModeContext;
use crate::output::HashKind;

/// A build-time participant not tied to any single file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "plugin", content = "options")]
pub enum Plugin {
    #[serde(rename = "html-webpack-plugin")]
    HtmlTemplate(HtmlTemplateOptions),

    /// Empties the output directory before emitting
    #[serde(rename = "clean-webpack-plugin")]
    CleanOutput,

    #[serde(rename = "copy-webpack-plugin")]
    CopyAssets(CopyAssetsOptions),

    #[serde(rename = "mini-css-extract-plugin")]
    ExtractStyles(ExtractStylesPluginOptions),

    #[serde(rename = "optimize-css-assets-webpack-plugin")]
    MinifyStyles,

    #[serde(rename = "terser-webpack-plugin")]
    MinifyScripts,

    #[serde(rename = "webpack-bundle-analyzer")]
    BundleAnalyzer,
}

impl Plugin {
    pub fn identifier(&self) -> &'static str {
        match self {
            Plugin::HtmlTemplate(_) => "html-webpack-plugin",
            Plugin::CleanOutput => "clean-webpack-plugin",
            Plugin::CopyAssets(_) => "copy-webpack-plugin",
            Plugin::ExtractStyles(_) => STYLE_EXTRACTION_ID,
            Plugin::MinifyStyles => "optimize-css-assets-webpack-plugin",
            Plugin::MinifyScripts => "terser-webpack-plugin",
            Plugin::BundleAnalyzer => "webpack-bundle-analyzer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HtmlTemplateOptions {
    /// Template path, relative to the source root
    pub template: String,
    pub minify: HtmlMinifyOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HtmlMinifyOptions {
    pub collapse_whitespace: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CopyAssetsOptions {
    pub patterns: Vec<CopyPattern>,
}

/// Static copy rule; `to` is a directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CopyPattern {
    pub from: PathBuf,
    pub to: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExtractStylesPluginOptions {
    pub filename: String,
}

/// Assembles the plugin list for one build.
#[derive(Debug, Clone)]
pub struct PluginAssembler<'a> {
    ctx: ModeContext,
    layout: &'a ProjectLayout,
}

impl<'a> PluginAssembler<'a> {
    pub fn new(ctx: ModeContext, layout: &'a ProjectLayout) -> Self {
        Self { ctx, layout }
    }

    /// Template, cleanup, copy and extraction in that order; production
    /// appends the bundle analyzer.
    pub fn build(&self) -> Vec<Plugin> {
        let mut plugins = vec![
            Plugin::HtmlTemplate(HtmlTemplateOptions {
                template: ProjectLayout::TEMPLATE.to_string(),
                minify: HtmlMinifyOptions {
                    collapse_whitespace: self.ctx.is_production(),
                },
            }),
            // Cleanup runs before copy: copy targets the directory cleanup empties
            Plugin::CleanOutput,
            Plugin::CopyAssets(CopyAssetsOptions {
                patterns: vec![
                    CopyPattern {
                        from: self.layout.icon_file(),
                        to: self.layout.output_dir(),
                    },
                    CopyPattern {
                        from: self.layout.assets_dir(),
                        to: self.layout.output_assets_dir(),
                    },
                ],
            }),
            Plugin::ExtractStyles(ExtractStylesPluginOptions {
                filename: HashKind::Content.filename("css"),
            }),
        ];

        if self.ctx.is_production() {
            plugins.push(Plugin::BundleAnalyzer);
        }

        tracing::debug!(
            mode = %self.ctx.mode(),
            plugins = ?plugins.iter().map(Plugin::identifier).collect::<Vec<_>>(),
            "assembled plugins"
        );

        plugins
    }
}
