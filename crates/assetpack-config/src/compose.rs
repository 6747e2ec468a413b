//! Aggregate build configuration and its composer.

use std::collections::BTreeMap;
use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::layout::ProjectLayout;
use crate::mode::{Mode, ModeContext};
use crate::optimization::{OptimizationPolicy, OptimizationPolicyBuilder};
use crate::output::OutputNaming;
use crate::plugin::{Plugin, PluginAssembler};
use crate::routing::RoutingTable;
use crate::settings::ToolSettings;

/// Configuration handed to the bundler host.
///
/// Field names are part of the output contract and serialize in camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    pub mode: Mode,

    /// Base directory for entry points and loaders
    pub context: PathBuf,

    pub entry: BTreeMap<String, Vec<String>>,

    pub output: OutputNaming,

    pub resolve: ResolveOptions,

    pub optimization: OptimizationPolicy,

    pub dev_server: DevServerOptions,

    pub devtool: Option<Devtool>,

    pub plugins: Vec<Plugin>,

    pub rules: RoutingTable,
}

impl BuildConfig {
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// JSON schema describing the serialized shape of a build configuration.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(BuildConfig)
    }

    pub fn has_plugin(&self, identifier: &str) -> bool {
        self.plugins
            .iter()
            .any(|plugin| plugin.identifier() == identifier)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResolveOptions {
    pub extensions: Vec<String>,
    pub alias: BTreeMap<String, PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DevServerOptions {
    pub port: u16,
    pub hot: bool,
    pub history_api_fallback: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Devtool {
    #[serde(rename = "source-map")]
    SourceMap,
}

/// Binds the resolved mode, every builder and the routing table into one
/// [`BuildConfig`].
///
/// # Example
///
/// ```
/// use assetpack_config::{ConfigComposer, Mode, ModeContext, ProjectLayout};
///
/// let layout = ProjectLayout::new("/srv/app");
/// let config = ConfigComposer::new(ModeContext::new(Mode::Production), &layout).compose();
///
/// assert_eq!(config.optimization.minimizer.len(), 2);
/// assert!(config.has_plugin("webpack-bundle-analyzer"));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigComposer<'a> {
    ctx: ModeContext,
    layout: &'a ProjectLayout,
    dev_port: u16,
}

impl<'a> ConfigComposer<'a> {
    pub const DEFAULT_DEV_PORT: u16 = 5000;

    pub fn new(ctx: ModeContext, layout: &'a ProjectLayout) -> Self {
        Self {
            ctx,
            layout,
            dev_port: Self::DEFAULT_DEV_PORT,
        }
    }

    /// Composer for a mode plus loaded tool settings.
    pub fn with_settings(
        ctx: ModeContext,
        layout: &'a ProjectLayout,
        settings: &ToolSettings,
    ) -> Self {
        Self::new(ctx, layout).dev_port(settings.dev_server.port)
    }

    pub fn dev_port(mut self, port: u16) -> Self {
        self.dev_port = port;
        self
    }

    pub fn compose(&self) -> BuildConfig {
        let ctx = self.ctx;
        let source_dir = self.layout.source_dir();

        let config = BuildConfig {
            mode: ctx.mode(),
            context: source_dir.clone(),
            entry: BTreeMap::from([(
                "main".to_string(),
                vec!["@babel/polyfill".to_string(), "./index.ts".to_string()],
            )]),
            output: OutputNaming::build(ctx, self.layout),
            resolve: ResolveOptions {
                extensions: vec![".js".to_string(), ".json".to_string()],
                alias: BTreeMap::from([("@".to_string(), source_dir)]),
            },
            optimization: OptimizationPolicyBuilder::new(ctx).build(),
            dev_server: DevServerOptions {
                port: self.dev_port,
                hot: ctx.is_development(),
                history_api_fallback: true,
            },
            devtool: ctx.is_development().then_some(Devtool::SourceMap),
            plugins: PluginAssembler::new(ctx, self.layout).build(),
            rules: RoutingTable::build(ctx),
        };

        tracing::info!(
            mode = %config.mode,
            rules = config.rules.rules().len(),
            plugins = config.plugins.len(),
            "composed build configuration"
        );

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn compose(mode: Mode) -> BuildConfig {
        let layout = ProjectLayout::new("/app");
        ConfigComposer::new(ModeContext::new(mode), &layout).compose()
    }

    #[test]
    fn supplementary_fields() {
        let config = compose(Mode::Development);
        assert_eq!(config.context, PathBuf::from("/app/src"));
        assert_eq!(
            config.entry["main"],
            vec!["@babel/polyfill".to_string(), "./index.ts".to_string()]
        );
        assert_eq!(config.resolve.extensions, vec![".js", ".json"]);
        assert_eq!(config.resolve.alias["@"], PathBuf::from("/app/src"));
        assert_eq!(config.devtool, Some(Devtool::SourceMap));
        assert!(config.dev_server.hot);
        assert!(config.dev_server.history_api_fallback);
        assert_eq!(config.dev_server.port, 5000);
    }

    #[test]
    fn production_disables_devtool_and_hot_reload() {
        let config = compose(Mode::Production);
        assert_eq!(config.devtool, None);
        assert!(!config.dev_server.hot);
    }

    #[test]
    fn dev_port_comes_from_settings() {
        let layout = ProjectLayout::new("/app");
        let mut settings = ToolSettings::default();
        settings.dev_server.port = 8080;
        let config =
            ConfigComposer::with_settings(ModeContext::new(Mode::Development), &layout, &settings)
                .compose();
        assert_eq!(config.dev_server.port, 8080);
    }

    #[test]
    fn top_level_field_names_are_stable() {
        let value = serde_json::to_value(compose(Mode::Production)).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "context",
                "devServer",
                "devtool",
                "entry",
                "mode",
                "optimization",
                "output",
                "plugins",
                "resolve",
                "rules",
            ]
        );
        assert_eq!(value["devtool"], json!(null));
        assert_eq!(value["mode"], json!("production"));
    }

    #[test]
    fn schema_lists_every_field() {
        let schema = serde_json::to_value(BuildConfig::json_schema()).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        for field in ["mode", "optimization", "rules", "plugins", "output", "devServer"] {
            assert!(properties.contains_key(field), "missing {field}");
        }
    }

    #[test]
    fn json_round_trips() {
        let config = compose(Mode::Development);
        let json = config.to_json(false).unwrap();
        let parsed: BuildConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
