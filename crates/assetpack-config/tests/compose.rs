//! End-to-end composition behavior for both modes.

use assetpack_config::{
    BuildConfig, ConfigComposer, ExtractStylesOptions, ModeContext, Plugin, ProjectLayout,
    RuleClass, StyleChainBuilder, StyleDialect, TransformStage,
};

fn compose_for(signal: Option<&str>) -> BuildConfig {
    let layout = ProjectLayout::new("/project");
    ConfigComposer::new(ModeContext::from_signal(signal), &layout).compose()
}

fn chain_ids(config: &BuildConfig, class: RuleClass) -> Vec<&'static str> {
    config
        .rules
        .get(class)
        .expect("rule present")
        .chain
        .identifiers()
}

#[test]
fn development_signal() {
    let config = compose_for(Some("development"));

    assert!(!config.has_plugin("webpack-bundle-analyzer"));
    assert!(config.optimization.minimizer.is_empty());

    let sass = &config.rules.get(RuleClass::StyleSass).unwrap().chain;
    assert_eq!(
        sass.stages(),
        &[
            TransformStage::ExtractStyles(ExtractStylesOptions {
                hmr: true,
                reload_all: true,
            }),
            TransformStage::ParseCss,
            TransformStage::Sass,
        ]
    );

    assert_eq!(
        chain_ids(&config, RuleClass::Script),
        vec!["babel-loader", "eslint-loader"]
    );
    assert_eq!(config.output.filename, "[name].[hash].js");
}

#[test]
fn unset_signal_is_production() {
    let config = compose_for(None);

    assert_eq!(
        config.optimization.minimizer,
        vec![Plugin::MinifyStyles, Plugin::MinifyScripts]
    );
    assert_eq!(
        config.plugins.last().map(Plugin::identifier),
        Some("webpack-bundle-analyzer")
    );
    assert_eq!(config.output.filename, "[name].[contenthash].js");
    assert_eq!(chain_ids(&config, RuleClass::Script), vec!["babel-loader"]);
}

#[test]
fn unknown_dialect_yields_base_chain() {
    let ctx = ModeContext::from_signal(Some("development"));
    let chain = StyleChainBuilder::new(ctx).build(StyleDialect::from_name("unknownext"));
    assert_eq!(
        chain.identifiers(),
        vec!["mini-css-extract-plugin", "css-loader"]
    );
}

#[test]
fn style_rules_per_dialect() {
    let config = compose_for(None);
    assert_eq!(
        chain_ids(&config, RuleClass::StylePlain),
        vec!["mini-css-extract-plugin", "css-loader"]
    );
    assert_eq!(
        chain_ids(&config, RuleClass::StyleLess),
        vec!["mini-css-extract-plugin", "css-loader", "less-loader"]
    );
    assert_eq!(
        chain_ids(&config, RuleClass::StyleSass),
        vec!["mini-css-extract-plugin", "css-loader", "sass-loader"]
    );
}

#[test]
fn typed_scripts_never_lint() {
    for signal in [Some("development"), None] {
        let config = compose_for(signal);
        assert_eq!(chain_ids(&config, RuleClass::TypedScript), vec!["babel-loader"]);
    }
}

#[test]
fn whitespace_collapse_tracks_production() {
    for (signal, expected) in [(Some("development"), false), (Some("production"), true)] {
        let config = compose_for(signal);
        let Some(Plugin::HtmlTemplate(options)) = config.plugins.first() else {
            panic!("template plugin should be first");
        };
        assert_eq!(options.minify.collapse_whitespace, expected);
    }
}

#[test]
fn composition_is_idempotent() {
    for signal in [Some("development"), None] {
        let first = compose_for(signal);
        let second = compose_for(signal);
        assert_eq!(first, second);
        assert_eq!(first.to_json(false).unwrap(), second.to_json(false).unwrap());
    }
}

#[test]
fn extraction_stage_and_plugin_share_identifier() {
    let config = compose_for(Some("development"));
    let stage_id = config.rules.get(RuleClass::StylePlain).unwrap().chain.stages()[0].identifier();
    assert!(config.has_plugin(stage_id));
}
