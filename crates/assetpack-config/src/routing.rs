//! Static routing table from file-extension classes to transform chains.

use std::path::Path;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::chain::{
    ScriptChainBuilder, StyleChainBuilder, StyleDialect, TransformChain, TransformStage,
    TypedScriptChainBuilder,
};
use crate::error::{ConfigError, Result};
use crate::mode::ModeContext;

/// Dependencies are shipped pre-built and never transpiled
pub const VENDOR_EXCLUDE: &str = "node_modules";

/// File-type class served by one routing rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum RuleClass {
    StylePlain,
    StyleLess,
    StyleSass,
    Images,
    Fonts,
    Xml,
    Csv,
    Script,
    TypedScript,
}

impl RuleClass {
    /// Every class, in routing order.
    pub const ALL: [RuleClass; 9] = [
        RuleClass::StylePlain,
        RuleClass::StyleLess,
        RuleClass::StyleSass,
        RuleClass::Images,
        RuleClass::Fonts,
        RuleClass::Xml,
        RuleClass::Csv,
        RuleClass::Script,
        RuleClass::TypedScript,
    ];

    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            RuleClass::StylePlain => &["css"],
            RuleClass::StyleLess => &["less"],
            RuleClass::StyleSass => &["scss", "sass"],
            RuleClass::Images => &["png", "jpg", "svg", "gif"],
            RuleClass::Fonts => &["ttf", "woff", "woff2", "eot"],
            RuleClass::Xml => &["xml"],
            RuleClass::Csv => &["csv"],
            RuleClass::Script => &["js"],
            RuleClass::TypedScript => &["ts"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RuleClass::StylePlain => "style-plain",
            RuleClass::StyleLess => "style-less",
            RuleClass::StyleSass => "style-sass",
            RuleClass::Images => "images",
            RuleClass::Fonts => "fonts",
            RuleClass::Xml => "xml",
            RuleClass::Csv => "csv",
            RuleClass::Script => "script",
            RuleClass::TypedScript => "typed-script",
        }
    }

    /// Regular expression matching a resource path ending in one of the
    /// class's extensions, e.g. `\.(scss|sass)$`.
    pub fn test_pattern(self) -> String {
        match self.extensions() {
            [single] => format!(r"\.{single}$"),
            many => format!(r"\.({})$", many.join("|")),
        }
    }

    fn exclude_pattern(self) -> Option<String> {
        matches!(self, RuleClass::Script | RuleClass::TypedScript)
            .then(|| VENDOR_EXCLUDE.to_string())
    }
}

impl std::fmt::Display for RuleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RoutingRule {
    pub class: RuleClass,

    /// Regular expression source tested against the resource path
    pub test: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    #[serde(rename = "use")]
    pub chain: TransformChain,
}

impl RoutingRule {
    fn new(class: RuleClass, chain: TransformChain) -> Self {
        Self {
            class,
            test: class.test_pattern(),
            exclude: class.exclude_pattern(),
            chain,
        }
    }
}

/// Ordered routing rules; the first match wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct RoutingTable(Vec<RoutingRule>);

impl RoutingTable {
    pub fn build(ctx: ModeContext) -> Self {
        let style = StyleChainBuilder::new(ctx);
        let script = ScriptChainBuilder::new(ctx);

        let rules = RuleClass::ALL
            .into_iter()
            .map(|class| {
                let chain = match class {
                    RuleClass::StylePlain => style.build(StyleDialect::Plain),
                    RuleClass::StyleLess => style.build(StyleDialect::Less),
                    RuleClass::StyleSass => style.build(StyleDialect::Sass),
                    RuleClass::Images | RuleClass::Fonts => {
                        TransformChain::pass_through(TransformStage::File)
                    }
                    RuleClass::Xml => TransformChain::pass_through(TransformStage::Xml),
                    RuleClass::Csv => TransformChain::pass_through(TransformStage::Csv),
                    RuleClass::Script => script.build(),
                    RuleClass::TypedScript => TypedScriptChainBuilder.build(),
                };
                RoutingRule::new(class, chain)
            })
            .collect();

        Self(rules)
    }

    pub fn rules(&self) -> &[RoutingRule] {
        &self.0
    }

    pub fn get(&self, class: RuleClass) -> Option<&RoutingRule> {
        self.0.iter().find(|rule| rule.class == class)
    }

    /// Compile every pattern once for repeated lookups.
    pub fn matcher(&self) -> Result<RouteMatcher<'_>> {
        let compiled = self
            .0
            .iter()
            .map(|rule| {
                let test = compile(&rule.test)?;
                let exclude = rule.exclude.as_deref().map(compile).transpose()?;
                Ok((rule, test, exclude))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(RouteMatcher { compiled })
    }

    /// Find the rule that applies to `path`.
    ///
    /// ```
    /// use assetpack_config::{Mode, ModeContext, RoutingTable, RuleClass};
    ///
    /// let table = RoutingTable::build(ModeContext::new(Mode::Production));
    /// let rule = table.route("src/styles/main.scss").unwrap().unwrap();
    /// assert_eq!(rule.class, RuleClass::StyleSass);
    /// ```
    pub fn route(&self, path: impl AsRef<Path>) -> Result<Option<&RoutingRule>> {
        Ok(self.matcher()?.route(path))
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|err| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        message: err.to_string(),
    })
}

/// Routing table with compiled patterns
#[derive(Debug)]
pub struct RouteMatcher<'a> {
    compiled: Vec<(&'a RoutingRule, Regex, Option<Regex>)>,
}

impl<'a> RouteMatcher<'a> {
    pub fn route(&self, path: impl AsRef<Path>) -> Option<&'a RoutingRule> {
        let resource = path.as_ref().to_string_lossy();
        let found = self
            .compiled
            .iter()
            .find(|(_, test, exclude)| {
                test.is_match(&resource)
                    && !exclude.as_ref().is_some_and(|ex| ex.is_match(&resource))
            })
            .map(|(rule, _, _)| *rule);

        tracing::trace!(
            path = %resource,
            class = found.map(|rule| rule.class.as_str()),
            "routed resource"
        );
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::Mode;

    fn table(mode: Mode) -> RoutingTable {
        RoutingTable::build(ModeContext::new(mode))
    }

    fn class_of(table: &RoutingTable, path: &str) -> Option<RuleClass> {
        table.route(path).unwrap().map(|rule| rule.class)
    }

    #[test]
    fn patterns_match_webpack_style_sources() {
        assert_eq!(RuleClass::StylePlain.test_pattern(), r"\.css$");
        assert_eq!(RuleClass::StyleSass.test_pattern(), r"\.(scss|sass)$");
        assert_eq!(RuleClass::Fonts.test_pattern(), r"\.(ttf|woff|woff2|eot)$");
    }

    #[test]
    fn table_follows_class_order() {
        let table = table(Mode::Production);
        let classes: Vec<_> = table.rules().iter().map(|rule| rule.class).collect();
        assert_eq!(classes, RuleClass::ALL.to_vec());
    }

    #[test]
    fn routes_every_extension() {
        let table = table(Mode::Production);
        let cases = [
            ("a.css", RuleClass::StylePlain),
            ("a.less", RuleClass::StyleLess),
            ("a.scss", RuleClass::StyleSass),
            ("a.sass", RuleClass::StyleSass),
            ("a.png", RuleClass::Images),
            ("a.jpg", RuleClass::Images),
            ("a.svg", RuleClass::Images),
            ("a.gif", RuleClass::Images),
            ("a.ttf", RuleClass::Fonts),
            ("a.woff", RuleClass::Fonts),
            ("a.woff2", RuleClass::Fonts),
            ("a.eot", RuleClass::Fonts),
            ("a.xml", RuleClass::Xml),
            ("a.csv", RuleClass::Csv),
            ("a.js", RuleClass::Script),
            ("a.ts", RuleClass::TypedScript),
        ];
        for (path, expected) in cases {
            assert_eq!(class_of(&table, path), Some(expected), "{path}");
        }
    }

    #[test]
    fn unmatched_extensions_have_no_rule() {
        let table = table(Mode::Production);
        assert_eq!(class_of(&table, "a.json"), None);
        assert_eq!(class_of(&table, "a.tsx"), None);
        assert_eq!(class_of(&table, "a.css.map"), None);
    }

    #[test]
    fn scripts_under_node_modules_are_excluded() {
        let table = table(Mode::Development);
        assert_eq!(class_of(&table, "node_modules/lib/index.js"), None);
        assert_eq!(class_of(&table, "node_modules/lib/index.ts"), None);
        assert_eq!(
            class_of(&table, "node_modules/lib/style.css"),
            Some(RuleClass::StylePlain)
        );
    }

    #[test]
    fn pass_through_rules_use_external_loaders() {
        let table = table(Mode::Production);
        for (class, loader) in [
            (RuleClass::Images, "file-loader"),
            (RuleClass::Fonts, "file-loader"),
            (RuleClass::Xml, "xml-loader"),
            (RuleClass::Csv, "csv-loader"),
        ] {
            let rule = table.get(class).unwrap();
            assert_eq!(rule.chain.identifiers(), vec![loader]);
            assert!(rule.exclude.is_none());
        }
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let mut table = table(Mode::Production);
        table.0[0].test = "(".to_string();
        let err = table.route("a.css").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { .. }));
    }
}
