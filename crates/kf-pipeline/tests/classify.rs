//! Tests for rule dispatch over the built-in and project rule sets.

use kf_config::{BuildConfig, Mode, ModeContext, PatternConfig, ProjectInfo, RuleConfig, TransformConfig};
use kf_pipeline::{Classification, Pattern, Rule, RuleRegistry, TransformSpec, build_registry};
use proptest::prelude::*;
use serde_json::json;

fn context(mode: Mode) -> ModeContext {
    ModeContext::with_year(mode, ProjectInfo::default(), 2025)
}

fn chain_names<'a>(registry: &'a RuleRegistry, path: &str) -> Vec<&'a str> {
    registry
        .classify(path)
        .chain()
        .unwrap_or_default()
        .iter()
        .map(|t| t.name.as_str())
        .collect()
}

#[test]
fn global_and_module_css_scenario() {
    let registry = RuleRegistry::builder()
        .rule(Rule::new("global", Pattern::suffix(".global.css")).then(TransformSpec::new("globalCss")))
        .rule(
            Rule::new("modules", Pattern::suffix(".css"))
                .exclude(Pattern::suffix(".global.css"))
                .then(TransformSpec::new("cssModules")),
        )
        .build()
        .expect("registry");

    assert_eq!(chain_names(&registry, "app.global.css"), ["globalCss"]);
    assert_eq!(chain_names(&registry, "button.css"), ["cssModules"]);
}

#[test]
fn default_rules_route_each_file_type() {
    let config = BuildConfig::default();
    let registry = build_registry(&context(Mode::Production), &config).expect("registry");

    assert_eq!(registry.classify("src/main.js").rule(), Some("script"));
    assert_eq!(registry.classify("src/App.jsx").rule(), Some("script"));
    assert_eq!(registry.classify("src/styles/global.css").rule(), Some("global-css"));
    assert_eq!(registry.classify("src/Button.css").rule(), Some("css-modules"));
    assert_eq!(registry.classify("fonts/Inter.woff2?v=3").rule(), Some("fonts"));
    assert_eq!(registry.classify("img/logo.svg").rule(), Some("svg"));
    assert_eq!(registry.classify("img/photo.JPG").rule(), Some("images"));
    assert_eq!(registry.classify("docs/help.md").rule(), Some("markdown"));
    assert_eq!(chain_names(&registry, "docs/help.md"), ["html", "markdown"]);
}

#[test]
fn dependencies_and_unknown_types_are_unmatched() {
    let registry =
        build_registry(&context(Mode::Production), &BuildConfig::default()).expect("registry");

    assert_eq!(
        registry.classify("node_modules/react/index.js"),
        Classification::NoMatch
    );
    assert_eq!(registry.classify("data/songs.json"), Classification::NoMatch);
}

#[test]
fn script_options_follow_mode() {
    let config = BuildConfig {
        root_dir: "/project".into(),
        ..Default::default()
    };

    let dev = build_registry(&context(Mode::Development), &config).expect("dev registry");
    let babel = &dev.classify("a.js").chain().unwrap()[0];
    assert_eq!(babel.options["cacheDirectory"], json!(true));
    assert_eq!(babel.options["plugins"], json!(["react-refresh/babel"]));
    assert_eq!(
        babel.options["configFile"],
        json!("/project/config/babel.config.json")
    );

    let prod = build_registry(&context(Mode::Production), &config).expect("prod registry");
    let babel = &prod.classify("a.js").chain().unwrap()[0];
    assert_eq!(babel.options["cacheDirectory"], json!(false));
    assert_eq!(babel.options["plugins"], json!([]));
}

#[test]
fn css_module_names_follow_mode() {
    let config = BuildConfig::default();
    let ident = |mode| {
        let registry = build_registry(&context(mode), &config).expect("registry");
        registry.classify("a.css").chain().unwrap()[1].options["modules"]["localIdentName"].clone()
    };

    assert_eq!(ident(Mode::Development), json!("[path][name]__[local]__"));
    assert_eq!(ident(Mode::Test), json!("[hash:base64]"));
    assert_eq!(ident(Mode::Production), json!("[hash:base64]"));
}

#[test]
fn image_inline_limit_comes_from_config() {
    let mut config = BuildConfig::default();
    config.assets.inline_limit = 2048;
    let registry = build_registry(&context(Mode::Production), &config).expect("registry");

    let asset = &registry.classify("a.gif").chain().unwrap()[0];
    assert_eq!(asset.name, "asset");
    assert_eq!(asset.options["maxSize"], json!(2048));
}

#[test]
fn project_rules_take_precedence() {
    let config = BuildConfig {
        rules: vec![RuleConfig {
            id: "worker".to_string(),
            test: PatternConfig::Suffix(vec![".worker.js".to_string()]),
            exclude: None,
            ignore_case: false,
            transforms: vec![TransformConfig {
                name: "worker".to_string(),
                options: Default::default(),
            }],
        }],
        ..Default::default()
    };
    let registry = build_registry(&context(Mode::Production), &config).expect("registry");

    assert_eq!(registry.classify("src/audio.worker.js").rule(), Some("worker"));
    assert_eq!(registry.classify("src/audio.js").rule(), Some("script"));
    assert_eq!(registry.len(), 8);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Repeated classification of the same path gives the same answer,
    /// whether or not any rule applies.
    #[test]
    fn classify_is_deterministic(
        dir in "(node_modules/[a-z]{1,6}/|src/[a-z]{0,6}/?|[A-Za-z]{0,4})",
        stem in "[A-Za-z._-]{0,10}",
        ext in prop::sample::select(vec![
            ".js", ".jsx", ".css", ".global.css", ".md", ".png", ".JPG", ".svg",
            ".woff2?v=1", ".json", ".txt", "",
        ]),
        mode in prop::sample::select(Mode::ALL.to_vec()),
    ) {
        let registry = build_registry(&context(mode), &BuildConfig::default()).unwrap();
        let path = format!("{dir}{stem}{ext}");

        let rebuilt = build_registry(&context(mode), &BuildConfig::default()).unwrap();

        let first = registry.classify(&path);
        prop_assert_eq!(first, registry.classify(&path));
        prop_assert_eq!(first, rebuilt.classify(&path));
    }
}
