//! The built-in rule set for scripts, styles, assets and markdown.

use serde_json::json;

use kf_config::{BuildConfig, ModeContext};

use crate::error::{Error, Result};
use crate::registry::RuleRegistry;
use crate::rule::{Pattern, Rule, TransformSpec};

/// Built-in rules, most specific first.
pub fn default_rules(ctx: &ModeContext, config: &BuildConfig) -> Result<Vec<Rule>> {
    let dev = ctx.is_dev();
    let babel_config = config.resolve_path("config/babel.config.json".as_ref());
    let refresh_plugins: Vec<&str> = if dev {
        vec!["react-refresh/babel"]
    } else {
        Vec::new()
    };

    let local_ident_name = if dev {
        "[path][name]__[local]__"
    } else {
        "[hash:base64]"
    };

    let regex = |rule: &str, source: &str| {
        Pattern::regex(source).map_err(|source| Error::InvalidPattern {
            rule: rule.to_string(),
            source,
        })
    };

    let images = Pattern::suffixes([".png", ".jpg", ".jpeg", ".gif"])
        .ignore_case()
        .map_err(|source| Error::InvalidPattern {
            rule: "images".to_string(),
            source,
        })?;

    Ok(vec![
        Rule::new("script", Pattern::suffixes([".js", ".jsx"]))
            .exclude(Pattern::contains("node_modules"))
            .then(
                TransformSpec::new("babel")
                    .option("cacheDirectory", dev)
                    .option("configFile", babel_config.to_string_lossy().into_owned())
                    .option("plugins", json!(refresh_plugins)),
            ),
        Rule::new("global-css", Pattern::suffix("global.css"))
            .then(TransformSpec::new("extract-css"))
            .then(
                TransformSpec::new("css")
                    .option("modules", false)
                    .option("sourceMap", dev),
            ),
        Rule::new("css-modules", Pattern::suffix(".css"))
            .exclude(Pattern::suffix("global.css"))
            .then(TransformSpec::new("extract-css"))
            .then(TransformSpec::new("css").option(
                "modules",
                json!({
                    "mode": "local",
                    "localIdentName": local_ident_name,
                    "exportLocalsConvention": "camelCaseOnly",
                    "exportOnlyLocals": false,
                    "namedExport": false,
                }),
            )),
        Rule::new("fonts", regex("fonts", r"\.woff2(\?.*)?$")?)
            .then(TransformSpec::new("asset/resource").option("filename", "fonts/[name][ext]")),
        Rule::new("svg", regex("svg", r"\.svg(\?.*)?$")?)
            .then(TransformSpec::new("asset/resource").option("filename", "images/[name][ext]")),
        Rule::new("images", images).then(
            TransformSpec::new("asset")
                .option("maxSize", config.assets.inline_limit)
                .option("filename", "images/[name][ext]"),
        ),
        Rule::new("markdown", Pattern::suffix(".md"))
            .then(TransformSpec::new("html"))
            .then(TransformSpec::new("markdown")),
    ])
}

/// Project rules followed by the built-in rules, shadow-checked.
pub fn build_registry(ctx: &ModeContext, config: &BuildConfig) -> Result<RuleRegistry> {
    let project = config
        .rules
        .iter()
        .map(Rule::from_config)
        .collect::<Result<Vec<_>>>()?;

    RuleRegistry::builder()
        .rules(project)
        .rules(default_rules(ctx, config)?)
        .build()
}
