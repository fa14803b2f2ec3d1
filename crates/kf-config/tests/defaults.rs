//! Tests for default values.

use kf_config::{
    AssetOptions, BuildConfig, DevOptions, GlobalSettings, HtmlOptions, LicenseOptions, Mode,
    ProjectInfo,
};
use std::path::PathBuf;

#[test]
fn build_config_defaults() {
    let config = BuildConfig::default();
    assert_eq!(config.mode(), Mode::Production);
    assert_eq!(config.root_dir, PathBuf::from("."));
    assert_eq!(config.output_dir, PathBuf::from("build"));
    assert_eq!(config.source_dir, PathBuf::from("src"));
    assert_eq!(config.entry, "./src/main.js");
    assert!(config.rules.is_empty());
    assert!(config.profiles.is_empty());
}

#[test]
fn default_aliases_keep_declaration_order() {
    let config = BuildConfig::default();
    let names: Vec<&str> = config.alias.keys().map(String::as_str).collect();
    assert_eq!(names, ["<PROJECT_ROOT>", "assets", "fonts", "shared"]);
    assert_eq!(config.alias["fonts"], PathBuf::from("docs/assets/fonts"));
}

#[test]
fn project_info_defaults() {
    let project = ProjectInfo::default();
    assert_eq!(project.name, "Karaoke Forever");
    assert!(project.version.is_none());
    assert_eq!(project.license_url, "/licenses.txt");
    assert_eq!(project.copyright_start, 2019);
    assert_eq!(project.copyright_holder, "RadRoot LLC");
}

#[test]
fn option_group_defaults() {
    let html = HtmlOptions::default();
    assert_eq!(html.template, PathBuf::from("./src/index.html"));
    assert_eq!(html.base, "/");

    let license = LicenseOptions::default();
    assert_eq!(license.project_license, PathBuf::from("LICENSE"));
    assert_eq!(license.output_filename, "licenses.txt");

    assert_eq!(DevOptions::default().hot_client, "webpack-hot-middleware/client");
    assert_eq!(AssetOptions::default().inline_limit, 8192);

    let settings = GlobalSettings::default();
    assert!(settings.log_level.is_none());
    assert!(settings.log_format.is_none());
}

#[test]
fn empty_toml_yields_defaults() {
    let config = BuildConfig::from_toml_str("").expect("parse empty toml");
    assert_eq!(config.output_dir, PathBuf::from("build"));
    assert_eq!(config.alias.len(), 4);
}

#[test]
fn rules_parse_from_toml() {
    let config = BuildConfig::from_toml_str(
        r#"
[[rules]]
id = "worker"
test = { suffix = [".worker.js"] }
exclude = { contains = "node_modules" }
use = [{ name = "worker", options = { inline = "fallback" } }]

[[rules]]
id = "shaders"
test = { regex = '\.(glsl|frag)$' }
ignore_case = true
use = [{ name = "raw" }]
"#,
    )
    .expect("parse rules");

    assert_eq!(config.rules.len(), 2);
    let worker = &config.rules[0];
    assert_eq!(worker.id, "worker");
    assert_eq!(worker.transforms[0].options["inline"], "fallback");
    assert!(worker.exclude.is_some());
    assert!(config.rules[1].ignore_case);
    assert!(config.rules[1].transforms[0].options.is_empty());
}
