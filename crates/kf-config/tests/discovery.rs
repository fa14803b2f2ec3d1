//! Tests for layered config loading.

use figment::Jail;
use kf_config::{ConfigDiscovery, ConfigError, Mode};
use std::path::PathBuf;

#[test]
fn defaults_load_without_config_file() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        let config = ConfigDiscovery::new(jail.directory()).load().unwrap();
        assert_eq!(config.mode(), Mode::Production);
        assert_eq!(config.root_dir, jail.directory());
        assert_eq!(config.output_dir, PathBuf::from("build"));
        Ok(())
    });
}

#[test]
fn toml_file_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file(
            "kf.toml",
            r#"
mode = "test"
output_dir = "dist"

[project]
name = "Example"
"#,
        )?;

        let config = ConfigDiscovery::new(jail.directory()).load().unwrap();
        assert_eq!(config.mode(), Mode::Test);
        assert_eq!(config.output_dir, PathBuf::from("dist"));
        assert_eq!(config.project.name, "Example");
        assert_eq!(config.project.home_url, "https://www.karaoke-forever.com");
        Ok(())
    });
}

#[test]
fn package_json_kf_field_is_loaded() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file(
            "package.json",
            r#"{ "name": "app", "kf": { "entry": "./src/index.js" } }"#,
        )?;

        let config = ConfigDiscovery::new(jail.directory()).load().unwrap();
        assert_eq!(config.entry, "./src/index.js");
        Ok(())
    });
}

#[test]
fn node_env_selects_mode_over_file() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file("kf.toml", "mode = \"production\"\n")?;
        jail.set_env("NODE_ENV", "development");

        let config = ConfigDiscovery::new(jail.directory()).load().unwrap();
        assert_eq!(config.mode(), Mode::Development);
        Ok(())
    });
}

#[test]
fn unknown_node_env_falls_back_to_production() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("NODE_ENV", "staging");

        let config = ConfigDiscovery::new(jail.directory()).load().unwrap();
        assert_eq!(config.mode.as_deref(), Some("staging"));
        assert_eq!(config.mode(), Mode::Production);
        Ok(())
    });
}

#[test]
fn prefixed_env_and_package_version_apply() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("npm_package_version", "1.2.3");
        jail.set_env("KF_OUTPUT_DIR", "out");
        jail.set_env("KF_HTML__BASE", "/app/");

        let config = ConfigDiscovery::new(jail.directory()).load().unwrap();
        assert_eq!(config.project.version.as_deref(), Some("1.2.3"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.html.base, "/app/");
        Ok(())
    });
}

#[test]
fn invalid_file_reports_invalid_value() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file("kf.toml", "output_dir = [1, 2]\n")?;

        let result = ConfigDiscovery::new(jail.directory()).load();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}

#[test]
fn numeric_and_boolean_node_env_fall_back_to_production() {
    for value in ["1", "true", "0.5"] {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("NODE_ENV", value);

            let config = ConfigDiscovery::new(jail.directory()).load().unwrap();
            assert_eq!(config.mode.as_deref(), Some(value));
            assert_eq!(config.mode(), Mode::Production);
            Ok(())
        });
    }
}

#[test]
fn numeric_package_version_is_kept_verbatim() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("npm_package_version", "2");

        let config = ConfigDiscovery::new(jail.directory()).load().unwrap();
        assert_eq!(config.project.version.as_deref(), Some("2"));
        Ok(())
    });
}

#[test]
fn non_string_mode_in_file_or_prefixed_env_falls_back() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file("kf.toml", "mode = 1\n\n[project]\nversion = 3\n")?;

        let config = ConfigDiscovery::new(jail.directory()).load().unwrap();
        assert_eq!(config.mode(), Mode::Production);
        assert_eq!(config.project.version.as_deref(), Some("3"));

        jail.set_env("KF_MODE", "true");
        let config = ConfigDiscovery::new(jail.directory()).load().unwrap();
        assert_eq!(config.mode.as_deref(), Some("true"));
        assert_eq!(config.mode(), Mode::Production);
        Ok(())
    });
}
