//! Top-level build configuration and per-mode profile merging.
//!
//! For file discovery and layered loading, see the `discovery` module.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result as ConfigResult};
use crate::mode::Mode;
use crate::options::{
    AssetOptions, DevOptions, HtmlOptions, LicenseOptions, ProjectInfo, RuleConfig,
    default_aliases, default_entry, default_output_dir, default_root_dir, default_source_dir,
    scalar_string,
};
use crate::settings::GlobalSettings;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Raw mode value; see [`BuildConfig::mode`]
    #[serde(
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub mode: Option<String>,

    #[serde(default = "default_root_dir")]
    pub root_dir: PathBuf,

    /// Build output, relative to `root_dir`
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// First module search directory, relative to `root_dir`
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Main entry module
    #[serde(default = "default_entry")]
    pub entry: String,

    /// Import aliases (name → directory). Relative targets resolve against `root_dir`.
    #[serde(default = "default_aliases")]
    pub alias: IndexMap<String, PathBuf>,

    #[serde(default)]
    pub project: ProjectInfo,

    #[serde(default)]
    pub html: HtmlOptions,

    #[serde(default)]
    pub license: LicenseOptions,

    #[serde(default)]
    pub dev: DevOptions,

    #[serde(default)]
    pub assets: AssetOptions,

    /// Project rules, consulted before the built-in rules
    #[serde(default)]
    pub rules: Vec<RuleConfig>,

    #[serde(default)]
    pub settings: GlobalSettings,

    /// Per-mode overrides, keyed by mode name
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub profiles: HashMap<String, Value>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            mode: None,
            root_dir: default_root_dir(),
            output_dir: default_output_dir(),
            source_dir: default_source_dir(),
            entry: default_entry(),
            alias: default_aliases(),
            project: ProjectInfo::default(),
            html: HtmlOptions::default(),
            license: LicenseOptions::default(),
            dev: DevOptions::default(),
            assets: AssetOptions::default(),
            rules: Vec::new(),
            settings: GlobalSettings::default(),
            profiles: HashMap::new(),
        }
    }
}

impl BuildConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use kf_config::{BuildConfig, Mode};
    /// use serde_json::json;
    ///
    /// let config = BuildConfig::from_value(json!({
    ///     "mode": "development",
    ///     "output_dir": "dist"
    /// }))
    /// .unwrap();
    /// assert_eq!(config.mode(), Mode::Development);
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Parse a `kf.toml` document
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::InvalidValue {
            field: "toml".to_string(),
            hint: Some(format!("Invalid TOML syntax: {}", e)),
        })
    }

    /// The resolved build mode. Missing or unrecognized values mean production.
    pub fn mode(&self) -> Mode {
        Mode::from_env_value(self.mode.as_deref())
    }

    /// Absolute-or-root-relative output directory
    pub fn output_path(&self) -> PathBuf {
        self.resolve_path(&self.output_dir)
    }

    /// Join `path` onto `root_dir` unless it is already absolute
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root_dir.join(path)
        }
    }
}

impl BuildConfig {
    /// Deep-merge the profile named after the resolved mode into the config.
    ///
    /// Objects merge key by key; arrays and scalars replace. The `profiles`
    /// table itself is preserved.
    pub fn materialize_profile(self) -> ConfigResult<Self> {
        let mode = self.mode();
        let Some(overrides) = self.profiles.get(mode.as_str()).cloned() else {
            return Ok(self);
        };

        if overrides.is_null() {
            return Ok(self);
        }

        if !overrides.is_object() {
            return Err(ConfigError::InvalidProfileOverride {
                message: format!("profile `{}` must be a table", mode),
            });
        }

        let profiles = self.profiles.clone();
        let mut base =
            serde_json::to_value(&self).map_err(|err| ConfigError::InvalidProfileOverride {
                message: err.to_string(),
            })?;
        merge_values(&mut base, &overrides);

        let mut merged: BuildConfig =
            serde_json::from_value(base).map_err(|err| ConfigError::InvalidProfileOverride {
                message: err.to_string(),
            })?;
        merged.profiles = profiles;

        if merged.mode() != mode {
            return Err(ConfigError::InvalidProfileOverride {
                message: format!("profile `{}` cannot change the build mode", mode),
            });
        }

        Ok(merged)
    }
}

fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}
