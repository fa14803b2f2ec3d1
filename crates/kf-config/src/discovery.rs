//! File-based config discovery and layered loading.
//!
//! Sources, lowest priority first:
//! 1. built-in defaults
//! 2. `kf.toml`, or the `kf` field of `package.json`
//! 3. `npm_package_version` (project version)
//! 4. `KF_`-prefixed environment variables (`__` separates nested keys)
//! 5. `NODE_ENV` (build mode)
//!
//! The profile named after the resolved mode is merged last.

use std::path::{Path, PathBuf};
use std::{env, fs};

use figment::Figment;
use figment::providers::{Env, Format as _, Json, Serialized, Toml};
use serde_json::Value;

use crate::config::BuildConfig;
use crate::error::{ConfigError, Result};

/// Layered configuration loader rooted at a project directory.
///
/// # Example
///
/// ```no_run
/// use kf_config::ConfigDiscovery;
///
/// let config = ConfigDiscovery::new(".").load().unwrap();
/// println!("building in {} mode", config.mode());
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. kf.toml
    /// 2. package.json (kf field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join("kf.toml");
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed.get("kf").is_some_and(|v| !v.is_null()) {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load config, using a discovered file when one exists.
    pub fn load(&self) -> Result<BuildConfig> {
        let figment = self.figment(self.find().as_deref());
        self.finish(figment)
    }

    /// Load config from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file does not exist.
    pub fn load_from(&self, path: &Path) -> Result<BuildConfig> {
        if !path.exists() {
            return Err(ConfigError::NotFound);
        }
        let figment = self.figment(Some(path));
        self.finish(figment)
    }

    /// The layered provider stack, exposed for callers that add their own layers.
    pub fn figment(&self, file: Option<&Path>) -> Figment {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(BuildConfig::default()))
            .merge(Serialized::default("root_dir", &self.root));

        if let Some(path) = file {
            if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
                figment = figment.merge(Figment::from(Json::file(path)).focus("kf"));
            } else {
                figment = figment.merge(Toml::file(path));
            }
        }

        // Taken verbatim as strings; `NODE_ENV=1` is an unknown mode, not a number.
        if let Ok(version) = env::var("npm_package_version") {
            figment = figment.merge(Serialized::default("project.version", version));
        }

        figment = figment.merge(Env::prefixed("KF_").split("__"));

        if let Ok(mode) = env::var("NODE_ENV") {
            figment = figment.merge(Serialized::default("mode", mode));
        }

        figment
    }

    fn finish(&self, figment: Figment) -> Result<BuildConfig> {
        let mut config: BuildConfig = figment.extract().map_err(|e| ConfigError::InvalidValue {
            field: "configuration".to_string(),
            hint: Some(e.to_string()),
        })?;

        if config.root_dir.is_relative() && config.root_dir != self.root {
            config.root_dir = self.root.join(&config.root_dir);
        }

        config.materialize_profile()
    }
}

/// Discover and load config from the current directory (convenience function)
pub fn discover() -> Result<BuildConfig> {
    let root = env::current_dir()?;
    ConfigDiscovery::new(&root).load()
}
