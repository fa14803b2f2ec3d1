//! Pluggable config validation strategies
//!
//! Separates filesystem validation from schema validation so configs built
//! in memory can be checked without touching disk.

use std::path::Path;

use crate::config::BuildConfig;
use crate::error::{ConfigError, Result};
use crate::options::PatternConfig;

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use kf_config::{BuildConfig, ConfigValidator, SchemaValidator};
///
/// SchemaValidator.validate(&BuildConfig::default()).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        if config.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::schema(
                "output_dir cannot be empty",
                "Set output_dir to a directory such as \"build\"",
            ));
        }

        if config.entry.trim().is_empty() {
            return Err(ConfigError::schema(
                "entry cannot be empty",
                "Point entry at the main module, e.g. \"./src/main.js\"",
            ));
        }

        for (name, target) in &config.alias {
            if name.trim().is_empty() {
                return Err(ConfigError::schema(
                    "alias names cannot be empty",
                    "Remove empty keys from the alias table",
                ));
            }
            if target.as_os_str().is_empty() {
                return Err(ConfigError::schema(
                    format!("alias `{}` has an empty target", name),
                    "Give every alias a directory",
                ));
            }
        }

        if !config.html.base.starts_with('/') {
            return Err(ConfigError::schema(
                format!("html base `{}` must start with '/'", config.html.base),
                "Use an absolute public path such as \"/\"",
            ));
        }

        if config.assets.inline_limit == 0 {
            return Err(ConfigError::schema(
                "assets.inline_limit must be greater than 0",
                "Use 8192 to inline images below 8KB",
            ));
        }

        for rule in &config.rules {
            if rule.id.trim().is_empty() {
                return Err(ConfigError::schema(
                    "rule id cannot be empty",
                    "Give every [[rules]] entry a unique id",
                ));
            }
            if rule.transforms.is_empty() {
                return Err(ConfigError::schema(
                    format!("rule `{}` has no transforms", rule.id),
                    "List at least one transform under `use`",
                ));
            }
            if rule.transforms.iter().any(|t| t.name.trim().is_empty()) {
                return Err(ConfigError::schema(
                    format!("rule `{}` has a transform without a name", rule.id),
                    "Every entry under `use` needs a name",
                ));
            }
            for pattern in std::iter::once(&rule.test).chain(rule.exclude.as_ref()) {
                if pattern_is_empty(pattern) {
                    return Err(ConfigError::schema(
                        format!("rule `{}` has an empty pattern", rule.id),
                        "Patterns must contain at least one non-empty string",
                    ));
                }
            }
        }

        Ok(())
    }
}

fn pattern_is_empty(pattern: &PatternConfig) -> bool {
    match pattern {
        PatternConfig::Suffix(suffixes) => {
            suffixes.is_empty() || suffixes.iter().any(|s| s.is_empty())
        }
        PatternConfig::Contains(s) | PatternConfig::Regex(s) => s.is_empty(),
    }
}

/// Filesystem validator
///
/// Runs schema validation, then checks that the project root and HTML
/// template exist, and that the project license exists for production builds.
pub struct FsValidator;

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        if !config.root_dir.is_dir() {
            return Err(ConfigError::RootNotFound {
                path: config.root_dir.clone(),
            });
        }

        let template = config.resolve_path(&config.html.template);
        if !template.is_file() {
            return Err(ConfigError::TemplateNotFound { path: template });
        }

        if config.mode().is_prod() {
            let license = config.resolve_path(&config.license.project_license);
            if !license.is_file() {
                return Err(ConfigError::LicenseFileNotFound { path: license });
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &BuildConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation against `root`
///
/// ```no_run
/// use kf_config::{BuildConfig, validate_fs};
///
/// validate_fs(&BuildConfig::default(), ".").unwrap();
/// ```
pub fn validate_fs(config: &BuildConfig, root: impl AsRef<Path>) -> Result<()> {
    let mut rooted = config.clone();
    rooted.root_dir = root.as_ref().to_path_buf();
    FsValidator.validate(&rooted)
}
