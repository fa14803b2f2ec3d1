//! Error types for pipeline assembly.
//!
//! Everything here is a configuration-time failure. Per-path anomalies
//! (unmatched paths, empty license text) are not errors.

use kf_config::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("rule `{rule}` has an invalid pattern: {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("rule `{rule}` is registered more than once")]
    DuplicateRule { rule: String },

    #[error("rule `{rule}` can never match: every path it matches is claimed by earlier rule `{shadowed_by}`")]
    ShadowedRule { rule: String, shadowed_by: String },

    #[error("plugin `{plugin}` requires {input}, which was not provided")]
    MissingPrerequisite {
        plugin: &'static str,
        input: &'static str,
    },

    #[error("cannot classify an empty path")]
    EmptyPath,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}
