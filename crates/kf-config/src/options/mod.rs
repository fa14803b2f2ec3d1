//! Option groups that make up a [`BuildConfig`](crate::BuildConfig).

mod helpers;
mod html;
mod license;
mod project;
mod rules;

use serde::{Deserialize, Serialize};

pub use html::HtmlOptions;
pub use license::LicenseOptions;
pub use project::ProjectInfo;
pub use rules::{PatternConfig, RuleConfig, TransformConfig};

pub(crate) use helpers::*;

/// Development-only options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevOptions {
    /// Hot-reload client appended to the main entry in development
    #[serde(default = "default_hot_client")]
    pub hot_client: String,
}

impl Default for DevOptions {
    fn default() -> Self {
        Self {
            hot_client: default_hot_client(),
        }
    }
}

/// Static asset handling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetOptions {
    /// Images below this size (bytes) are inlined as data URLs
    #[serde(default = "default_inline_limit")]
    pub inline_limit: u64,
}

impl Default for AssetOptions {
    fn default() -> Self {
        Self {
            inline_limit: default_inline_limit(),
        }
    }
}
