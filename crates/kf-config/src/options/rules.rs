use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A project-defined classification rule.
///
/// Project rules are registered ahead of the built-in rules, so a project
/// rule may narrow (but must not shadow) a built-in one.
///
/// ```toml
/// [[rules]]
/// id = "worker"
/// test = { suffix = [".worker.js"] }
/// use = [{ name = "worker", options = { inline = "fallback" } }]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    pub id: String,

    /// Paths this rule applies to
    pub test: PatternConfig,

    /// Paths carved out of `test`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<PatternConfig>,

    /// Apply ASCII case-insensitive matching to `test` and `exclude`
    #[serde(default)]
    pub ignore_case: bool,

    /// Ordered transform chain
    #[serde(rename = "use")]
    pub transforms: Vec<TransformConfig>,
}

/// Path pattern as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternConfig {
    /// Path ends with any of the given suffixes
    Suffix(Vec<String>),
    /// Path contains the given substring
    Contains(String),
    /// Regular expression searched anywhere in the path
    Regex(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformConfig {
    pub name: String,

    #[serde(default)]
    pub options: IndexMap<String, Value>,
}
