//! Classification rules: a path predicate plus the transform chain it triggers.

mod pattern;
mod shadow;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use kf_config::{RuleConfig, TransformConfig};

use crate::error::{Error, Result};

pub use pattern::Pattern;
pub use shadow::{Shadowing, find_shadowed};

/// One named transform and its options.
///
/// Options are opaque here; only the transform engine interprets them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformSpec {
    pub name: String,
    pub options: IndexMap<String, Value>,
}

impl TransformSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: IndexMap::new(),
        }
    }

    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

impl From<&TransformConfig> for TransformSpec {
    fn from(config: &TransformConfig) -> Self {
        Self {
            name: config.name.clone(),
            options: config.options.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Rule {
    id: String,
    test: Pattern,
    exclude: Option<Pattern>,
    chain: Vec<TransformSpec>,
}

impl Rule {
    pub fn new(id: impl Into<String>, test: Pattern) -> Self {
        Self {
            id: id.into(),
            test,
            exclude: None,
            chain: Vec::new(),
        }
    }

    /// Carve paths out of the match set. Excluding paths the rule never
    /// matched has no effect.
    pub fn exclude(mut self, pattern: Pattern) -> Self {
        self.exclude = Some(pattern);
        self
    }

    /// Append a transform to the chain.
    pub fn then(mut self, transform: TransformSpec) -> Self {
        self.chain.push(transform);
        self
    }

    pub fn from_config(config: &RuleConfig) -> Result<Self> {
        let invalid = |source| Error::InvalidPattern {
            rule: config.id.clone(),
            source,
        };

        let test = Pattern::from_config(&config.test, config.ignore_case).map_err(invalid)?;
        let exclude = config
            .exclude
            .as_ref()
            .map(|p| Pattern::from_config(p, config.ignore_case))
            .transpose()
            .map_err(invalid)?;

        Ok(Self {
            id: config.id.clone(),
            test,
            exclude,
            chain: config.transforms.iter().map(TransformSpec::from).collect(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn test(&self) -> &Pattern {
        &self.test
    }

    pub fn exclusion(&self) -> Option<&Pattern> {
        self.exclude.as_ref()
    }

    pub fn chain(&self) -> &[TransformSpec] {
        &self.chain
    }

    /// Matched and not excluded.
    pub fn applies_to(&self, path: &str) -> bool {
        self.test.matches(path) && !self.exclude.as_ref().is_some_and(|x| x.matches(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kf_config::PatternConfig;
    use serde_json::json;

    #[test]
    fn exclusion_removes_matched_paths() {
        let rule = Rule::new("css", Pattern::suffix(".css")).exclude(Pattern::suffix("global.css"));
        assert!(rule.applies_to("button.css"));
        assert!(!rule.applies_to("app.global.css"));
    }

    #[test]
    fn exclusion_outside_match_set_is_noop() {
        let rule = Rule::new("md", Pattern::suffix(".md")).exclude(Pattern::suffix(".css"));
        assert!(rule.applies_to("README.md"));
        assert!(!rule.applies_to("a.css"));
    }

    #[test]
    fn from_config_keeps_chain_order_and_options() {
        let config = RuleConfig {
            id: "worker".to_string(),
            test: PatternConfig::Suffix(vec![".worker.js".to_string()]),
            exclude: None,
            ignore_case: false,
            transforms: vec![
                TransformConfig {
                    name: "worker".to_string(),
                    options: IndexMap::from([("inline".to_string(), json!("fallback"))]),
                },
                TransformConfig {
                    name: "babel".to_string(),
                    options: IndexMap::new(),
                },
            ],
        };

        let rule = Rule::from_config(&config).unwrap();
        let names: Vec<&str> = rule.chain().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["worker", "babel"]);
        assert_eq!(rule.chain()[0].options["inline"], json!("fallback"));
    }

    #[test]
    fn from_config_reports_bad_regex_with_rule_id() {
        let config = RuleConfig {
            id: "broken".to_string(),
            test: PatternConfig::Regex("(".to_string()),
            exclude: None,
            ignore_case: false,
            transforms: vec![],
        };

        match Rule::from_config(&config).unwrap_err() {
            Error::InvalidPattern { rule, .. } => assert_eq!(rule, "broken"),
            other => panic!("expected InvalidPattern, got {other:?}"),
        }
    }
}
