//! Ordered, first-match-wins rule dispatch.

use rustc_hash::FxHashSet;

use crate::error::{Error, Result};
use crate::rule::{Rule, Shadowing, TransformSpec, find_shadowed};

/// Outcome of classifying a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification<'a> {
    /// The first applicable rule and its transform chain
    Matched {
        rule: &'a str,
        chain: &'a [TransformSpec],
    },
    /// No rule applies. Callers decide whether to pass the file through or reject it.
    NoMatch,
}

impl<'a> Classification<'a> {
    pub fn chain(&self) -> Option<&'a [TransformSpec]> {
        match *self {
            Classification::Matched { chain, .. } => Some(chain),
            Classification::NoMatch => None,
        }
    }

    pub fn rule(&self) -> Option<&'a str> {
        match *self {
            Classification::Matched { rule, .. } => Some(rule),
            Classification::NoMatch => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Classification::Matched { .. })
    }
}

/// Immutable, ordered rule set. Registration order is dispatch order.
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    rules: Vec<Rule>,
}

impl RuleRegistry {
    pub fn builder() -> RuleRegistryBuilder {
        RuleRegistryBuilder::default()
    }

    /// Return the chain of the first rule that matches `path` and does not
    /// exclude it.
    ///
    /// Paths are compared as given; callers supply normalized paths.
    pub fn classify(&self, path: &str) -> Classification<'_> {
        match self.rules.iter().find(|rule| rule.applies_to(path)) {
            Some(rule) => Classification::Matched {
                rule: rule.id(),
                chain: rule.chain(),
            },
            None => {
                tracing::debug!("no rule matches {path}");
                Classification::NoMatch
            }
        }
    }

    /// Like [`classify`](Self::classify), rejecting empty paths.
    pub fn try_classify(&self, path: &str) -> Result<Classification<'_>> {
        if path.is_empty() {
            return Err(Error::EmptyPath);
        }
        Ok(self.classify(path))
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.id() == id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct RuleRegistryBuilder {
    rules: Vec<Rule>,
}

impl RuleRegistryBuilder {
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Rules that can never be reached with the current ordering.
    pub fn shadowed(&self) -> Vec<Shadowing> {
        find_shadowed(&self.rules)
    }

    /// Freeze the registry, rejecting duplicate ids and shadowed rules.
    pub fn build(self) -> Result<RuleRegistry> {
        let mut seen = FxHashSet::default();
        for rule in &self.rules {
            if !seen.insert(rule.id()) {
                return Err(Error::DuplicateRule {
                    rule: rule.id().to_string(),
                });
            }
        }

        if let Some(Shadowing { rule, shadowed_by }) = self.shadowed().into_iter().next() {
            return Err(Error::ShadowedRule { rule, shadowed_by });
        }

        Ok(RuleRegistry { rules: self.rules })
    }
}
