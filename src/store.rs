//! Rule store.
//!
//! Holds the three rule maps (exact, wildcard, exception) keyed by label
//! sequence. Built once from parsed rules and read-only afterwards, so a
//! store can be shared between threads without locking.

use std::collections::HashMap;

use crate::types::{RuleKind, RuleType, TextRule};

/// Trait for rule lookups used by the matching engine
pub trait RuleSource: Send + Sync {
    /// Look up an exact rule for the given labels
    fn lookup_exact(&self, labels: &[String]) -> Option<RuleKind>;

    /// Look up a wildcard rule; the leftmost label is already "*"
    fn lookup_wildcard(&self, labels: &[String]) -> Option<RuleKind>;

    /// Look up an exception rule (labels without the "!")
    fn lookup_exception(&self, labels: &[String]) -> Option<RuleKind>;
}

/// In-memory rule store backed by hash maps
#[derive(Debug, Clone, Default)]
pub struct RuleStore {
    exact: HashMap<Vec<String>, RuleKind>,
    wildcard: HashMap<Vec<String>, RuleKind>,
    exception: HashMap<Vec<String>, RuleKind>,
}

impl RuleStore {
    /// Build a store from parsed rules.
    ///
    /// A rule listed more than once keeps its first origin kind.
    pub fn from_rules(rules: &[TextRule]) -> Self {
        let mut store = Self::default();

        for rule in rules {
            let map = match rule.rule_type {
                RuleType::Exact => &mut store.exact,
                RuleType::Wildcard => &mut store.wildcard,
                RuleType::Exception => &mut store.exception,
            };
            if map.contains_key(&rule.labels) {
                log::debug!(
                    "line {}: duplicate rule {} ignored",
                    rule.line_num,
                    rule.labels.join(".")
                );
                continue;
            }
            map.insert(rule.labels.clone(), rule.kind);
        }

        tracing::debug!(
            exact = store.exact.len(),
            wildcard = store.wildcard.len(),
            exception = store.exception.len(),
            "rule store built"
        );

        store
    }

    /// Number of exact rules
    pub fn exact_count(&self) -> usize {
        self.exact.len()
    }

    /// Number of wildcard rules
    pub fn wildcard_count(&self) -> usize {
        self.wildcard.len()
    }

    /// Number of exception rules
    pub fn exception_count(&self) -> usize {
        self.exception.len()
    }

    /// Total number of rules
    pub fn len(&self) -> usize {
        self.exact.len() + self.wildcard.len() + self.exception.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RuleSource for RuleStore {
    fn lookup_exact(&self, labels: &[String]) -> Option<RuleKind> {
        self.exact.get(labels).copied()
    }

    fn lookup_wildcard(&self, labels: &[String]) -> Option<RuleKind> {
        self.wildcard.get(labels).copied()
    }

    fn lookup_exception(&self, labels: &[String]) -> Option<RuleKind> {
        self.exception.get(labels).copied()
    }
}
