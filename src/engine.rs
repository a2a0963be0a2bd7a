//! Matching engine.
//!
//! Finds the prevailing rule for a label sequence and slices the sequence
//! down to the public suffix (or registrable domain). Exceptions beat
//! every normal rule; among normal rules the longest suffix wins. When
//! nothing matches, the implicit `*` rule applies.
//!
//! Only leftmost wildcards are matched. A wildcard in any other position
//! is rejected by the parser and never reaches the engine.

use crate::store::RuleSource;
use crate::types::{KindFilter, RuleKind, RuleType};

/// The rule that governs the result for a given domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrevailingRule {
    /// Rule type; `None` for the implicit `*` rule
    pub rule_type: Option<RuleType>,
    /// Origin of the rule; `None` for the implicit `*` rule
    pub kind: Option<RuleKind>,
    /// Rule labels as stored ("*" leftmost for wildcards, no "!" for exceptions)
    pub labels: Vec<String>,
}

impl PrevailingRule {
    fn default_rule() -> Self {
        Self {
            rule_type: None,
            kind: None,
            labels: vec!["*".to_string()],
        }
    }

    /// Check if this is the implicit `*` rule
    pub fn is_default(&self) -> bool {
        self.rule_type.is_none()
    }

    /// Number of trailing labels that form the public suffix
    pub fn suffix_len(&self) -> usize {
        match self.rule_type {
            Some(RuleType::Exception) => self.labels.len() - 1,
            _ => self.labels.len(),
        }
    }
}

/// Find the prevailing rule for `labels` among rules admitted by `filter`.
pub fn find_prevailing_rule<S>(store: &S, labels: &[String], filter: KindFilter) -> PrevailingRule
where
    S: RuleSource + ?Sized,
{
    // Exceptions first, most specific suffix first
    for start in 0..labels.len() {
        let suffix = &labels[start..];
        let kind = store.lookup_exception(suffix);
        if filter.admits(kind) {
            return PrevailingRule {
                rule_type: Some(RuleType::Exception),
                kind,
                labels: suffix.to_vec(),
            };
        }
    }

    let mut wildcard = Vec::with_capacity(labels.len());
    for start in 0..labels.len() {
        let suffix = &labels[start..];

        let kind = store.lookup_exact(suffix);
        if filter.admits(kind) {
            return PrevailingRule {
                rule_type: Some(RuleType::Exact),
                kind,
                labels: suffix.to_vec(),
            };
        }

        wildcard.clear();
        wildcard.push("*".to_string());
        wildcard.extend_from_slice(&suffix[1..]);
        let kind = store.lookup_wildcard(&wildcard);
        if filter.admits(kind) {
            return PrevailingRule {
                rule_type: Some(RuleType::Wildcard),
                kind,
                labels: wildcard,
            };
        }
    }

    PrevailingRule::default_rule()
}

/// Select the trailing labels for the public suffix (`extra_label_count`
/// of 0) or the registrable domain (`extra_label_count` of 1).
///
/// Returns `None` when the domain has fewer labels than required.
pub fn select_suffix<'a, S>(
    store: &S,
    labels: &'a [String],
    extra_label_count: usize,
    filter: KindFilter,
) -> Option<&'a [String]>
where
    S: RuleSource + ?Sized,
{
    let rule = find_prevailing_rule(store, labels, filter);
    take_suffix(labels, rule.suffix_len() + extra_label_count)
}

/// Trailing `required` labels, if there are that many.
pub(crate) fn take_suffix(labels: &[String], required: usize) -> Option<&[String]> {
    if required == 0 || labels.len() < required {
        return None;
    }
    Some(&labels[labels.len() - required..])
}
