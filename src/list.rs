//! Public suffix list.
//!
//! Wraps a rule source and answers suffix queries on raw domain strings.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::engine::{find_prevailing_rule, take_suffix, PrevailingRule};
use crate::error::Result;
use crate::parser::{parse_rules, parse_rules_from_file};
use crate::store::{RuleSource, RuleStore};
use crate::types::{canonicalize, Options, TextRule};

/// Extra labels on top of the public suffix for a registrable domain
const REGISTRABLE_EXTRA_LABELS: usize = 1;

/// A domain split around its registrable domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainParts {
    /// Labels left of the registrable domain, if any
    pub subdomain: Option<String>,
    /// The label directly left of the public suffix
    pub label: String,
    /// The public suffix
    pub suffix: String,
}

impl DomainParts {
    /// Registrable domain (label plus suffix)
    pub fn registrable_domain(&self) -> String {
        format!("{}.{}", self.label, self.suffix)
    }
}

/// Public suffix list backed by a shared, read-only rule source
#[derive(Clone)]
pub struct PublicSuffixList {
    source: Arc<dyn RuleSource>,
}

impl PublicSuffixList {
    /// Create a list from an existing rule source
    pub fn from_source(source: Arc<dyn RuleSource>) -> Self {
        Self { source }
    }

    /// Create a list from a rule store
    pub fn from_store(store: RuleStore) -> Self {
        tracing::debug!(rules = store.len(), "public suffix list created");
        Self::from_source(Arc::new(store))
    }

    /// Create a list from parsed rules
    pub fn from_rules(rules: &[TextRule]) -> Self {
        Self::from_store(RuleStore::from_rules(rules))
    }

    /// Parse suffix list text
    pub fn parse(text: &str) -> Result<Self> {
        let rules = parse_rules(text)?;
        Ok(Self::from_rules(&rules))
    }

    /// Load a suffix list file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let rules = parse_rules_from_file(path)?;
        tracing::info!(path = %path.display(), rules = rules.len(), "suffix list loaded");
        Ok(Self::from_rules(&rules))
    }

    /// Public suffix of `domain`, or `None` if it has too few labels
    pub fn public_suffix(&self, domain: &str, options: &Options) -> Option<String> {
        self.select(domain, 0, options)
    }

    /// Registrable domain of `domain` (public suffix plus one label),
    /// or `None` if it has too few labels
    pub fn registrable_domain(&self, domain: &str, options: &Options) -> Option<String> {
        self.select(domain, REGISTRABLE_EXTRA_LABELS, options)
    }

    /// Rule that decides the suffix of `domain`
    pub fn prevailing_rule(&self, domain: &str, options: &Options) -> PrevailingRule {
        let labels = canonicalize(domain);
        find_prevailing_rule(self.source.as_ref(), &labels, options.allowed_kinds())
    }

    /// Check if `domain` is itself a public suffix
    pub fn is_public_suffix(&self, domain: &str, options: &Options) -> bool {
        let labels = canonicalize(domain);
        let rule = find_prevailing_rule(self.source.as_ref(), &labels, options.allowed_kinds());
        rule.suffix_len() == labels.len()
    }

    /// Labels left of the registrable domain, if there are any
    pub fn subdomain(&self, domain: &str, options: &Options) -> Option<String> {
        self.split(domain, options)?.subdomain
    }

    /// Split `domain` into subdomain, registrable label and public suffix
    pub fn split(&self, domain: &str, options: &Options) -> Option<DomainParts> {
        let labels = canonicalize(domain);
        let rule = find_prevailing_rule(self.source.as_ref(), &labels, options.allowed_kinds());
        let suffix_len = rule.suffix_len();
        let suffix = take_suffix(&labels, suffix_len)?;
        let registrable = take_suffix(&labels, suffix_len + REGISTRABLE_EXTRA_LABELS)?;
        let rest = &labels[..labels.len() - registrable.len()];

        Some(DomainParts {
            subdomain: (!rest.is_empty()).then(|| rest.join(".")),
            label: registrable[0].clone(),
            suffix: suffix.join("."),
        })
    }

    fn select(&self, domain: &str, extra_label_count: usize, options: &Options) -> Option<String> {
        let labels = canonicalize(domain);
        let rule = find_prevailing_rule(self.source.as_ref(), &labels, options.allowed_kinds());
        take_suffix(&labels, rule.suffix_len() + extra_label_count).map(|s| s.join("."))
    }
}

impl fmt::Debug for PublicSuffixList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicSuffixList").finish_non_exhaustive()
    }
}
