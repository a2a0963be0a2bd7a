use serde::{Deserialize, Serialize};

/// Origin of a rule, taken from the section of the list it was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Icann,
    Private,
}

/// How a rule's labels are compared against a domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleType {
    /// "co.uk" matches the suffix "co.uk"
    Exact,
    /// "*.ck" matches any single label followed by "ck"
    Wildcard,
    /// "!www.ck" overrides a wildcard; the suffix is "ck"
    Exception,
}

/// Set of rule origins allowed to take part in matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KindFilter {
    icann: bool,
    private: bool,
}

impl KindFilter {
    /// ICANN and private rules
    pub const ALL: KindFilter = KindFilter {
        icann: true,
        private: true,
    };

    /// ICANN rules only
    pub const ICANN_ONLY: KindFilter = KindFilter {
        icann: true,
        private: false,
    };

    /// Check if rules of the given kind participate
    pub fn contains(&self, kind: RuleKind) -> bool {
        match kind {
            RuleKind::Icann => self.icann,
            RuleKind::Private => self.private,
        }
    }

    /// Check an optional lookup result against the filter
    pub(crate) fn admits(&self, kind: Option<RuleKind>) -> bool {
        kind.is_some_and(|k| self.contains(k))
    }
}

impl Default for KindFilter {
    fn default() -> Self {
        Self::ALL
    }
}

/// Matching options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Only ICANN rules participate when set
    pub ignore_private: bool,
}

impl Options {
    /// Create default options (private rules included)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether private rules are ignored
    pub fn with_ignore_private(mut self, ignore_private: bool) -> Self {
        self.ignore_private = ignore_private;
        self
    }

    /// Rule origins these options allow
    pub fn allowed_kinds(&self) -> KindFilter {
        if self.ignore_private {
            KindFilter::ICANN_ONLY
        } else {
            KindFilter::ALL
        }
    }
}

/// Parsed rule before it is loaded into a store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRule {
    /// Rule labels in written order; wildcards keep their leading "*",
    /// exceptions drop their "!"
    pub labels: Vec<String>,
    /// Rule type
    pub rule_type: RuleType,
    /// Section the rule was read from
    pub kind: RuleKind,
    /// Line number in the original text (for error reporting)
    pub line_num: usize,
}

/// Turn a raw domain into the label sequence used for matching.
///
/// Lower-cases, strips leading and trailing dots and drops the empty
/// labels left by repeated dots. No other validation is done. A domain
/// with no labels at all becomes a single empty label, which no rule
/// matches.
pub fn canonicalize(domain: &str) -> Vec<String> {
    let lowered = domain.to_lowercase();
    let labels: Vec<String> = lowered
        .trim_matches('.')
        .split('.')
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect();

    if labels.is_empty() {
        vec![String::new()]
    } else {
        labels
    }
}
