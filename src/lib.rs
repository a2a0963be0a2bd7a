//! PSL Engine - Public Suffix List rule matching for Rust
//!
//! This library finds the public suffix and registrable domain of a
//! hostname using the rules of a Public Suffix List:
//! - Exact rules (`co.uk`)
//! - Wildcard rules (`*.kawasaki.jp`), leftmost label only
//! - Exception rules (`!city.kawasaki.jp`), which beat every other rule
//! - ICANN / private section filtering
//! - Optional LRU caching of query results
//!
//! # Example
//!
//! ```rust
//! use psl_engine_r::{Options, PublicSuffixList};
//!
//! let list_text = "
//! // ===BEGIN ICANN DOMAINS===
//! com
//! io
//! // ===END ICANN DOMAINS===
//! // ===BEGIN PRIVATE DOMAINS===
//! github.io
//! // ===END PRIVATE DOMAINS===
//! ";
//!
//! let list = PublicSuffixList::parse(list_text).unwrap();
//! let opts = Options::default();
//!
//! assert_eq!(list.public_suffix("foo.bar.com", &opts).as_deref(), Some("com"));
//! assert_eq!(list.registrable_domain("foo.bar.com", &opts).as_deref(), Some("bar.com"));
//! assert_eq!(list.registrable_domain("com", &opts), None);
//!
//! let icann = Options::new().with_ignore_private(true);
//! assert_eq!(list.public_suffix("foo.github.io", &icann).as_deref(), Some("io"));
//! ```
//!
//! # Matching
//!
//! | Step | Rule | Effective length |
//! |------|------|------------------|
//! | 1 | Longest matching exception | labels - 1 |
//! | 2 | Longest matching exact or wildcard rule | labels |
//! | 3 | Implicit `*` | 1 |
//!
//! The registrable domain is the public suffix plus one label. When the
//! domain has fewer labels than required, the result is `None`.

pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod global;
pub mod list;
pub mod parser;
pub mod store;
pub mod types;

// Re-export commonly used items
pub use cache::{CachedSuffixList, DEFAULT_CACHE_SIZE};
pub use config::ListConfig;
pub use engine::{find_prevailing_rule, select_suffix, PrevailingRule};
pub use error::{ParseErrorKind, PslError, Result};
pub use list::{DomainParts, PublicSuffixList};
pub use parser::{parse_rule, parse_rules, parse_rules_from_file};
pub use store::{RuleSource, RuleStore};
pub use types::{canonicalize, KindFilter, Options, RuleKind, RuleType, TextRule};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_workflow() {
        let list_text = r#"
// ===BEGIN ICANN DOMAINS===
// uk : https://en.wikipedia.org/wiki/.uk
uk
co.uk

// ck : https://en.wikipedia.org/wiki/.ck
*.ck
!www.ck

com
io
// ===END ICANN DOMAINS===

// ===BEGIN PRIVATE DOMAINS===
github.io
// ===END PRIVATE DOMAINS===
"#;

        // Parse rules
        let rules = parse_rules(list_text).unwrap();
        assert_eq!(rules.len(), 7);

        // Build store and engine
        let store = RuleStore::from_rules(&rules);
        let labels = canonicalize("www.Example.CO.uk");
        let suffix = select_suffix(&store, &labels, 0, KindFilter::ALL).unwrap();
        assert_eq!(suffix.join("."), "co.uk");

        // Query through the list facade
        let list = PublicSuffixList::from_store(store);
        let opts = Options::default();

        assert_eq!(
            list.registrable_domain("www.example.co.uk", &opts),
            Some("example.co.uk".to_string())
        );
        assert_eq!(
            list.public_suffix("a.b.ck", &opts),
            Some("b.ck".to_string())
        );
        assert_eq!(
            list.registrable_domain("www.ck", &opts),
            Some("www.ck".to_string())
        );
        assert_eq!(
            list.public_suffix("foo.github.io", &Options::new().with_ignore_private(true)),
            Some("io".to_string())
        );

        // Cached queries agree with direct ones
        let cached = CachedSuffixList::new(list.clone(), DEFAULT_CACHE_SIZE);
        assert_eq!(
            cached.registrable_domain("www.example.co.uk", &opts),
            list.registrable_domain("www.example.co.uk", &opts)
        );
    }
}
