//! Cross-checks between queries over a fixed set of domains.

use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use psl_engine_r::{canonicalize, Options, PublicSuffixList, RuleType};

fn load_list() -> PublicSuffixList {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("testdata");
    path.push("public_suffix_list.dat");
    PublicSuffixList::from_file(&path).expect("testdata suffix list should load")
}

fn sample_domains() -> Vec<&'static str> {
    vec![
        "com",
        "example.com",
        "www.example.com",
        "a.b.c.example.com",
        "co.uk",
        "www.bbc.co.uk",
        "foo.blogspot.co.uk",
        "foo.github.io",
        "github.io",
        "test.ck",
        "www.ck",
        "a.b.test.ck",
        "c.kobe.jp",
        "city.kobe.jp",
        "www.city.kobe.jp",
        "b.ide.kyoto.jp",
        "example",
        "foo.example",
        "ec2.us-east-1.compute.amazonaws.com",
        "www.食狮.公司.cn",
        "Mixed.Case.COM",
        "",
    ]
}

fn options() -> [Options; 2] {
    [Options::default(), Options::new().with_ignore_private(true)]
}

#[test]
fn test_registrable_domain_extends_public_suffix() {
    let list = load_list();

    for opts in options() {
        for domain in sample_domains() {
            let suffix = list.public_suffix(domain, &opts);
            let registrable = list.registrable_domain(domain, &opts);

            match (&suffix, &registrable) {
                (Some(suffix), Some(registrable)) => {
                    let (label, rest) = registrable
                        .split_once('.')
                        .unwrap_or_else(|| panic!("{} has no extra label", registrable));
                    assert!(!label.is_empty(), "{}", domain);
                    assert_eq!(rest, suffix, "{}", domain);
                }
                (Some(suffix), None) => {
                    // No label left over beyond the suffix
                    assert_eq!(
                        canonicalize(domain).join("."),
                        *suffix,
                        "{} should equal its suffix",
                        domain
                    );
                }
                (None, None) => {}
                (None, Some(r)) => panic!("{}: registrable {} without suffix", domain, r),
            }
        }
    }
}

#[test]
fn test_public_suffix_is_idempotent() {
    let list = load_list();

    for opts in options() {
        for domain in sample_domains() {
            // An exception's suffix ("kobe.jp" from "!city.kobe.jp") need not
            // be covered by a rule of its own
            if list.prevailing_rule(domain, &opts).rule_type == Some(RuleType::Exception) {
                continue;
            }
            if let Some(suffix) = list.public_suffix(domain, &opts) {
                let again = list.public_suffix(&suffix, &opts);
                assert!(
                    again.is_none() || again.as_deref() == Some(suffix.as_str()),
                    "{}: {} -> {:?}",
                    domain,
                    suffix,
                    again
                );
            }
        }
    }
}

#[test]
fn test_case_insensitive() {
    let list = load_list();

    for opts in options() {
        for domain in sample_domains() {
            assert_eq!(
                list.public_suffix(&domain.to_uppercase(), &opts),
                list.public_suffix(&domain.to_lowercase(), &opts),
                "{}",
                domain
            );
        }
    }
}

#[test]
fn test_ignore_private_never_uses_private_rule() {
    let list = load_list();
    let icann = Options::new().with_ignore_private(true);

    for domain in sample_domains() {
        let rule = list.prevailing_rule(domain, &icann);
        assert_ne!(
            rule.kind,
            Some(psl_engine_r::RuleKind::Private),
            "{} matched a private rule",
            domain
        );
    }
}

#[test]
fn test_exception_takes_priority() {
    let list = load_list();
    let opts = Options::default();

    let rule = list.prevailing_rule("www.city.kobe.jp", &opts);
    assert_eq!(rule.rule_type, Some(RuleType::Exception));
    assert_eq!(
        list.public_suffix("www.city.kobe.jp", &opts).as_deref(),
        Some("kobe.jp")
    );
}

#[test]
fn test_concurrent_readers() {
    let list = Arc::new(load_list());
    let opts = Options::default();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let list = Arc::clone(&list);
            thread::spawn(move || {
                for _ in 0..200 {
                    let domain = format!("host{}.example.co.uk", i);
                    assert_eq!(
                        list.registrable_domain(&domain, &opts).as_deref(),
                        Some("example.co.uk")
                    );
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("reader thread panicked");
    }
}
