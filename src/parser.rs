use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

use crate::error::{ParseErrorKind, PslError, Result};
use crate::types::{RuleKind, RuleType, TextRule};

/// Regex pattern for section markers
/// Format: // ===BEGIN ICANN DOMAINS===
static SECTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^//\s*===\s*(BEGIN|END)\s+(ICANN|PRIVATE)\s+DOMAINS\s*===")
        .expect("SECTION_PATTERN: hardcoded regex is invalid")
});

/// Parse suffix list rules from text.
///
/// Rules outside any section marker are treated as ICANN rules.
pub fn parse_rules(text: &str) -> Result<Vec<TextRule>> {
    let mut rules = Vec::new();
    let mut kind = RuleKind::Icann;

    for (line_num, line) in text.lines().enumerate() {
        let line_num = line_num + 1; // 1-based line numbers
        let line = line.trim();

        if let Some(captures) = SECTION_PATTERN.captures(line) {
            kind = match (&captures[1], &captures[2]) {
                ("BEGIN", "PRIVATE") => RuleKind::Private,
                _ => RuleKind::Icann,
            };
            continue;
        }

        // Remove comments
        let line = match line.find("//") {
            Some(comment_pos) => &line[..comment_pos],
            None => line,
        };

        // Only the first token of a line is the rule
        let Some(token) = line.split_whitespace().next() else {
            continue;
        };

        match parse_token(token) {
            Ok(Some((labels, rule_type))) => rules.push(TextRule {
                labels,
                rule_type,
                kind,
                line_num,
            }),
            Ok(None) => {
                log::warn!(
                    "line {}: skipping rule with non-leftmost wildcard: {}",
                    line_num,
                    token
                );
            }
            Err((err_kind, message)) => {
                return Err(PslError::ParseErrorAtLine {
                    line: line_num,
                    kind: err_kind,
                    message,
                });
            }
        }
    }

    Ok(rules)
}

/// Parse suffix list rules from a file.
pub fn parse_rules_from_file(path: impl AsRef<Path>) -> Result<Vec<TextRule>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        PslError::ParseError(format!(
            "Failed to read suffix list '{}': {}",
            path.display(),
            e
        ))
    })?;
    parse_rules(&text)
}

/// Parse a single rule such as "co.uk", "*.ck" or "!www.ck".
pub fn parse_rule(rule: &str, kind: RuleKind) -> Result<TextRule> {
    let rule = rule.trim();
    match parse_token(rule) {
        Ok(Some((labels, rule_type))) => Ok(TextRule {
            labels,
            rule_type,
            kind,
            line_num: 0,
        }),
        Ok(None) => Err(PslError::InvalidRule(format!(
            "Wildcard is only supported as the leftmost label: {}",
            rule
        ))),
        Err((_, message)) => Err(PslError::InvalidRule(message)),
    }
}

/// Split a rule token into labels and classify it.
/// Returns `Ok(None)` for wildcards outside the leftmost position.
fn parse_token(
    token: &str,
) -> std::result::Result<Option<(Vec<String>, RuleType)>, (ParseErrorKind, String)> {
    let token = token.to_lowercase();

    let (body, exception) = match token.strip_prefix('!') {
        Some(rest) => (rest, true),
        None => (token.as_str(), false),
    };

    if exception && body.is_empty() {
        return Err((
            ParseErrorKind::BadException,
            format!("Bare exception marker: {}", token),
        ));
    }

    let labels: Vec<String> = body.split('.').map(str::to_string).collect();
    if labels.iter().any(String::is_empty) {
        return Err((
            ParseErrorKind::EmptyLabel,
            format!("Empty label in rule: {}", token),
        ));
    }

    if exception {
        if labels.iter().any(|l| l == "*") {
            return Err((
                ParseErrorKind::MisplacedWildcard,
                format!("Exception rule cannot contain a wildcard: {}", token),
            ));
        }
        if labels.len() < 2 {
            return Err((
                ParseErrorKind::BadException,
                format!("Exception rule needs at least two labels: {}", token),
            ));
        }
        return Ok(Some((labels, RuleType::Exception)));
    }

    if labels.iter().skip(1).any(|l| l == "*") {
        return Ok(None);
    }

    let rule_type = if labels[0] == "*" {
        RuleType::Wildcard
    } else {
        RuleType::Exact
    };
    Ok(Some((labels, rule_type)))
}
