//! Substitution rules: the JSON-facing `Rule` type and its compiled form.
//!
//! A rule is either a literal mapping ("sh" → "ش"), matched
//! case-insensitively with every regex metacharacter escaped, or a raw
//! regex with JS-style flags. Rules compile once at the configuration
//! boundary; applying a compiled rule never fails.

use fancy_regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A single from→to substitution rule.
///
/// Serialized field names follow the persisted JSON shape (`isRegex`,
/// `flags`). `is_regex` defaults to false and `flags` to `"g"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub is_regex: bool,
    #[serde(default = "default_flags")]
    pub flags: String,
}

fn default_flags() -> String {
    "g".to_string()
}

impl Rule {
    /// Literal case-insensitive mapping, the common case.
    pub fn literal(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            is_regex: false,
            flags: default_flags(),
        }
    }

    /// Regex rule with the given JS-style flags (e.g. `"g"`, `"gi"`).
    pub fn regex(from: &str, to: &str, flags: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            is_regex: true,
            flags: flags.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// A rule compiled to a ready-to-apply regex.
#[derive(Debug)]
pub(crate) struct CompiledRule {
    regex: Regex,
    to: String,
    /// Literal rules insert `to` verbatim; regex rules expand `$n` references.
    literal: bool,
    /// JS `g` flag: replace every occurrence vs the first only.
    global: bool,
    /// Source pattern length in chars, used by length-priority ordering.
    pub(crate) from_len: usize,
}

impl CompiledRule {
    /// Compile one rule. An empty `from` yields `Ok(None)`: the rule is
    /// inert, not an error.
    pub(crate) fn compile(rule: &Rule) -> Result<Option<Self>, RuleError> {
        if rule.from.is_empty() {
            debug!("skipping rule with empty `from`");
            return Ok(None);
        }

        let (pattern, global) = if rule.is_regex {
            let (inline, global) = inline_flags(&rule.from, &rule.flags)?;
            (format!("{inline}{}", rule.from), global)
        } else {
            // Case-insensitive match on the escaped literal text.
            (format!("(?i){}", fancy_regex::escape(&rule.from)), true)
        };

        let regex = Regex::new(&pattern).map_err(|e| RuleError::InvalidPattern {
            pattern: rule.from.clone(),
            reason: e.to_string(),
        })?;

        Ok(Some(Self {
            regex,
            to: rule.to.clone(),
            literal: !rule.is_regex,
            global,
            from_len: rule.from.chars().count(),
        }))
    }

    /// Apply this rule to `input`, returning the rewritten string.
    ///
    /// A runtime match failure (backtrack limit) leaves the remainder of
    /// the input untouched for this rule; later rules still run.
    pub(crate) fn apply(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut last = 0;
        for caps in self.regex.captures_iter(input) {
            let caps = match caps {
                Ok(caps) => caps,
                Err(err) => {
                    warn!(pattern = self.regex.as_str(), %err, "match failed mid-input");
                    break;
                }
            };
            let Some(m) = caps.get(0) else { break };
            out.push_str(&input[last..m.start()]);
            if self.literal {
                out.push_str(&self.to);
            } else {
                caps.expand(&self.to, &mut out);
            }
            last = m.end();
            if !self.global {
                break;
            }
        }
        out.push_str(&input[last..]);
        out
    }
}

/// Translate a JS-style flag string into an inline `(?...)` prefix plus the
/// global bit. Patterns are always Unicode, so `u` is accepted and ignored;
/// anything outside `gimsu` is an error, as it would be for the host's own
/// regex engine.
fn inline_flags(pattern: &str, flags: &str) -> Result<(String, bool), RuleError> {
    let mut global = false;
    let mut inline = String::new();
    for flag in flags.chars() {
        match flag {
            'g' => global = true,
            'i' | 'm' | 's' => {
                if !inline.contains(flag) {
                    inline.push(flag);
                }
            }
            'u' => {}
            other => {
                return Err(RuleError::InvalidPattern {
                    pattern: pattern.to_string(),
                    reason: format!("unsupported flag `{other}`"),
                })
            }
        }
    }
    if inline.is_empty() {
        Ok((String::new(), global))
    } else {
        Ok((format!("(?{inline})"), global))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compiled(rule: Rule) -> CompiledRule {
        CompiledRule::compile(&rule)
            .expect("rule compiles")
            .expect("rule is not empty")
    }

    #[test]
    fn test_literal_basic() {
        let r = compiled(Rule::literal("sh", "ش"));
        assert_eq!(r.apply("shams"), "شams");
    }

    #[test]
    fn test_literal_case_insensitive() {
        let r = compiled(Rule::literal("sh", "ش"));
        assert_eq!(r.apply("SH"), "ش");
        assert_eq!(r.apply("Sh"), "ش");
    }

    #[test]
    fn test_literal_replaces_all_occurrences() {
        let r = compiled(Rule::literal("a", "ا"));
        assert_eq!(r.apply("banana"), "bاnاnا");
    }

    #[test]
    fn test_literal_metachars_escaped() {
        let r = compiled(Rule::literal("a.b", "X"));
        assert_eq!(r.apply("a.b"), "X");
        assert_eq!(r.apply("axb"), "axb");

        let r = compiled(Rule::literal("c++", "CPP"));
        assert_eq!(r.apply("c++ code"), "CPP code");
    }

    #[test]
    fn test_literal_replacement_is_verbatim() {
        // No capture expansion for literal rules: "$1" is two characters.
        let r = compiled(Rule::literal("x", "$1"));
        assert_eq!(r.apply("x"), "$1");
    }

    #[test]
    fn test_empty_from_is_inert() {
        let r = CompiledRule::compile(&Rule::literal("", "ش")).unwrap();
        assert!(r.is_none());
    }

    #[test]
    fn test_regex_backreference() {
        let r = compiled(Rule::regex("(\\d)\\1", "DOUBLE", "g"));
        assert_eq!(r.apply("aa11"), "aaDOUBLE");
    }

    #[test]
    fn test_regex_capture_expansion() {
        let r = compiled(Rule::regex("([aeiou])", "$1$1", "g"));
        assert_eq!(r.apply("ab"), "aab");
    }

    #[test]
    fn test_regex_non_global_replaces_first_only() {
        let r = compiled(Rule::regex("a", "X", ""));
        assert_eq!(r.apply("aaa"), "Xaa");
    }

    #[test]
    fn test_regex_case_sensitive_without_i() {
        let r = compiled(Rule::regex("a", "X", "g"));
        assert_eq!(r.apply("aA"), "XA");
    }

    #[test]
    fn test_regex_i_flag() {
        let r = compiled(Rule::regex("a", "X", "gi"));
        assert_eq!(r.apply("aA"), "XX");
    }

    #[test]
    fn test_invalid_regex_is_error() {
        let err = CompiledRule::compile(&Rule::regex("(", "X", "g")).unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern { .. }));
        assert!(err.to_string().contains("("));
    }

    #[test]
    fn test_unsupported_flag_is_error() {
        let err = CompiledRule::compile(&Rule::regex("a", "X", "gy")).unwrap_err();
        assert!(err.to_string().contains("unsupported flag"));
    }

    #[test]
    fn test_rule_serde_defaults() {
        let rule: Rule = serde_json::from_str(r#"{"from":"sh","to":"ش"}"#).unwrap();
        assert!(!rule.is_regex);
        assert_eq!(rule.flags, "g");
        assert_eq!(rule, Rule::literal("sh", "ش"));
    }

    #[test]
    fn test_rule_serde_camel_case() {
        let rule: Rule =
            serde_json::from_str(r#"{"from":"(\\d)\\1","to":"D","isRegex":true,"flags":"g"}"#)
                .unwrap();
        assert!(rule.is_regex);

        let json = serde_json::to_string(&rule).unwrap();
        assert!(json.contains("isRegex"));
    }
}
