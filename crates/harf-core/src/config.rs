//! Engine configuration: the JSON document the host persists and hands to
//! the core on every call.
//!
//! Shape: `{ enabled, convertOnSpace, applyRulesInOrder, rules: [...] }`.
//! The default table is embedded at build time via `include_str!`. The
//! core only ever reads a `Config`; loading, editing, and saving it back
//! is the host's job.

use serde::{Deserialize, Serialize};

use crate::rules::Rule;

pub const DEFAULT_CONFIG_JSON: &str = include_str!("default_config.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Master toggle: when off, the auto-convert trigger produces no edits.
    pub enabled: bool,
    /// Convert the previous word when a space or newline is typed.
    pub convert_on_space: bool,
    /// Apply rules strictly top-to-bottom. When off, rules are tried
    /// longest-pattern-first regardless of list position.
    pub apply_rules_in_order: bool,
    pub rules: Vec<Rule>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    Parse(String),
}

impl Config {
    /// Parse a configuration document. Rejects anything that is not the
    /// expected shape: rules must be a sequence, each entry must carry
    /// string `from` and `to`.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize to pretty JSON, the same shape `from_json_str` accepts.
    pub fn to_json_string(&self) -> String {
        serde_json::to_string_pretty(self).expect("config serializes to JSON")
    }

    /// Returns the embedded default configuration JSON.
    pub fn default_json() -> &'static str {
        DEFAULT_CONFIG_JSON
    }
}

impl Default for Config {
    /// The embedded default table: digraphs, then Arabizi digits, then
    /// single letters, applied in order.
    fn default() -> Self {
        Self::from_json_str(DEFAULT_CONFIG_JSON).expect("embedded default config must be valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_json() {
        let config = Config::default();
        assert!(config.enabled);
        assert!(config.convert_on_space);
        assert!(config.apply_rules_in_order);
        assert_eq!(config.rules.len(), 31);
        // Digraphs come before the single letters they would collide with.
        assert_eq!(config.rules[0], Rule::literal("sh", "ش"));
        let s_pos = config.rules.iter().position(|r| r.from == "s").unwrap();
        assert!(s_pos > 0);
    }

    #[test]
    fn default_rules_emit_arabic() {
        let config = Config::default();
        for rule in &config.rules {
            assert!(
                rule.to.chars().all(crate::unicode::is_arabic),
                "rule {} emits non-Arabic output {}",
                rule.from,
                rule.to
            );
        }
    }

    #[test]
    fn round_trip_preserves_rules() {
        let config = Config::default();
        let json = config.to_json_string();
        let back = Config::from_json_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn round_trip_preserves_regex_rule() {
        let config = Config {
            enabled: true,
            convert_on_space: false,
            apply_rules_in_order: false,
            rules: vec![
                Rule::regex("(\\d)\\1", "DOUBLE", "g"),
                Rule::literal("sh", "ش"),
            ],
        };
        let back = Config::from_json_str(&config.to_json_string()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn error_invalid_json() {
        let err = Config::from_json_str("not json {{{").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn error_rules_not_a_sequence() {
        let err = Config::from_json_str(
            r#"{"enabled":true,"convertOnSpace":true,"applyRulesInOrder":true,"rules":{}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn error_rule_missing_to() {
        let err = Config::from_json_str(
            r#"{"enabled":true,"convertOnSpace":true,"applyRulesInOrder":true,"rules":[{"from":"a"}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("to"));
    }
}
