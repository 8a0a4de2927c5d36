//! The transliteration engine: a compiled rule list in application order.
//!
//! Compilation is the validation boundary. An invalid regex rule rejects
//! the whole list (identified by index) and the caller keeps whatever
//! engine it was using before; a compiled engine never fails to apply.

use tracing::debug;

use crate::config::Config;
use crate::rules::{CompiledRule, RuleError};
use crate::unicode::{is_convertible, is_word_char};

/// Compiled engine. Immutable, `Send + Sync`, cheap to rebuild whenever
/// the host's configuration changes.
#[derive(Debug)]
pub struct Transliterator {
    rules: Vec<CompiledRule>,
}

#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("rule {index}: {source}")]
    Rule {
        index: usize,
        #[source]
        source: RuleError,
    },
}

impl Transliterator {
    /// Compile `config.rules` into an engine.
    ///
    /// Rules with an empty `from` are dropped. With
    /// `apply_rules_in_order` off, the compiled list is stably sorted
    /// longest-pattern-first, so "sh" always wins over "s" no matter where
    /// the user put it.
    pub fn compile(config: &Config) -> Result<Self, CompileError> {
        let mut rules = Vec::with_capacity(config.rules.len());
        for (index, rule) in config.rules.iter().enumerate() {
            match CompiledRule::compile(rule) {
                Ok(Some(compiled)) => rules.push(compiled),
                Ok(None) => {}
                Err(source) => return Err(CompileError::Rule { index, source }),
            }
        }
        if !config.apply_rules_in_order {
            rules.sort_by_key(|r| std::cmp::Reverse(r.from_len));
        }
        debug!(
            rules = rules.len(),
            in_order = config.apply_rules_in_order,
            "compiled rule set"
        );
        Ok(Self { rules })
    }

    /// Number of compiled rules (empty-`from` rules are not counted).
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Convert one word.
    ///
    /// Input without any ASCII letter or digit is returned unchanged, so
    /// Arabic text, punctuation, and symbols pass through. Otherwise every
    /// rule is applied in turn to an accumulator: rule N sees the output
    /// of rule N−1, so a rule emitting text a later rule matches will be
    /// re-processed.
    pub fn transliterate_word(&self, word: &str) -> String {
        if !is_convertible(word) {
            return word.to_string();
        }
        let mut out = word.to_string();
        for rule in &self.rules {
            out = rule.apply(&out);
        }
        out
    }

    /// Convert a block of text word-by-word.
    ///
    /// Maximal `[A-Za-z0-9'_-]+` runs are converted independently;
    /// separator runs (spaces, punctuation, existing Arabic) are copied
    /// through at their original positions.
    pub fn transliterate_text(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        while let Some(first) = rest.chars().next() {
            let in_word = is_word_char(first);
            let len = rest
                .char_indices()
                .find(|&(_, c)| is_word_char(c) != in_word)
                .map(|(i, _)| i)
                .unwrap_or(rest.len());
            let (run, tail) = rest.split_at(len);
            if in_word {
                out.push_str(&self.transliterate_word(run));
            } else {
                out.push_str(run);
            }
            rest = tail;
        }
        out
    }
}

/// One-shot form of [`Transliterator::transliterate_word`]: compiles
/// `config` on every call. Hosts converting per keystroke should hold a
/// compiled [`Transliterator`] instead.
pub fn transliterate_word(word: &str, config: &Config) -> Result<String, CompileError> {
    Ok(Transliterator::compile(config)?.transliterate_word(word))
}

/// One-shot form of [`Transliterator::transliterate_text`].
pub fn transliterate_text(text: &str, config: &Config) -> Result<String, CompileError> {
    Ok(Transliterator::compile(config)?.transliterate_text(text))
}
