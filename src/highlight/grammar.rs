//! Per-language grammars and the single-pass scanner
//!
//! A grammar combines its ordered rule list into one alternation
//! matcher at construction time. Each rule becomes a named branch, so
//! a match identifies its token class directly instead of going
//! through positional group indices. Scanning walks the text exactly
//! once: successive non-overlapping matches of the combined pattern
//! are consumed left to right, and text between matches falls through
//! to the implicit `Plain` class.

use std::fmt::Write as _;

use regex::Regex;

use crate::error::{CodepadError, Result};

use super::registry::LanguageId;
use super::rules::TokenRule;
use super::tokens::TokenClass;

/// A classified span of source text.
///
/// Fragments produced by a scan partition `[0, text.len())`: no gaps,
/// no overlaps, in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    /// Byte offset where this fragment starts (inclusive)
    pub start: usize,
    /// Byte offset where this fragment ends (exclusive)
    pub end: usize,
    /// Token class, `Plain` for text no rule matched
    pub class: TokenClass,
}

/// A compiled language grammar
pub struct Grammar {
    /// Language this grammar tokenizes
    language: LanguageId,
    /// Rules in declaration (priority) order
    rules: Vec<TokenRule>,
    /// Combined alternation matcher, one named branch per rule
    matcher: Regex,
    /// Branch group names, parallel to `rules`
    groups: Vec<String>,
}

impl Grammar {
    /// Compile a grammar from an ordered rule list.
    ///
    /// Earlier rules take precedence when several match at the same
    /// position; the combined matcher's branches preserve that order.
    pub fn new(language: LanguageId, rules: Vec<TokenRule>) -> Result<Self> {
        if rules.is_empty() {
            return Err(CodepadError::grammar(
                language.name(),
                "grammar has no rules",
            ));
        }

        let mut combined = String::new();
        let mut groups = Vec::with_capacity(rules.len());
        for (idx, rule) in rules.iter().enumerate() {
            if idx > 0 {
                combined.push('|');
            }
            let group = format!("r{}", idx);
            // Branch order encodes rule priority
            let _ = write!(combined, "(?P<{}>{})", group, rule.pattern);
            groups.push(group);
        }

        let matcher = Regex::new(&combined)
            .map_err(|e| CodepadError::grammar(language.name(), e.to_string()))?;

        Ok(Self {
            language,
            rules,
            matcher,
            groups,
        })
    }

    /// Language this grammar belongs to
    pub fn language(&self) -> LanguageId {
        self.language
    }

    /// Token classes this grammar's rules cover
    pub fn classes(&self) -> Vec<TokenClass> {
        self.rules.iter().map(|r| r.class).collect()
    }

    /// Rule names in priority order
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name.as_str()).collect()
    }

    /// Tokenize source text in a single left-to-right pass.
    ///
    /// Total over any input: unmatched characters fall through to
    /// `Plain`, matched spans are never re-entered, and the returned
    /// fragments partition the whole text. Empty input yields no
    /// fragments.
    pub fn tokenize(&self, text: &str) -> Vec<Fragment> {
        let mut fragments = Vec::new();
        let mut cursor = 0;

        for caps in self.matcher.captures_iter(text) {
            let (span, class) = match self.matched_branch(&caps) {
                Some(hit) => hit,
                None => continue,
            };

            if span.0 > cursor {
                fragments.push(Fragment {
                    start: cursor,
                    end: span.0,
                    class: TokenClass::Plain,
                });
            }

            fragments.push(Fragment {
                start: span.0,
                end: span.1,
                class,
            });
            cursor = span.1;
        }

        if cursor < text.len() {
            fragments.push(Fragment {
                start: cursor,
                end: text.len(),
                class: TokenClass::Plain,
            });
        }

        fragments
    }

    /// Find which rule branch produced a match
    fn matched_branch(&self, caps: &regex::Captures) -> Option<((usize, usize), TokenClass)> {
        for (group, rule) in self.groups.iter().zip(&self.rules) {
            if let Some(m) = caps.name(group) {
                return Some(((m.start(), m.end()), rule.class));
            }
        }
        None
    }
}
