//! Pattern rules for syntax highlighting
//!
//! This module defines the rule type used to match and classify
//! source code tokens. Rules carry no numeric priority: their
//! declaration order within a grammar decides which rule wins when
//! several could match at the same position.

use regex::Regex;

use crate::error::{CodepadError, Result};

use super::tokens::TokenClass;

/// A single pattern rule: a regex source paired with a token class.
///
/// Construction validates the pattern. A rule whose pattern can match
/// the empty string would stall the scanner, so it is rejected here,
/// at registration time, rather than handled during scanning.
#[derive(Debug)]
pub struct TokenRule {
    /// Name for diagnostics
    pub name: String,
    /// Regex source, compiled into the grammar's combined matcher
    pub pattern: String,
    /// Token class assigned to matches
    pub class: TokenClass,
}

impl TokenRule {
    /// Create a new rule, validating the pattern.
    ///
    /// Fails if the pattern does not compile, or if it can match the
    /// empty string (every rule must consume at least one character).
    pub fn new(name: &str, pattern: &str, class: TokenClass) -> Result<Self> {
        let compiled = Regex::new(pattern)
            .map_err(|e| CodepadError::grammar(name, e.to_string()))?;

        if compiled.is_match("") {
            return Err(CodepadError::grammar(
                name,
                "pattern can match the empty string",
            ));
        }

        if class == TokenClass::Plain {
            return Err(CodepadError::grammar(
                name,
                "Plain is reserved for unmatched text",
            ));
        }

        Ok(Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
            class,
        })
    }
}
