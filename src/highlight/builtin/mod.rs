//! Builtin grammar definitions
//!
//! One grammar per supported language. The string, number and
//! operator rules are shared across all three so the languages cannot
//! drift apart on the token classes they have in common.
//!
//! Rule order inside each grammar is the priority order: strings,
//! comments, preprocessor directives, keywords, types, builtin
//! identifiers, numbers, operators.

mod python;
mod java;
mod cpp;

pub use python::python_grammar;
pub use java::java_grammar;
pub use cpp::cpp_grammar;

use crate::error::Result;

use super::rules::TokenRule;
use super::tokens::TokenClass;

/// Double- or single-quoted string literal, escape-aware.
///
/// Bounded to the current line, with the closing quote optional: an
/// unterminated literal is classified as a string up to end of line
/// instead of stalling the scanner or leaking into later lines.
pub(super) fn string_rule() -> Result<TokenRule> {
    TokenRule::new(
        "string",
        r#""(?:\\.|[^"\\\n])*"?|'(?:\\.|[^'\\\n])*'?"#,
        TokenClass::String,
    )
}

/// Integer or decimal literal
pub(super) fn number_rule() -> Result<TokenRule> {
    TokenRule::new("number", r"\b\d+(?:\.\d+)?\b", TokenClass::Number)
}

/// Operator run
pub(super) fn operator_rule() -> Result<TokenRule> {
    TokenRule::new("operator", r"[+\-*/%&|^!<>=~?:]+", TokenClass::Operator)
}

/// `//` line comment or `/* */` block comment.
///
/// The block form is non-greedy to its terminator; without one it
/// consumes to end of input, so an unterminated block comment is
/// still a single bounded token.
pub(super) fn c_family_comment_rule() -> Result<TokenRule> {
    TokenRule::new(
        "comment",
        r"//.*|/\*(?s:.*?\*/|.*)",
        TokenClass::Comment,
    )
}
