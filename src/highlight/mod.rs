//! Syntax highlighting subsystem
//!
//! This module turns raw source text into a classified fragment stream:
//! - Token classes and their css hooks
//! - Pattern rules with registration-time validation
//! - Per-language grammars compiled into a single-pass scanner
//! - A registry mapping language identifiers to grammars

mod tokens;
mod rules;
mod grammar;
mod registry;
mod builtin;

pub use tokens::TokenClass;
pub use rules::TokenRule;
pub use grammar::{Fragment, Grammar};
pub use registry::{GrammarRegistry, LanguageId};
