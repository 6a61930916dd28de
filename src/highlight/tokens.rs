//! Token classes for syntax highlighting
//!
//! This module defines the semantic token classes that can be
//! recognized in source code and their css class hooks.

/// Semantic token classes for syntax highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// String and character literals
    String,
    /// Line and block comments
    Comment,
    /// Preprocessor directives (#include, #define)
    Preprocessor,
    /// Language keywords (if, def, class, return, etc.)
    Keyword,
    /// Built-in type names (int, String, boolean, etc.)
    Type,
    /// Standard-library functions and call patterns (print, cout, Math.*)
    Builtin,
    /// Numeric literals
    Number,
    /// Operators (+, -, <, &&, etc.)
    Operator,
    /// Unclassified text; never carried by a rule, only by gap fragments
    Plain,
}

impl TokenClass {
    /// Get the css class used when wrapping a token of this class.
    ///
    /// `Plain` fragments are emitted as bare text and have no class.
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            TokenClass::String => Some("hl-string"),
            TokenClass::Comment => Some("hl-comment"),
            TokenClass::Preprocessor => Some("hl-preproc"),
            TokenClass::Keyword => Some("hl-keyword"),
            TokenClass::Type => Some("hl-type"),
            TokenClass::Builtin => Some("hl-func"),
            TokenClass::Number => Some("hl-number"),
            TokenClass::Operator => Some("hl-operator"),
            TokenClass::Plain => None,
        }
    }

    /// Get a human-readable name for this token class
    pub fn name(&self) -> &'static str {
        match self {
            TokenClass::String => "String",
            TokenClass::Comment => "Comment",
            TokenClass::Preprocessor => "Preprocessor",
            TokenClass::Keyword => "Keyword",
            TokenClass::Type => "Type",
            TokenClass::Builtin => "Builtin",
            TokenClass::Number => "Number",
            TokenClass::Operator => "Operator",
            TokenClass::Plain => "Plain",
        }
    }
}
