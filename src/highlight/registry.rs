//! Grammar registry and language identifiers
//!
//! One registry owns the compiled grammar for every supported
//! language, built exactly once. All call sites share it; there is a
//! single rule set per language, never per-caller copies.

use crate::error::Result;

use super::builtin;
use super::grammar::Grammar;

/// Supported playground languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageId {
    Python,
    Java,
    Cpp,
}

impl LanguageId {
    /// Lowercase identifier, as used in configuration and the store
    pub fn name(&self) -> &'static str {
        match self {
            LanguageId::Python => "python",
            LanguageId::Java => "java",
            LanguageId::Cpp => "cpp",
        }
    }

    /// Canonical file extension, with leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            LanguageId::Python => ".py",
            LanguageId::Java => ".java",
            LanguageId::Cpp => ".cpp",
        }
    }

    /// Parse a language name.
    ///
    /// Unrecognized names fall back to Python. The callers that feed
    /// this only ever offer valid names, so the fallback is a policy
    /// default rather than an error path.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "python" | "py" => LanguageId::Python,
            "java" => LanguageId::Java,
            "cpp" | "c++" | "cxx" | "cc" => LanguageId::Cpp,
            _ => LanguageId::Python,
        }
    }

    /// Detect a language from a file extension (without dot)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "py" | "pyw" => Some(LanguageId::Python),
            "java" => Some(LanguageId::Java),
            "cpp" | "cc" | "cxx" | "hpp" | "hxx" | "h" | "c" => Some(LanguageId::Cpp),
            _ => None,
        }
    }

    /// Detect a language from a file or script name
    pub fn from_filename(name: &str) -> Option<Self> {
        let ext = name.rsplit_once('.')?.1;
        Self::from_extension(ext)
    }

    /// Next language in the mode-switch cycle (python, java, cpp)
    pub fn cycle(&self) -> Self {
        match self {
            LanguageId::Python => LanguageId::Java,
            LanguageId::Java => LanguageId::Cpp,
            LanguageId::Cpp => LanguageId::Python,
        }
    }
}

/// Registry of compiled grammars, one per supported language
pub struct GrammarRegistry {
    python: Grammar,
    java: Grammar,
    cpp: Grammar,
}

impl GrammarRegistry {
    /// Compile all builtin grammars.
    ///
    /// The only failure mode is a defective builtin rule, caught here
    /// once at startup rather than during scanning.
    pub fn new() -> Result<Self> {
        Ok(Self {
            python: builtin::python_grammar()?,
            java: builtin::java_grammar()?,
            cpp: builtin::cpp_grammar()?,
        })
    }

    /// Get the grammar for a language. Total: every id has a grammar.
    pub fn get(&self, language: LanguageId) -> &Grammar {
        match language {
            LanguageId::Python => &self.python,
            LanguageId::Java => &self.java,
            LanguageId::Cpp => &self.cpp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::TokenClass;

    #[test]
    fn test_registry_builds() {
        let registry = GrammarRegistry::new().unwrap();
        assert_eq!(registry.get(LanguageId::Python).language(), LanguageId::Python);
        assert_eq!(registry.get(LanguageId::Java).language(), LanguageId::Java);
        assert_eq!(registry.get(LanguageId::Cpp).language(), LanguageId::Cpp);
    }

    #[test]
    fn test_one_rule_per_class() {
        // Within a grammar each supported class is covered by exactly
        // one rule; overlap is resolved by declaration order alone.
        let registry = GrammarRegistry::new().unwrap();
        for lang in [LanguageId::Python, LanguageId::Java, LanguageId::Cpp] {
            let classes = registry.get(lang).classes();
            for (i, a) in classes.iter().enumerate() {
                for b in classes.iter().skip(i + 1) {
                    assert_ne!(a, b, "{}: duplicate rule for {}", lang.name(), a.name());
                }
            }
            assert!(!classes.contains(&TokenClass::Plain));
        }
    }

    #[test]
    fn test_rule_priority_order() {
        // Strings outrank comments outrank word classes outrank
        // numbers and operators, in every grammar
        let registry = GrammarRegistry::new().unwrap();
        for lang in [LanguageId::Python, LanguageId::Java, LanguageId::Cpp] {
            let names = registry.get(lang).rule_names();
            assert_eq!(names[0], "string", "{}", lang.name());
            assert_eq!(names[1], "comment", "{}", lang.name());
            assert_eq!(*names.last().unwrap(), "operator", "{}", lang.name());
        }
    }

    #[test]
    fn test_from_name_fallback() {
        assert_eq!(LanguageId::from_name("java"), LanguageId::Java);
        assert_eq!(LanguageId::from_name("C++"), LanguageId::Cpp);
        // Unknown names default to Python by policy
        assert_eq!(LanguageId::from_name("fortran"), LanguageId::Python);
        assert_eq!(LanguageId::from_name(""), LanguageId::Python);
    }

    #[test]
    fn test_detect_from_filename() {
        assert_eq!(LanguageId::from_filename("main.py"), Some(LanguageId::Python));
        assert_eq!(LanguageId::from_filename("Main.java"), Some(LanguageId::Java));
        assert_eq!(LanguageId::from_filename("a.b.cpp"), Some(LanguageId::Cpp));
        assert_eq!(LanguageId::from_filename("no_extension"), None);
        assert_eq!(LanguageId::from_filename("notes.txt"), None);
    }

    #[test]
    fn test_cycle_order() {
        assert_eq!(LanguageId::Python.cycle(), LanguageId::Java);
        assert_eq!(LanguageId::Java.cycle(), LanguageId::Cpp);
        assert_eq!(LanguageId::Cpp.cycle(), LanguageId::Python);
    }
}
