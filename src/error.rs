//! Error types for codepad

use thiserror::Error;

/// Result type alias for codepad operations
pub type Result<T> = std::result::Result<T, CodepadError>;

/// Codepad error types
#[derive(Error, Debug)]
pub enum CodepadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("grammar rule '{rule}': {reason}")]
    Grammar { rule: String, reason: String },

    #[error("script store: {0}")]
    StoreFormat(String),

    #[error("no such script: {0}")]
    ScriptNotFound(String),

    #[error("execution backend: {0}")]
    Backend(String),

    #[error("{0}")]
    Message(String),
}

impl CodepadError {
    /// Convenience constructor for grammar registration failures
    pub fn grammar(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Grammar {
            rule: rule.into(),
            reason: reason.into(),
        }
    }
}
