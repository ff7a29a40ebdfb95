//! Error types for apphelper

use thiserror::Error;

/// Result type alias for apphelper operations
pub type HelperResult<T> = Result<T, HelperError>;

/// Error types surfaced by the helper modules
#[derive(Debug, Error)]
pub enum HelperError {
    /// A model field failed a validation rule
    #[error("Validation error: {0}")]
    Validation(String),

    /// A rule string named a rule this crate does not implement
    #[error("unknown rule: {0}")]
    UnknownRule(String),

    /// A rule argument could not be parsed
    #[error("invalid argument for rule '{rule}': {message}")]
    RuleArgument { rule: String, message: String },

    /// Logging initialization error
    #[error("Logging error: {0}")]
    Logging(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl HelperError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a rule-argument error
    pub fn rule_argument(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RuleArgument {
            rule: rule.into(),
            message: message.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an unknown-rule error
    pub fn is_unknown_rule(&self) -> bool {
        matches!(self, Self::UnknownRule(_))
    }
}
