//! Error types for the domain layer
//!
//! The order flow itself never fails (stale or impossible orders degrade to
//! no-ops). Errors only surface while loading configuration and parsing
//! vocabulary values from strings.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., empty cursor name in a trait config)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for configuration rule violations.
    ///
    /// # Example
    /// ```ignore
    /// if self.voice.trim().is_empty() {
    ///     return Err(DomainError::validation("voice cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant or format.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = DomainError::validation("cursor cannot be empty");
        assert_eq!(err.to_string(), "Validation failed: cursor cannot be empty");

        let err = DomainError::parse("Unknown order kind: Attack");
        assert_eq!(err.to_string(), "Parse error: Unknown order kind: Attack");
    }
}
