//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// malformed identifiers). Nothing here is recoverable by the entity that
/// raised it; construction is aborted and the error handed to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. blank currency, impossible tax rate).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier did not have the expected shape.
    ///
    /// Carries a description of what was expected and the rejected value as
    /// it was supplied.
    #[error("invalid identifier: expected {expected}, got {value:?}")]
    InvalidIdentifier { expected: String, value: String },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_identifier(expected: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            expected: expected.into(),
            value: value.into(),
        }
    }
}
