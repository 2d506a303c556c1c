//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// uniqueness, missing records). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (malformed input, missing field, non-positive id).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An event with the same `(user_id, id)` already exists.
    #[error("duplicate event: {0}")]
    Duplicate(String),

    /// The update/delete target does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A range query was issued for a user with no recorded events.
    #[error("unknown user: {0}")]
    UnknownUser(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::Duplicate(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn unknown_user(msg: impl Into<String>) -> Self {
        Self::UnknownUser(msg.into())
    }

    /// Whether this error stems from bad caller input rather than a business rule.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
