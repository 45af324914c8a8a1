//! Domain error model.

use thiserror::Error;

/// Result type used across the catalog domain.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Deterministic, business-level failures only (validation, malformed dates,
/// missing or duplicate records). Transport failures live in the client crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A string could not be read as a calendar date.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A requested product does not exist.
    #[error("not found")]
    NotFound,

    /// A product with the same identifier already exists.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_date(msg: impl Into<String>) -> Self {
        Self::InvalidDate(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
