//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// unknown enum keys, lookups). Transport concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A category key outside the fixed enumerated set.
    #[error("invalid category kind: {0}")]
    InvalidCategoryKind(String),

    /// A country code outside the fixed directory.
    #[error("unknown country: {0}")]
    UnknownCountry(String),

    /// A requested resource was not found (domain-level).
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_category(key: impl Into<String>) -> Self {
        Self::InvalidCategoryKind(key.into())
    }

    pub fn unknown_country(code: impl Into<String>) -> Self {
        Self::UnknownCountry(code.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
