// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("unique value already in use for {column}")]
    UniqueViolation { column: String },
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    /// Whether this error is a uniqueness violation on a slug column. The
    /// slug retry loop recovers from exactly this kind and nothing else.
    #[must_use]
    pub fn is_slug_conflict(&self) -> bool {
        matches!(self, Self::UniqueViolation { column } if column == "slug")
    }
}
