//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (rejected
/// orders, malformed identifiers, missing records). Collaborator faults belong
/// to whoever implements the collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An order was rejected before placement.
    ///
    /// `reasons` is ordered and never empty.
    #[error("invalid order: {}", .reasons.join("; "))]
    InvalidOrder { reasons: Vec<String> },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested record was not found (domain-level).
    #[error("not found: {0}")]
    NotFound(String),

    /// Money arithmetic exceeded the decimal range.
    #[error("arithmetic overflow: {0}")]
    Overflow(String),
}

impl DomainError {
    /// Build an `InvalidOrder` error from any list of displayable reasons.
    pub fn invalid_order<I>(reasons: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        Self::InvalidOrder {
            reasons: reasons.into_iter().map(|r| r.to_string()).collect(),
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn overflow(what: impl Into<String>) -> Self {
        Self::Overflow(what.into())
    }

    /// Rejection reasons, if this is an `InvalidOrder` error.
    pub fn reasons(&self) -> Option<&[String]> {
        match self {
            Self::InvalidOrder { reasons } => Some(reasons),
            _ => None,
        }
    }
}
