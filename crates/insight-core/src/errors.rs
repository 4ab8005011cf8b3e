//! Error types for insight narrowing.
//!
//! The predicate itself never fails; these errors only arise when a caller
//! asks for a typed [`Insight`](crate::Insight) from a value that does not
//! have the insight shape.

use thiserror::Error;

use crate::shape::ShapeViolation;

/// Errors raised by `insight-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The value does not have the insight shape.
    #[error("Invalid insight shape: {0}")]
    InvalidShape(#[from] ShapeViolation),
}

impl CoreError {
    /// The violated rule, for callers that report it.
    #[must_use]
    pub const fn violation(&self) -> &ShapeViolation {
        match self {
            Self::InvalidShape(violation) => violation,
        }
    }
}
