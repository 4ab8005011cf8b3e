//! Registry error types.

use insight_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// No schema is registered under the requested name.
    #[error("unknown schema '{name}' (available: {})", .available.join(", "))]
    NotFound {
        name: String,
        available: Vec<&'static str>,
    },

    /// The value does not satisfy the named schema.
    #[error("value does not match schema '{schema}': {}", .errors.join("; "))]
    Mismatch {
        schema: &'static str,
        errors: Vec<String>,
    },

    /// The value is not an insight according to the shape predicate.
    #[error(transparent)]
    Shape(#[from] CoreError),

    /// A generated schema failed to compile.
    #[error("schema '{schema}' failed to compile: {reason}")]
    Compile {
        schema: &'static str,
        reason: String,
    },
}
