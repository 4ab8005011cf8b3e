//! # insight-schema
//!
//! JSON Schemas for insight types, generated with `schemars` and checked
//! with `jsonschema`.
//!
//! Schemas are generated from the `insight-core` types and compiled once when
//! the [`SchemaRegistry`] is built. They describe the typed record for
//! external tooling (`insight schema`); the shape predicate in `insight-core`
//! remains the authority on what an insight is, and
//! [`SchemaRegistry::validate_insight`] applies both.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::{INSIGHT_SCHEMA, SchemaRegistry};
