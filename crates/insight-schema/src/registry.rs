use std::collections::BTreeMap;

use insight_core::{CheckReport, Insight, InsightKind, ShapeMode};
use jsonschema::Validator;
use schemars::{JsonSchema, schema_for};
use serde_json::Value;

use crate::error::SchemaError;

/// Registry name of the [`Insight`] record schema.
pub const INSIGHT_SCHEMA: &str = "insight";

struct Entry {
    schema: Value,
    validator: Validator,
}

/// Compiled schemas for the insight types, keyed by name.
pub struct SchemaRegistry {
    entries: BTreeMap<&'static str, Entry>,
}

impl SchemaRegistry {
    /// Generate and compile the schemas for `insight`, `insight_kind`,
    /// `shape_mode`, and `check_report`.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Compile` if a generated schema is rejected by
    /// the validator.
    pub fn new() -> Result<Self, SchemaError> {
        let mut registry = Self {
            entries: BTreeMap::new(),
        };
        registry.register::<Insight>(INSIGHT_SCHEMA)?;
        registry.register::<InsightKind>("insight_kind")?;
        registry.register::<ShapeMode>("shape_mode")?;
        registry.register::<CheckReport>("check_report")?;

        tracing::debug!(schemas = ?registry.list(), "schema registry built");
        Ok(registry)
    }

    fn register<T: JsonSchema>(&mut self, name: &'static str) -> Result<(), SchemaError> {
        let schema = schema_for!(T).to_value();
        let validator = jsonschema::validator_for(&schema).map_err(|error| SchemaError::Compile {
            schema: name,
            reason: error.to_string(),
        })?;
        self.entries.insert(name, Entry { schema, validator });
        Ok(())
    }

    fn entry(&self, name: &str) -> Result<(&'static str, &Entry), SchemaError> {
        self.entries
            .get_key_value(name)
            .map(|(key, entry)| (*key, entry))
            .ok_or_else(|| SchemaError::NotFound {
                name: name.to_string(),
                available: self.list(),
            })
    }

    /// The JSON Schema registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` naming the registered schemas.
    pub fn schema(&self, name: &str) -> Result<&Value, SchemaError> {
        self.entry(name).map(|(_, entry)| &entry.schema)
    }

    /// Registered schema names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        self.entries.keys().copied().collect()
    }

    /// Check `instance` against the schema registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` for an unknown name, or
    /// `SchemaError::Mismatch` with every validator message.
    pub fn validate(&self, name: &str, instance: &Value) -> Result<(), SchemaError> {
        let (schema, entry) = self.entry(name)?;
        let errors: Vec<String> = entry
            .validator
            .iter_errors(instance)
            .map(|error| error.to_string())
            .collect();

        if errors.is_empty() {
            return Ok(());
        }
        tracing::debug!(schema, errors = errors.len(), "schema mismatch");
        Err(SchemaError::Mismatch { schema, errors })
    }

    /// Apply the shape predicate, then the `insight` schema, and return the
    /// typed record.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Shape` with the first violated shape rule, or
    /// `SchemaError::Mismatch` if the schema disagrees.
    pub fn validate_insight(&self, instance: &Value) -> Result<Insight, SchemaError> {
        let insight = Insight::from_value(instance)?;
        self.validate(INSIGHT_SCHEMA, instance)?;
        Ok(insight)
    }
}
