use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::enums::{INSIGHT_TRACK, InsightKind};
use crate::errors::CoreError;
use crate::shape;

/// A tracked event: kind tag, event name, and arbitrary payload.
///
/// Build one from untrusted input with [`Insight::from_value`] (or
/// `Insight::try_from`), which applies the shape predicate first and reports
/// the violated rule on failure.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Insight {
    /// Kind tag, serialized as `type`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Name of the event.
    pub event: String,

    /// Event payload. Any JSON value, including `null`.
    pub data: Value,
}

impl Insight {
    pub fn new(kind: impl Into<String>, event: impl Into<String>, data: Value) -> Self {
        Self {
            kind: kind.into(),
            event: event.into(),
            data,
        }
    }

    /// A `track` insight.
    pub fn track(event: impl Into<String>, data: Value) -> Self {
        Self::new(INSIGHT_TRACK, event, data)
    }

    /// Narrow an arbitrary JSON value into an `Insight`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidShape` with the first violated rule.
    pub fn from_value(value: &Value) -> Result<Self, CoreError> {
        let fields = shape::fields(value)?;
        Ok(Self::new(fields.kind, fields.event, fields.data.clone()))
    }

    /// The known kind for this insight's tag, if any.
    #[must_use]
    pub fn kind_tag(&self) -> Option<InsightKind> {
        InsightKind::from_tag(&self.kind)
    }

    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut object = Map::new();
        object.insert(shape::KIND_FIELD.to_owned(), Value::String(self.kind.clone()));
        object.insert(shape::EVENT_FIELD.to_owned(), Value::String(self.event.clone()));
        object.insert(shape::DATA_FIELD.to_owned(), self.data.clone());
        Value::Object(object)
    }
}

impl TryFrom<Value> for Insight {
    type Error = CoreError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

impl TryFrom<&Value> for Insight {
    type Error = CoreError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<Insight> for Value {
    fn from(insight: Insight) -> Self {
        insight.to_value()
    }
}
