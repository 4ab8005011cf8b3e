//! Runtime shape predicate for insight values.
//!
//! A value is an insight when it is a JSON object whose `type` is a string,
//! whose `event` is a string, and which carries a `data` key. `data` may hold
//! any JSON value, including `null` and empty structures; only its absence is
//! rejected. Keys other than these three are ignored.
//!
//! Rules are checked in order (object, `type`, `event`, `data`) and
//! [`inspect`] reports the first one that fails.

use serde_json::{Map, Value};
use thiserror::Error;

/// Field holding the kind tag.
pub const KIND_FIELD: &str = "type";
/// Field holding the event name.
pub const EVENT_FIELD: &str = "event";
/// Field holding the payload.
pub const DATA_FIELD: &str = "data";

/// The first insight rule a value failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShapeViolation {
    #[error("expected an object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("field `type` must be a string, found {found}")]
    KindNotString { found: &'static str },

    #[error("field `event` must be a string, found {found}")]
    EventNotString { found: &'static str },

    #[error("field `data` is missing")]
    DataMissing,

    /// `type` is a string but not one of the allowed tags.
    #[error("insight kind `{kind}` is not allowed")]
    UnknownKind { kind: String },

    /// A closed-shape check found a key outside `type`, `event`, and `data`.
    #[error("unexpected field `{field}`")]
    UnexpectedField { field: String },
}

impl ShapeViolation {
    /// Stable identifier for the violated rule.
    #[must_use]
    pub const fn rule(&self) -> &'static str {
        match self {
            Self::NotAnObject { .. } => "not_an_object",
            Self::KindNotString { .. } => "kind_not_string",
            Self::EventNotString { .. } => "event_not_string",
            Self::DataMissing => "data_missing",
            Self::UnknownKind { .. } => "unknown_kind",
            Self::UnexpectedField { .. } => "unexpected_field",
        }
    }
}

/// Borrowed view of a value that passed the base rules.
#[derive(Debug, Clone, Copy)]
pub(crate) struct InsightFields<'a> {
    pub kind: &'a str,
    pub event: &'a str,
    pub data: &'a Value,
    pub object: &'a Map<String, Value>,
}

/// Returns `true` if `value` has the insight shape.
///
/// Total over every JSON value: never panics and never errors.
#[must_use]
pub fn is_insight(value: &Value) -> bool {
    fields(value).is_ok()
}

/// Check `value` against the insight rules and report the first failure.
///
/// # Errors
///
/// Returns the [`ShapeViolation`] for the first rule `value` breaks.
pub fn inspect(value: &Value) -> Result<(), ShapeViolation> {
    fields(value).map(|_| ())
}

pub(crate) fn fields(value: &Value) -> Result<InsightFields<'_>, ShapeViolation> {
    let Value::Object(object) = value else {
        return Err(ShapeViolation::NotAnObject {
            found: type_name(Some(value)),
        });
    };

    let kind = match object.get(KIND_FIELD) {
        Some(Value::String(kind)) => kind,
        other => {
            return Err(ShapeViolation::KindNotString {
                found: type_name(other),
            });
        }
    };

    let event = match object.get(EVENT_FIELD) {
        Some(Value::String(event)) => event,
        other => {
            return Err(ShapeViolation::EventNotString {
                found: type_name(other),
            });
        }
    };

    let data = object.get(DATA_FIELD).ok_or(ShapeViolation::DataMissing)?;

    Ok(InsightFields {
        kind,
        event,
        data,
        object,
    })
}

/// Name of the JSON type of a field, or `"missing"` when absent.
#[must_use]
pub const fn type_name(value: Option<&Value>) -> &'static str {
    match value {
        None => "missing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}
