//! Report types emitted by insight consumers (e.g. `insight check`).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shape::{EVENT_FIELD, KIND_FIELD, ShapeViolation};

/// Outcome of checking one candidate value.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CheckReport {
    pub valid: bool,
    /// The candidate's `type`, when it is a string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// The candidate's `event`, when it is a string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    /// Identifier of the violated rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckReport {
    /// Build a report for `value` from the outcome of a check.
    #[must_use]
    pub fn new(value: &Value, outcome: &Result<(), ShapeViolation>) -> Self {
        let text = |field: &str| value.get(field).and_then(Value::as_str).map(str::to_owned);
        let (rule, message) = match outcome {
            Ok(()) => (None, None),
            Err(violation) => (
                Some(violation.rule().to_owned()),
                Some(violation.to_string()),
            ),
        };

        Self {
            valid: outcome.is_ok(),
            kind: text(KIND_FIELD),
            event: text(EVENT_FIELD),
            rule,
            message,
        }
    }
}
