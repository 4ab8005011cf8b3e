//! Configurable insight checks layered on top of the base shape rules.
//!
//! The default policy is exactly [`is_insight`](crate::is_insight): open
//! shape, any string kind. A policy can additionally reject extra keys
//! ([`ShapeMode::Closed`]) and restrict `type` to a whitelist of tags.
//! Whitelist checks run after the base rules, then the closed-shape check.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::enums::{InsightKind, ShapeMode};
use crate::errors::CoreError;
use crate::insight::Insight;
use crate::shape::{self, DATA_FIELD, EVENT_FIELD, KIND_FIELD, ShapeViolation};

/// Immutable set of checks applied to candidate insights.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShapePolicy {
    mode: ShapeMode,
    allowed_kinds: BTreeSet<String>,
}

impl ShapePolicy {
    #[must_use]
    pub fn new(mode: ShapeMode) -> Self {
        Self {
            mode,
            allowed_kinds: BTreeSet::new(),
        }
    }

    /// Open shape, any string kind.
    #[must_use]
    pub fn open() -> Self {
        Self::new(ShapeMode::Open)
    }

    /// Closed shape, any string kind.
    #[must_use]
    pub fn closed() -> Self {
        Self::new(ShapeMode::Closed)
    }

    /// Restrict `type` to the given tags. An empty list keeps any string.
    #[must_use]
    pub fn with_allowed_kinds<I, S>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_kinds.extend(kinds.into_iter().map(Into::into));
        self
    }

    /// Restrict `type` to the tags in [`InsightKind::ALL`].
    #[must_use]
    pub fn with_known_kinds(self) -> Self {
        self.with_allowed_kinds(InsightKind::ALL.iter().map(|kind| kind.as_str()))
    }

    #[must_use]
    pub const fn mode(&self) -> ShapeMode {
        self.mode
    }

    #[must_use]
    pub const fn allowed_kinds(&self) -> &BTreeSet<String> {
        &self.allowed_kinds
    }

    /// Check `value` and report the first violated rule.
    ///
    /// # Errors
    ///
    /// Returns the [`ShapeViolation`] for the first rule `value` breaks.
    pub fn check(&self, value: &Value) -> Result<(), ShapeViolation> {
        let fields = shape::fields(value)?;

        if !self.allowed_kinds.is_empty() && !self.allowed_kinds.contains(fields.kind) {
            return Err(ShapeViolation::UnknownKind {
                kind: fields.kind.to_owned(),
            });
        }

        if self.mode == ShapeMode::Closed {
            if let Some(field) = fields
                .object
                .keys()
                .find(|key| !matches!(key.as_str(), KIND_FIELD | EVENT_FIELD | DATA_FIELD))
            {
                return Err(ShapeViolation::UnexpectedField {
                    field: field.clone(),
                });
            }
        }

        Ok(())
    }

    /// Returns `true` if `value` passes every check in this policy.
    #[must_use]
    pub fn accepts(&self, value: &Value) -> bool {
        self.check(value).is_ok()
    }

    /// Check `value` and narrow it into an [`Insight`].
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidShape` with the first violated rule.
    pub fn parse(&self, value: &Value) -> Result<Insight, CoreError> {
        self.check(value)?;
        Insight::from_value(value)
    }
}
