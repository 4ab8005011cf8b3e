//! Insight validation policy configuration.

use insight_core::{ShapeMode, ShapePolicy};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ValidationConfig {
    /// `open` ignores extra fields, `closed` rejects them.
    #[serde(default)]
    pub mode: ShapeMode,

    /// Accepted `type` tags. Empty accepts any string.
    #[serde(default)]
    pub allowed_kinds: Vec<String>,
}

impl ValidationConfig {
    /// Check field values that serde cannot constrain.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a blank entry in `allowed_kinds`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(index) = self
            .allowed_kinds
            .iter()
            .position(|kind| kind.trim().is_empty())
        {
            return Err(ConfigError::InvalidValue {
                field: format!("validation.allowed_kinds[{index}]"),
                reason: "kind tag must not be blank".to_string(),
            });
        }
        Ok(())
    }

    /// Build the shape policy this section describes.
    #[must_use]
    pub fn policy(&self) -> ShapePolicy {
        ShapePolicy::new(self.mode).with_allowed_kinds(self.allowed_kinds.iter().cloned())
    }
}
