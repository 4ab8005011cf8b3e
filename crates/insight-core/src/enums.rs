//! Kind tags and validation modes for insights.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag carried in the `type` field of a tracking insight.
pub const INSIGHT_TRACK: &str = "track";

// ---------------------------------------------------------------------------
// InsightKind
// ---------------------------------------------------------------------------

/// Known insight kind tags.
///
/// The shape predicate only requires `type` to be a string; this enum names
/// the tags producers are expected to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Track,
}

impl InsightKind {
    /// Every known kind.
    pub const ALL: &'static [Self] = &[Self::Track];

    /// Return the tag as it appears in the `type` field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Track => INSIGHT_TRACK,
        }
    }

    /// Resolve a `type` tag to a known kind.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == tag)
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ShapeMode
// ---------------------------------------------------------------------------

/// How fields outside `type`, `event`, and `data` are treated.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ShapeMode {
    /// Extra fields are ignored.
    #[default]
    Open,
    /// Extra fields are rejected.
    Closed,
}

impl ShapeMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for ShapeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_as_tag() {
        let json = serde_json::to_string(&InsightKind::Track).unwrap();
        assert_eq!(json, "\"track\"");
        assert_eq!(InsightKind::Track.to_string(), INSIGHT_TRACK);
    }

    #[test]
    fn kind_from_tag() {
        assert_eq!(InsightKind::from_tag("track"), Some(InsightKind::Track));
        assert_eq!(InsightKind::from_tag("Track"), None);
        assert_eq!(InsightKind::from_tag(""), None);
    }

    #[test]
    fn shape_mode_defaults_to_open() {
        assert_eq!(ShapeMode::default(), ShapeMode::Open);
    }

    #[test]
    fn shape_mode_parses_snake_case() {
        let mode: ShapeMode = serde_json::from_str("\"closed\"").unwrap();
        assert_eq!(mode, ShapeMode::Closed);
        assert!(serde_json::from_str::<ShapeMode>("\"strict\"").is_err());
    }
}
