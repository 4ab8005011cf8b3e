//! # insight-core
//!
//! Core types and the runtime shape predicate for insight records.
//!
//! An insight is a tracked event described by a kind tag (`type`), an event
//! name (`event`), and an arbitrary payload (`data`). Values arriving from
//! producers are untrusted, so consumers check them with [`is_insight`] (or
//! the diagnostic form [`inspect`]) before treating them as insights.
//!
//! This crate provides:
//! - [`Insight`]: the typed record, obtained from a checked JSON value
//! - [`InsightKind`] and [`INSIGHT_TRACK`]: the known kind tags
//! - [`is_insight`] / [`inspect`]: the open-shape predicate and its diagnostics
//! - [`ShapePolicy`]: opt-in closed-shape and kind-whitelist checks
//! - [`CheckReport`]: serializable outcome of a check, for consumers that report it
//! - [`CoreError`]: errors raised when narrowing a value into [`Insight`]
//!
//! ```
//! use serde_json::json;
//!
//! assert!(insight_core::is_insight(&json!({
//!     "type": "track",
//!     "event": "trackingEvent",
//!     "data": {}
//! })));
//! assert!(!insight_core::is_insight(&json!(0)));
//! ```

pub mod enums;
pub mod errors;
pub mod insight;
pub mod policy;
pub mod responses;
pub mod shape;

pub use enums::{INSIGHT_TRACK, InsightKind, ShapeMode};
pub use errors::CoreError;
pub use insight::Insight;
pub use policy::ShapePolicy;
pub use responses::CheckReport;
pub use shape::{ShapeViolation, inspect, is_insight};
