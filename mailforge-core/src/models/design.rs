//! Opaque design document and version snapshot models.
//!
//! The design payload is the visual editor's serialized state. The core
//! never parses or validates it; it is carried as an opaque JSON value
//! between the editor and the backend. Equality is the only operation
//! backends rely on, to detect whether a save actually changed the design.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Serialized state of the visual template editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DesignDocument(serde_json::Value);

impl DesignDocument {
    /// Wraps a raw JSON value as a design document
    #[must_use]
    pub const fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Creates an empty design document (an empty JSON object)
    #[must_use]
    pub fn empty() -> Self {
        Self(serde_json::Value::Object(serde_json::Map::new()))
    }

    /// Returns the underlying JSON value
    #[must_use]
    pub const fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    /// Consumes the document and returns the underlying JSON value
    #[must_use]
    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }
}

impl Default for DesignDocument {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<serde_json::Value> for DesignDocument {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

/// An immutable historical snapshot of a template's design
///
/// Version history is append-only: a snapshot is taken of the previous
/// design whenever a save replaces it with a different one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignVersion {
    /// The design as it was before it was replaced
    pub design: DesignDocument,
    /// When the snapshot was taken
    pub saved_at: DateTime<Utc>,
}

impl DesignVersion {
    /// Creates a snapshot of the given design, stamped now
    #[must_use]
    pub fn snapshot(design: DesignDocument) -> Self {
        Self {
            design,
            saved_at: Utc::now(),
        }
    }
}
