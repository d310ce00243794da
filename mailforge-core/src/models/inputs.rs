//! Input and patch-response types for template mutations.
//!
//! `SaveTemplate` either creates (no id) or updates (id present) a template.
//! `MetaPatch` carries a partial meta update; a `None` field is not part of
//! the patch, while `Some` with an empty value is an explicit assignment.
//! `PatchedMeta` is the backend's echo of an applied patch with the same
//! field-presence semantics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::design::DesignDocument;

/// Input to a save operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveTemplate {
    /// Target id; absent means create, present means update
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Display name, required
    pub name: String,
    /// Email subject line, required
    pub subject: String,
    /// Opaque editor payload
    pub design: DesignDocument,
    /// Tags to assign; absent keeps the existing tags on update
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl SaveTemplate {
    /// Creates a save input for a new template
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        subject: impl Into<String>,
        design: DesignDocument,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            subject: subject.into(),
            design,
            tags: None,
        }
    }

    /// Targets an existing template instead of creating a new one
    #[must_use]
    pub const fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the tags to assign
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }
}

/// Partial meta update for an existing template
///
/// Must not alter the design or version history; backends reject or ignore
/// any attempt to do so by construction, since neither field is carried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaPatch {
    /// Target template id
    pub id: Uuid,
    /// New display name, if part of the patch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New subject line, if part of the patch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// New tag set, if part of the patch; `Some(vec![])` clears the tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl MetaPatch {
    /// Creates an empty patch targeting the given template
    #[must_use]
    pub const fn new(id: Uuid) -> Self {
        Self {
            id,
            name: None,
            subject: None,
            tags: None,
        }
    }

    /// Sets the name field of the patch
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the subject field of the patch
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Sets the tags field of the patch
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Returns true if the patch carries no fields
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.subject.is_none() && self.tags.is_none()
    }
}

/// Backend response to an applied meta patch
///
/// A `None` field was not echoed by the backend; when merged into a cached
/// record the previous value is preserved. `Some` with an empty value is an
/// explicit assignment and overwrites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchedMeta {
    /// Id of the patched template
    pub id: Uuid,
    /// Name after the patch, if echoed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Subject after the patch, if echoed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Tags after the patch, if echoed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// New modification time, if echoed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
