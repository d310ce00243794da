//! Template summary and full record models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::design::{DesignDocument, DesignVersion};

/// Lightweight template summary used for listing
///
/// Tags keep their insertion order for display; filtering treats them as a
/// set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateMeta {
    /// Unique stable identifier, assigned by the backend on first save
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email subject line
    pub subject: String,
    /// Short labels attached to the template
    #[serde(default)]
    pub tags: Vec<String>,
    /// Last modification time, backend-determined
    pub updated_at: DateTime<Utc>,
}

/// Full template record, a superset of [`TemplateMeta`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateRecord {
    /// Unique stable identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email subject line
    pub subject: String,
    /// Short labels attached to the template
    #[serde(default)]
    pub tags: Vec<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
    /// Opaque serialized state of the visual editor
    pub design: DesignDocument,
    /// Prior design snapshots, append-only
    #[serde(default)]
    pub versions: Vec<DesignVersion>,
}

impl TemplateRecord {
    /// Projects the summary subset of this record
    #[must_use]
    pub fn meta(&self) -> TemplateMeta {
        TemplateMeta {
            id: self.id,
            name: self.name.clone(),
            subject: self.subject.clone(),
            tags: self.tags.clone(),
            updated_at: self.updated_at,
        }
    }

    /// Updates the modification timestamp to now
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Returns true if the template carries the given tag
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
