//! In-memory template store
//!
//! Implements the full [`TemplateBackend`] contract over process-local
//! state. Used as the test double for the manager and anywhere a remote
//! store is not available.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{TemplateError, TemplateResult};
use crate::models::{
    DesignVersion, MetaPatch, PatchedMeta, SaveTemplate, TemplateMeta, TemplateRecord,
};
use crate::validation::{validate_email, validate_save};

use super::TemplateBackend;

/// A recorded test send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentTest {
    /// Template the test was sent for
    pub template_id: Uuid,
    /// Recipient address
    pub email: String,
}

/// In-process template store indexed by id
///
/// Cloning the backend clones the handle; all clones share the same store.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    templates: Arc<RwLock<HashMap<Uuid, TemplateRecord>>>,
    sent: Arc<RwLock<Vec<SentTest>>>,
}

impl MemoryBackend {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the given records
    #[must_use]
    pub fn with_records(records: Vec<TemplateRecord>) -> Self {
        let templates = records.into_iter().map(|r| (r.id, r)).collect();
        Self {
            templates: Arc::new(RwLock::new(templates)),
            sent: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Returns the total number of stored templates
    pub async fn template_count(&self) -> usize {
        self.templates.read().await.len()
    }

    /// Returns the test sends recorded so far, oldest first
    pub async fn sent_tests(&self) -> Vec<SentTest> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl TemplateBackend for MemoryBackend {
    async fn list(&self) -> TemplateResult<Vec<TemplateMeta>> {
        let templates = self.templates.read().await;
        let mut metas: Vec<TemplateMeta> = templates.values().map(TemplateRecord::meta).collect();
        // Newest first, the order the remote store serves lists in
        metas.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(metas)
    }

    async fn get(&self, id: Uuid) -> TemplateResult<TemplateRecord> {
        self.templates
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(TemplateError::NotFound(id))
    }

    async fn save(&self, input: SaveTemplate) -> TemplateResult<TemplateRecord> {
        validate_save(&input)?;

        let mut templates = self.templates.write().await;
        match input.id {
            None => {
                let now = Utc::now();
                let record = TemplateRecord {
                    id: Uuid::new_v4(),
                    name: input.name,
                    subject: input.subject,
                    tags: input.tags.unwrap_or_default(),
                    created_at: now,
                    updated_at: now,
                    design: input.design,
                    versions: Vec::new(),
                };
                templates.insert(record.id, record.clone());
                Ok(record)
            }
            Some(id) => {
                let record = templates.get_mut(&id).ok_or(TemplateError::NotFound(id))?;
                if input.design != record.design {
                    let previous = std::mem::replace(&mut record.design, input.design);
                    record.versions.push(DesignVersion::snapshot(previous));
                }
                record.name = input.name;
                record.subject = input.subject;
                if let Some(tags) = input.tags {
                    record.tags = tags;
                }
                record.touch();
                Ok(record.clone())
            }
        }
    }

    async fn update_meta(&self, patch: MetaPatch) -> TemplateResult<Option<PatchedMeta>> {
        let mut templates = self.templates.write().await;
        let Some(record) = templates.get_mut(&patch.id) else {
            // Nothing matched: a no-op for the caller, not a failure
            return Ok(None);
        };

        if let Some(ref name) = patch.name {
            record.name.clone_from(name);
        }
        if let Some(ref subject) = patch.subject {
            record.subject.clone_from(subject);
        }
        if let Some(ref tags) = patch.tags {
            record.tags.clone_from(tags);
        }
        record.touch();

        Ok(Some(PatchedMeta {
            id: record.id,
            name: patch.name,
            subject: patch.subject,
            tags: patch.tags,
            updated_at: Some(record.updated_at),
        }))
    }

    async fn remove(&self, id: Uuid) -> TemplateResult<()> {
        if self.templates.write().await.remove(&id).is_none() {
            return Err(TemplateError::NotFound(id));
        }
        Ok(())
    }

    async fn duplicate(&self, id: Uuid) -> TemplateResult<TemplateRecord> {
        let mut templates = self.templates.write().await;
        let source = templates.get(&id).ok_or(TemplateError::NotFound(id))?;

        let now = Utc::now();
        let copy = TemplateRecord {
            id: Uuid::new_v4(),
            name: format!("{} (copy)", source.name),
            subject: source.subject.clone(),
            tags: source.tags.clone(),
            created_at: now,
            updated_at: now,
            design: source.design.clone(),
            // History belongs to the source record; the copy starts fresh
            versions: Vec::new(),
        };
        templates.insert(copy.id, copy.clone());
        Ok(copy)
    }

    async fn send_test(&self, id: Uuid, email: &str) -> TemplateResult<()> {
        if !self.templates.read().await.contains_key(&id) {
            return Err(TemplateError::NotFound(id));
        }
        validate_email(email)?;
        self.sent.write().await.push(SentTest {
            template_id: id,
            email: email.to_string(),
        });
        Ok(())
    }

    fn backend_id(&self) -> &'static str {
        "memory"
    }
}
