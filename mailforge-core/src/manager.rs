//! Template manager for state and orchestration
//!
//! This module provides the `TemplateManager`, the client-visible state
//! container over a [`TemplateBackend`]: it owns the cached summary list,
//! the currently loaded full record, the busy flag, and the filter state,
//! and sequences a full list refresh after every mutation so the cache
//! always reflects server truth rather than an optimistic guess.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::TemplateBackend;
use crate::error::TemplateResult;
use crate::filter::TemplateFilter;
use crate::merge::apply_patched_meta;
use crate::models::{MetaPatch, PatchedMeta, SaveTemplate, TemplateMeta, TemplateRecord};

/// Clears the shared busy flag when dropped
///
/// Ties the release of `loading` to scope exit, so the flag cannot stay set
/// after an operation fails mid-way.
struct LoadingGuard(Arc<AtomicBool>);

impl LoadingGuard {
    fn engage(flag: &Arc<AtomicBool>) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(Arc::clone(flag))
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Client-side state container and orchestration layer over a template store
///
/// The manager is a cloneable handle; all clones share the same cached
/// state. Multiple consumers may read concurrently while operations are in
/// flight. There is no mutual exclusion between logical operations issued
/// back-to-back: they interleave at backend awaits and the last completed
/// refresh determines the visible list snapshot.
///
/// Backend failures propagate to the caller unmodified; the busy flag is
/// released on every exit path.
#[derive(Clone)]
pub struct TemplateManager {
    backend: Arc<dyn TemplateBackend>,
    templates: Arc<RwLock<Vec<TemplateMeta>>>,
    current: Arc<RwLock<Option<TemplateRecord>>>,
    loading: Arc<AtomicBool>,
    filter: Arc<RwLock<TemplateFilter>>,
}

impl TemplateManager {
    /// Creates a manager over the given backend and spawns the initial refresh
    ///
    /// Until the spawned refresh resolves, the cached list is empty and the
    /// manager reports loading. A failed initial refresh is logged — there
    /// is no caller to propagate it to; explicit `refresh` calls surface
    /// their own errors.
    ///
    /// Must be called within a tokio runtime.
    #[must_use]
    pub fn new(backend: Arc<dyn TemplateBackend>) -> Self {
        let manager = Self::detached(backend);
        manager.loading.store(true, Ordering::SeqCst);
        let spawned = manager.clone();
        tokio::spawn(async move {
            if let Err(e) = spawned.refresh().await {
                tracing::error!(
                    backend = spawned.backend.backend_id(),
                    "Initial template refresh failed: {e}"
                );
            }
        });
        manager
    }

    /// Creates a manager without triggering the initial refresh
    ///
    /// The cache starts empty and not loading; the caller drives `refresh`.
    #[must_use]
    pub fn detached(backend: Arc<dyn TemplateBackend>) -> Self {
        Self {
            backend,
            templates: Arc::new(RwLock::new(Vec::new())),
            current: Arc::new(RwLock::new(None)),
            loading: Arc::new(AtomicBool::new(false)),
            filter: Arc::new(RwLock::new(TemplateFilter::new())),
        }
    }

    // ========== Read Accessors ==========

    /// Returns the cached summary list before filtering
    pub async fn templates(&self) -> Vec<TemplateMeta> {
        self.templates.read().await.clone()
    }

    /// Returns the last-loaded or last-saved full record, if any
    pub async fn current(&self) -> Option<TemplateRecord> {
        self.current.read().await.clone()
    }

    /// Returns true while a refresh or load is in flight
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Returns the active filter state
    pub async fn filter(&self) -> TemplateFilter {
        self.filter.read().await.clone()
    }

    /// Computes the filtered view of the cached list
    ///
    /// Recomputed fresh on every call; never contacts the backend and never
    /// mutates the cache.
    pub async fn visible_templates(&self) -> Vec<TemplateMeta> {
        let filter = self.filter.read().await.clone();
        self.templates
            .read()
            .await
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect()
    }

    // ========== Filter Setters ==========

    /// Sets the free-text filter; takes effect on the next derived view read
    pub async fn set_filter(&self, text: impl Into<String> + Send) {
        self.filter.write().await.text = text.into();
    }

    /// Sets the required-tag filter; takes effect on the next derived view read
    pub async fn set_tag_filter(&self, tags: Vec<String>) {
        self.filter.write().await.tags = tags;
    }

    // ========== Operations ==========

    /// Replaces the cached list with a fresh `list()` result
    ///
    /// Concurrent refreshes are not coalesced; the last writer wins.
    ///
    /// # Errors
    ///
    /// Propagates the backend failure; the busy flag is still released.
    pub async fn refresh(&self) -> TemplateResult<()> {
        let _guard = LoadingGuard::engage(&self.loading);
        let list = self.backend.list().await?;
        *self.templates.write().await = list;
        Ok(())
    }

    /// Loads the full record for `id` into `current`
    ///
    /// Replaces any prior value, even one for a different id.
    ///
    /// # Errors
    ///
    /// Propagates `NotFound` or `Transport`; the busy flag is still
    /// released and `current` keeps its previous value.
    pub async fn load(&self, id: Uuid) -> TemplateResult<TemplateRecord> {
        let _guard = LoadingGuard::engage(&self.loading);
        let record = self.backend.get(id).await?;
        *self.current.write().await = Some(record.clone());
        Ok(record)
    }

    /// Saves a template, refreshes the list, and makes the result current
    ///
    /// The refresh completes before this returns: callers inspecting the
    /// cached list immediately afterwards see the new or updated entry.
    ///
    /// # Errors
    ///
    /// Propagates validation and backend failures. A refresh failure after
    /// a successful save surfaces as `Transport` even though the mutation
    /// landed server-side; the cache may be stale until the next refresh.
    pub async fn save(&self, input: SaveTemplate) -> TemplateResult<TemplateRecord> {
        let record = self.backend.save(input).await?;
        tracing::debug!(template_id = %record.id, "Saved template");
        self.refresh().await?;
        *self.current.write().await = Some(record.clone());
        Ok(record)
    }

    /// Applies a partial meta patch and refreshes the list
    ///
    /// Returns `None` when nothing matched the patched id; the list is
    /// still refreshed and `current` is untouched. When a patch response
    /// comes back and `current` holds the same id, the response is merged
    /// into it: echoed fields overwrite, absent fields are preserved.
    ///
    /// # Errors
    ///
    /// Propagates the backend failure.
    pub async fn update_meta(&self, patch: MetaPatch) -> TemplateResult<Option<PatchedMeta>> {
        let patched = self.backend.update_meta(patch).await?;
        self.refresh().await?;
        if let Some(ref patched) = patched {
            let mut current = self.current.write().await;
            if let Some(ref mut record) = *current
                && record.id == patched.id
            {
                apply_patched_meta(record, patched);
            }
        }
        Ok(patched)
    }

    /// Removes a template and refreshes the list
    ///
    /// The backend removal completes before the refresh, so a removed entry
    /// cannot reappear from a stale list. Clears `current` if it referenced
    /// the removed id.
    ///
    /// # Errors
    ///
    /// Propagates `NotFound` or `Transport`.
    pub async fn remove(&self, id: Uuid) -> TemplateResult<()> {
        self.backend.remove(id).await?;
        tracing::debug!(template_id = %id, "Removed template");
        self.refresh().await?;
        let mut current = self.current.write().await;
        if current.as_ref().is_some_and(|r| r.id == id) {
            *current = None;
        }
        Ok(())
    }

    /// Clones a template into a fresh id and refreshes the list
    ///
    /// Does not alter `current`.
    ///
    /// # Errors
    ///
    /// Propagates `NotFound` or `Transport`.
    pub async fn duplicate(&self, id: Uuid) -> TemplateResult<TemplateRecord> {
        let record = self.backend.duplicate(id).await?;
        tracing::debug!(source_id = %id, copy_id = %record.id, "Duplicated template");
        self.refresh().await?;
        Ok(record)
    }

    /// Triggers a backend-side test send; no state mutation
    ///
    /// # Errors
    ///
    /// Propagates `NotFound`, `Validation`, or `Transport`.
    pub async fn send_test(&self, id: Uuid, email: &str) -> TemplateResult<()> {
        self.backend.send_test(id, email).await
    }
}
