//! Template store backends
//!
//! The [`TemplateBackend`] trait is the sole point of contact with the
//! template store. The production implementation talks JSON over HTTP
//! ([`HttpBackend`]); [`MemoryBackend`] satisfies the same contract
//! in-process and doubles as the test backend for the manager.

mod http;
mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::TemplateResult;
use crate::models::{MetaPatch, PatchedMeta, SaveTemplate, TemplateMeta, TemplateRecord};

pub use http::HttpBackend;
pub use memory::{MemoryBackend, SentTest};

/// Capability contract for a template store
///
/// All operations are asynchronous and surface failures as
/// [`TemplateError`](crate::error::TemplateError) rather than swallowing
/// them. Implementations own the persistence format; callers only see the
/// typed model.
#[async_trait]
pub trait TemplateBackend: Send + Sync {
    /// Returns all templates visible to the caller, in backend-defined order
    ///
    /// # Errors
    ///
    /// Returns `Transport` if the store is unreachable.
    async fn list(&self) -> TemplateResult<Vec<TemplateMeta>>;

    /// Returns the full record for the given id
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the id does not exist.
    async fn get(&self, id: Uuid) -> TemplateResult<TemplateRecord>;

    /// Creates (no id) or updates (id present) a template
    ///
    /// An update that supplies a design different from the stored one
    /// appends the previous design to the version history.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if `name` or `subject` is blank, `NotFound` if
    /// an id was supplied but is unknown.
    async fn save(&self, input: SaveTemplate) -> TemplateResult<TemplateRecord>;

    /// Applies a partial meta patch; never touches the design or versions
    ///
    /// Returns `Ok(None)` when nothing matched the patched id — a no-op for
    /// the caller, not a failure.
    ///
    /// # Errors
    ///
    /// Returns `Transport` if the store is unreachable.
    async fn update_meta(&self, patch: MetaPatch) -> TemplateResult<Option<PatchedMeta>>;

    /// Removes the template with the given id
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the id does not exist.
    async fn remove(&self, id: Uuid) -> TemplateResult<()>;

    /// Clones the template into a new record with a fresh id
    ///
    /// The latest design and the meta fields are copied; the copy starts
    /// with an empty version history.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the source id does not exist.
    async fn duplicate(&self, id: Uuid) -> TemplateResult<TemplateRecord>;

    /// Triggers a backend-side test send to the given address
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the id does not exist, `Validation` if the
    /// address is malformed.
    async fn send_test(&self, id: Uuid, email: &str) -> TemplateResult<()>;

    /// Stable identifier of this backend implementation, used in logs
    fn backend_id(&self) -> &'static str;
}
