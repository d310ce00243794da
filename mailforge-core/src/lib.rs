//! Mailforge Core Library
//!
//! This crate provides the client-side core of the Mailforge email template
//! manager: the typed template model, the backend capability for the remote
//! template store, and the state-owning manager that mediates between UI
//! consumers and the backend.
//!
//! # Crate Structure
//!
//! - [`models`] - Core data structures (template records, design documents, inputs)
//! - [`error`] - The shared error taxonomy (validation / not-found / transport)
//! - [`backend`] - The `TemplateBackend` capability with HTTP and in-memory implementations
//! - [`manager`] - The `TemplateManager` state container and orchestration layer
//! - [`filter`] - Pure client-side filtering of the cached template list
//! - [`merge`] - Explicit merge of patch responses into cached records
//! - [`validation`] - Required-field and e-mail address checks
//! - [`tracing`] - Subscriber initialization for front-ends
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use mailforge_core::{DesignDocument, MemoryBackend, SaveTemplate, TemplateManager};
//!
//! # async fn demo() -> mailforge_core::TemplateResult<()> {
//! let manager = TemplateManager::new(Arc::new(MemoryBackend::new()));
//! let record = manager
//!     .save(SaveTemplate::new("Welcome", "Hi", DesignDocument::empty()))
//!     .await?;
//! manager.set_filter("welcome").await;
//! assert_eq!(manager.visible_templates().await[0].id, record.id);
//! # Ok(())
//! # }
//! ```

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod backend;
pub mod error;
pub mod filter;
pub mod manager;
pub mod merge;
pub mod models;
pub mod tracing;
pub mod validation;

pub use backend::{HttpBackend, MemoryBackend, SentTest, TemplateBackend};
pub use error::{TemplateError, TemplateResult};
pub use filter::TemplateFilter;
pub use manager::TemplateManager;
pub use models::{
    DesignDocument, DesignVersion, MetaPatch, PatchedMeta, SaveTemplate, TemplateMeta,
    TemplateRecord,
};
pub use validation::{validate_email, validate_save};
