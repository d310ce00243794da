//! Core data structures for Mailforge templates
//!
//! This module provides the template model shared by every backend and the
//! template manager: the opaque design document, version snapshots, summary
//! and full records, and the save/patch input types.

mod design;
mod inputs;
mod template;

pub use design::{DesignDocument, DesignVersion};
pub use inputs::{MetaPatch, PatchedMeta, SaveTemplate};
pub use template::{TemplateMeta, TemplateRecord};
