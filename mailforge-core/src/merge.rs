//! Explicit merge of a patch response into a cached record.
//!
//! Field-presence semantics: a `Some` field in the response — including an
//! empty one such as `Some(vec![])` — is present and overwrites; a `None`
//! field was not echoed by the backend and the previous value is preserved.
//! The design payload and version history are never part of a meta patch
//! and are left untouched.

use crate::models::{PatchedMeta, TemplateRecord};

/// Applies an echoed meta patch to a cached full record
///
/// Callers are expected to have checked that `record.id == patched.id`;
/// the merge itself only transfers the meta fields.
pub fn apply_patched_meta(record: &mut TemplateRecord, patched: &PatchedMeta) {
    if let Some(ref name) = patched.name {
        record.name.clone_from(name);
    }
    if let Some(ref subject) = patched.subject {
        record.subject.clone_from(subject);
    }
    if let Some(ref tags) = patched.tags {
        record.tags.clone_from(tags);
    }
    if let Some(updated_at) = patched.updated_at {
        record.updated_at = updated_at;
    }
}
