//! Property-based tests for the patch-response merge.
//!
//! Presence semantics: echoed fields overwrite (even when empty), absent
//! fields preserve the previous value, and the design payload and version
//! history are never touched.

use chrono::Utc;
use mailforge_core::merge::apply_patched_meta;
use mailforge_core::{DesignDocument, DesignVersion, PatchedMeta, TemplateRecord};
use proptest::prelude::*;
use serde_json::json;
use uuid::Uuid;

// ========== Strategies ==========

/// Strategy for generating small opaque design payloads
fn arb_design() -> impl Strategy<Value = DesignDocument> {
    prop_oneof![
        Just(DesignDocument::empty()),
        (0u64..10).prop_map(|rows| DesignDocument::new(json!({"body": {"rows": rows}}))),
        "[a-z]{1,8}".prop_map(|s| DesignDocument::new(json!({"body": {"text": s}}))),
    ]
}

/// Strategy for generating a full record with some version history
fn arb_record() -> impl Strategy<Value = TemplateRecord> {
    (
        "[A-Za-z]{1,10}",
        "[A-Za-z ]{1,12}",
        prop::collection::vec("[a-z]{1,6}", 0..4),
        arb_design(),
        prop::collection::vec(arb_design(), 0..3),
    )
        .prop_map(|(name, subject, tags, design, history)| TemplateRecord {
            id: Uuid::new_v4(),
            name,
            subject,
            tags,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            design,
            versions: history.into_iter().map(DesignVersion::snapshot).collect(),
        })
}

// ========== Properties ==========

proptest! {
    /// Each meta field follows the presence rule independently.
    #[test]
    fn echoed_fields_overwrite_absent_fields_preserve(
        record in arb_record(),
        (name, subject, tags) in (
            prop::option::of("[A-Za-z]{1,10}"),
            prop::option::of("[A-Za-z ]{1,12}"),
            prop::option::of(prop::collection::vec("[a-z]{1,6}", 0..4)),
        ),
    ) {
        let patched = PatchedMeta {
            id: record.id,
            name: name.clone(),
            subject: subject.clone(),
            tags: tags.clone(),
            updated_at: None,
        };
        let mut merged = record.clone();
        apply_patched_meta(&mut merged, &patched);

        prop_assert_eq!(&merged.name, name.as_ref().unwrap_or(&record.name));
        prop_assert_eq!(&merged.subject, subject.as_ref().unwrap_or(&record.subject));
        prop_assert_eq!(&merged.tags, tags.as_ref().unwrap_or(&record.tags));
        prop_assert_eq!(merged.updated_at, record.updated_at);
    }

    /// The merge never touches design, versions, id, or creation time.
    #[test]
    fn merge_is_surgical(
        record in arb_record(),
        name in prop::option::of("[A-Za-z]{1,10}"),
        subject in prop::option::of("[A-Za-z ]{1,12}"),
        tags in prop::option::of(prop::collection::vec("[a-z]{1,6}", 0..4)),
    ) {
        let patched = PatchedMeta {
            id: record.id,
            name,
            subject,
            tags,
            updated_at: Some(Utc::now()),
        };
        let mut merged = record.clone();
        apply_patched_meta(&mut merged, &patched);

        prop_assert_eq!(merged.id, record.id);
        prop_assert_eq!(merged.created_at, record.created_at);
        prop_assert_eq!(merged.design, record.design);
        prop_assert_eq!(merged.versions, record.versions);
    }

    /// Merging is idempotent: applying the same response twice changes nothing more.
    #[test]
    fn merge_is_idempotent(record in arb_record(), name in prop::option::of("[A-Za-z]{1,10}")) {
        let patched = PatchedMeta {
            id: record.id,
            name,
            subject: None,
            tags: None,
            updated_at: Some(Utc::now()),
        };
        let mut once = record.clone();
        apply_patched_meta(&mut once, &patched);
        let mut twice = once.clone();
        apply_patched_meta(&mut twice, &patched);
        prop_assert_eq!(once, twice);
    }
}
