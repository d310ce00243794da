//! Property-based tests for the template model.
//!
//! Serialization round-trips, the meta projection, and the field-presence
//! behavior of the input types.

use chrono::Utc;
use mailforge_core::{DesignDocument, DesignVersion, SaveTemplate, TemplateRecord};
use proptest::prelude::*;
use serde_json::json;
use uuid::Uuid;

// ========== Strategies ==========

/// Strategy for generating small opaque design payloads
fn arb_design() -> impl Strategy<Value = DesignDocument> {
    prop_oneof![
        Just(DesignDocument::empty()),
        (0u64..10).prop_map(|rows| DesignDocument::new(json!({"body": {"rows": rows}}))),
        "[a-z]{1,8}".prop_map(|s| DesignDocument::new(json!({"blocks": [s]}))),
    ]
}

/// Strategy for generating a full record
fn arb_record() -> impl Strategy<Value = TemplateRecord> {
    (
        "[A-Za-z][A-Za-z0-9 ]{0,14}",
        "[A-Za-z0-9 ]{1,16}",
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
    /// Records survive a JSON round-trip unchanged, versions included.
    #[test]
    fn record_round_trips_through_json(record in arb_record()) {
        let json = serde_json::to_string(&record).unwrap();
        let back: TemplateRecord = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, record);
    }

    /// The meta projection agrees with the record field-for-field.
    #[test]
    fn meta_projection_matches_the_record(record in arb_record()) {
        let meta = record.meta();
        prop_assert_eq!(meta.id, record.id);
        prop_assert_eq!(meta.name, record.name);
        prop_assert_eq!(meta.subject, record.subject);
        prop_assert_eq!(meta.tags, record.tags);
        prop_assert_eq!(meta.updated_at, record.updated_at);
    }

    /// Absent optional fields of a save input leave no key in the JSON,
    /// so the wire shape distinguishes "not part of the call" from empty.
    #[test]
    fn save_input_omits_absent_fields(
        design in arb_design(),
        tags in prop::option::of(prop::collection::vec("[a-z]{1,6}", 0..3)),
    ) {
        let mut input = SaveTemplate::new("Name", "Subject", design);
        if let Some(ref tags) = tags {
            input = input.with_tags(tags.clone());
        }
        let value = serde_json::to_value(&input).unwrap();
        prop_assert!(value.get("id").is_none());
        prop_assert_eq!(value.get("tags").is_some(), tags.is_some());
    }

    /// The opaque payload is carried verbatim through the record.
    #[test]
    fn design_payload_is_opaque(record in arb_record()) {
        let value = serde_json::to_value(&record).unwrap();
        prop_assert_eq!(value.get("design").unwrap(), record.design.as_value());
    }
}
