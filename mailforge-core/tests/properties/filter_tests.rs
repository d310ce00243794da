//! Property-based tests for client-side template filtering.
//!
//! The derived view must equal the intersection of the text-match subset
//! and the tag-containment subset, and must never shrink or mutate the
//! underlying list.

use chrono::Utc;
use mailforge_core::{TemplateFilter, TemplateMeta};
use proptest::prelude::*;
use uuid::Uuid;

// ========== Strategies ==========

/// Strategy for generating template names
fn arb_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,14}"
}

/// Strategy for generating subject lines
fn arb_subject() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ]{0,16}"
}

/// Strategy for generating tag sets
fn arb_tags() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,6}", 0..4)
}

/// Strategy for generating a template summary
fn arb_meta() -> impl Strategy<Value = TemplateMeta> {
    (arb_name(), arb_subject(), arb_tags()).prop_map(|(name, subject, tags)| TemplateMeta {
        id: Uuid::new_v4(),
        name,
        subject,
        tags,
        updated_at: Utc::now(),
    })
}

/// Strategy for generating a template list
fn arb_metas() -> impl Strategy<Value = Vec<TemplateMeta>> {
    prop::collection::vec(arb_meta(), 0..12)
}

/// Short free-text filters, biased towards occasional matches
fn arb_filter_text() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-zA-Z]{1,3}"]
}

/// Required-tag filters drawn from the same alphabet as template tags
fn arb_filter_tags() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,6}", 0..3)
}

// ========== Properties ==========

proptest! {
    /// The conjunctive view equals the intersection of the two subsets.
    #[test]
    fn visible_set_is_the_intersection(
        metas in arb_metas(),
        text in arb_filter_text(),
        tags in arb_filter_tags(),
    ) {
        let both = TemplateFilter::new().with_text(text.clone()).with_tags(tags.clone());
        let text_only = TemplateFilter::new().with_text(text);
        let tags_only = TemplateFilter::new().with_tags(tags);

        let visible: Vec<Uuid> = metas.iter().filter(|m| both.matches(m)).map(|m| m.id).collect();
        let expected: Vec<Uuid> = metas
            .iter()
            .filter(|m| text_only.matches(m) && tags_only.matches(m))
            .map(|m| m.id)
            .collect();

        prop_assert_eq!(visible, expected);
    }

    /// An empty filter constrains nothing.
    #[test]
    fn empty_filter_passes_every_template(metas in arb_metas()) {
        let filter = TemplateFilter::new();
        prop_assert!(metas.iter().all(|m| filter.matches(m)));
    }

    /// Text matching is case-insensitive over name, subject, and tags.
    #[test]
    fn text_match_ignores_case(meta in arb_meta(), upper in any::<bool>()) {
        let needle = if upper {
            meta.name.to_uppercase()
        } else {
            meta.name.to_lowercase()
        };
        let filter = TemplateFilter::new().with_text(needle);
        prop_assert!(filter.matches(&meta));
    }

    /// Every template selected by a tag filter carries all required tags.
    #[test]
    fn tag_selection_implies_containment(
        metas in arb_metas(),
        tags in arb_filter_tags(),
    ) {
        let filter = TemplateFilter::new().with_tags(tags.clone());
        for meta in metas.iter().filter(|m| filter.matches(m)) {
            for required in &tags {
                prop_assert!(meta.tags.contains(required));
            }
        }
    }

    /// Filtering never mutates the list it derives from.
    #[test]
    fn filtering_is_pure(metas in arb_metas(), text in arb_filter_text()) {
        let before = metas.clone();
        let filter = TemplateFilter::new().with_text(text);
        let _ = metas.iter().filter(|m| filter.matches(m)).count();
        prop_assert_eq!(metas, before);
    }
}
