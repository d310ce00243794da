//! End-to-end template manager flows over the in-memory backend.
//!
//! These tests exercise the documented sequencing contracts: every mutation
//! is followed by a full list refresh before the operation resolves, the
//! current record tracks loads/saves/meta updates, and filtering derives a
//! pure view of the cached list.

use std::sync::Arc;

use mailforge_core::{
    DesignDocument, MemoryBackend, MetaPatch, SaveTemplate, TemplateManager,
};
use serde_json::json;
use uuid::Uuid;

fn design(value: serde_json::Value) -> DesignDocument {
    DesignDocument::new(value)
}

fn create_manager() -> (TemplateManager, MemoryBackend) {
    let backend = MemoryBackend::new();
    let manager = TemplateManager::detached(Arc::new(backend.clone()));
    (manager, backend)
}

#[tokio::test]
async fn first_save_assigns_an_id_and_appears_in_the_list() {
    let (manager, _backend) = create_manager();

    let record = manager
        .save(SaveTemplate::new("Welcome", "Hi", design(json!({"body": {}}))))
        .await
        .unwrap();

    assert!(!record.id.is_nil());
    let templates = manager.templates().await;
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0].id, record.id);
}

#[tokio::test]
async fn meta_update_is_visible_in_the_list_and_in_current() {
    let (manager, _backend) = create_manager();
    let record = manager
        .save(SaveTemplate::new("Welcome", "Hi", design(json!({"body": {}}))))
        .await
        .unwrap();

    manager
        .update_meta(
            MetaPatch::new(record.id)
                .with_name("Welcome Updated")
                .with_tags(vec!["onboarding".to_string(), "welcome".to_string()]),
        )
        .await
        .unwrap()
        .unwrap();

    let templates = manager.templates().await;
    assert_eq!(templates[0].name, "Welcome Updated");
    assert!(templates[0].tags.contains(&"onboarding".to_string()));

    let current = manager.current().await.unwrap();
    assert_eq!(current.name, "Welcome Updated");
    assert_eq!(current.subject, "Hi");
}

#[tokio::test]
async fn saving_a_new_design_produces_a_version_on_load() {
    let (manager, _backend) = create_manager();
    let record = manager
        .save(SaveTemplate::new("Welcome", "Hi", design(json!({"body": {}}))))
        .await
        .unwrap();

    manager
        .save(
            SaveTemplate::new("Welcome", "Hi", design(json!({"body": {"rows": 1}})))
                .with_id(record.id),
        )
        .await
        .unwrap();

    let loaded = manager.load(record.id).await.unwrap();
    assert!(!loaded.versions.is_empty());
    assert_eq!(loaded.design, design(json!({"body": {"rows": 1}})));
    assert_eq!(loaded.versions[0].design, design(json!({"body": {}})));
}

#[tokio::test]
async fn text_and_tag_filters_each_select_their_template() {
    let (manager, _backend) = create_manager();
    manager
        .save(
            SaveTemplate::new("Promo", "Sale", design(json!({})))
                .with_tags(vec!["promo".to_string()]),
        )
        .await
        .unwrap();
    manager
        .save(
            SaveTemplate::new("Newsletter", "Month", design(json!({})))
                .with_tags(vec!["news".to_string()]),
        )
        .await
        .unwrap();

    manager.set_filter("promo").await;
    let visible = manager.visible_templates().await;
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Promo");

    manager.set_filter("").await;
    manager.set_tag_filter(vec!["news".to_string()]).await;
    let visible = manager.visible_templates().await;
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Newsletter");
}

#[tokio::test]
async fn missing_ids_fail_with_not_found_and_release_the_busy_flag() {
    let (manager, _backend) = create_manager();

    let err = manager.load(Uuid::new_v4()).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(!manager.is_loading());
}

#[tokio::test]
async fn full_lifecycle_save_update_duplicate_remove() {
    let (manager, backend) = create_manager();

    let record = manager
        .save(
            SaveTemplate::new("Launch", "We are live", design(json!({"body": {"rows": 2}})))
                .with_tags(vec!["launch".to_string()]),
        )
        .await
        .unwrap();

    manager
        .update_meta(MetaPatch::new(record.id).with_subject("We are live!"))
        .await
        .unwrap()
        .unwrap();

    let copy = manager.duplicate(record.id).await.unwrap();
    assert_eq!(manager.templates().await.len(), 2);
    assert_eq!(copy.subject, "We are live!");
    assert!(copy.versions.is_empty());

    manager
        .send_test(record.id, "qa@example.com")
        .await
        .unwrap();
    assert_eq!(backend.sent_tests().await.len(), 1);

    manager.remove(record.id).await.unwrap();
    let remaining = manager.templates().await;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, copy.id);
    // current referenced the removed id and was cleared
    assert!(manager.current().await.is_none());
}

#[tokio::test]
async fn concurrent_saves_all_land_in_the_final_list() {
    let (manager, _backend) = create_manager();

    // Back-to-back operations interleave at backend awaits; the last
    // completed refresh determines the snapshot, which reflects all saves
    let (a, b) = tokio::join!(
        manager.save(SaveTemplate::new("A", "first", design(json!({})))),
        manager.save(SaveTemplate::new("B", "second", design(json!({})))),
    );
    a.unwrap();
    b.unwrap();

    manager.refresh().await.unwrap();
    assert_eq!(manager.templates().await.len(), 2);
    assert!(!manager.is_loading());
}
