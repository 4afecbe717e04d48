// Unit tests for TutorialService against an in-memory repository

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use catalog_api::modules::tutorials::{TutorialPayload, TutorialService};
use helpers::memory::InMemoryTutorialRepository;

fn payload(title: &str, description: Option<&str>, published: bool) -> TutorialPayload {
    TutorialPayload {
        title: title.to_string(),
        description: description.map(str::to_string),
        published,
    }
}

fn service() -> (Arc<InMemoryTutorialRepository>, TutorialService) {
    let repo = Arc::new(InMemoryTutorialRepository::new());
    let service = TutorialService::new(repo.clone());
    (repo, service)
}

#[tokio::test]
async fn create_forces_published_false() {
    let (_, service) = service();

    let created = service
        .create(payload("Rust Basics", Some("Ownership"), true))
        .await
        .unwrap();

    assert!(!created.published);
    assert_eq!(created.title, "Rust Basics");
    assert_eq!(created.description.as_deref(), Some("Ownership"));
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let (_, service) = service();

    let created = service
        .create(payload("Rust Basics", Some("Ownership"), false))
        .await
        .unwrap();
    let fetched = service.get_by_id(created.id).await.unwrap().unwrap();

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn get_all_without_filter_returns_everything() {
    let (_, service) = service();

    service.create(payload("One", None, false)).await.unwrap();
    service.create(payload("Two", None, false)).await.unwrap();

    let all = service.get_all(None).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn get_all_with_filter_matches_substring_case_sensitively() {
    let (_, service) = service();

    service
        .create(payload("Spring Boot Intro", None, false))
        .await
        .unwrap();
    service
        .create(payload("Rust Bootcamp", None, false))
        .await
        .unwrap();
    service
        .create(payload("Plain HTML", None, false))
        .await
        .unwrap();

    let matched = service.get_all(Some("Boot")).await.unwrap();
    assert_eq!(matched.len(), 2);
    assert!(matched.iter().all(|t| t.title.contains("Boot")));

    let lowercase = service.get_all(Some("boot")).await.unwrap();
    assert!(lowercase.is_empty());
}

#[tokio::test]
async fn get_by_published_filters_on_flag() {
    let (_, service) = service();

    let created = service.create(payload("Draft", None, false)).await.unwrap();
    service
        .update(created.id, payload("Draft", None, true))
        .await
        .unwrap();
    service.create(payload("Other", None, false)).await.unwrap();

    let published = service.get_by_published(true).await.unwrap();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].id, created.id);

    let unpublished = service.get_by_published(false).await.unwrap();
    assert_eq!(unpublished.len(), 1);
}

#[tokio::test]
async fn update_overwrites_fields_and_keeps_id() {
    let (_, service) = service();

    let created = service
        .create(payload("Old Title", Some("Old"), false))
        .await
        .unwrap();

    let updated = service
        .update(created.id, payload("New Title", Some("New"), true))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "New Title");
    assert_eq!(updated.description.as_deref(), Some("New"));
    assert!(updated.published);
}

#[tokio::test]
async fn update_missing_id_returns_none_and_creates_nothing() {
    let (repo, service) = service();

    let result = service.update(99, payload("Ghost", None, true)).await.unwrap();

    assert!(result.is_none());
    assert_eq!(repo.len(), 0);
}

#[tokio::test]
async fn delete_absent_id_is_not_an_error() {
    let (_, service) = service();

    service.delete(42).await.unwrap();
}

#[tokio::test]
async fn delete_all_clears_the_store() {
    let (repo, service) = service();

    service.create(payload("One", None, false)).await.unwrap();
    service.create(payload("Two", None, false)).await.unwrap();

    service.delete_all().await.unwrap();
    assert_eq!(repo.len(), 0);
}
