use std::collections::HashSet;

use chrono::{TimeDelta, TimeZone};
use docstash::{memory::InMemoryStore, prelude::*};

fn author(id: &str) -> Author {
    Author::new(id, "Author Name")
}

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 10, hour, 0, 0).unwrap()
}

fn ids(documents: &[Document]) -> HashSet<String> {
    documents
        .iter()
        .filter_map(|document| document.id.clone())
        .collect()
}

async fn seeded() -> (DocumentStore<InMemoryStore>, Document, Document) {
    let store = DocumentStore::new(InMemoryStore::new());

    let first = store
        .save(
            Document::builder()
                .title("Title")
                .content("This is the content of the document.")
                .author(author("author1"))
                .created(at(9))
                .build(),
        )
        .await
        .unwrap();

    let second = store
        .save(
            Document::builder()
                .title("Another title")
                .content("More content here.")
                .author(author("author1"))
                .created(at(12))
                .build(),
        )
        .await
        .unwrap();

    (store, first, second)
}

#[tokio::test]
async fn save_then_find_round_trips() {
    let (store, first, _) = seeded().await;

    let id = first.id.as_deref().unwrap();
    assert!(!id.is_empty());
    assert_eq!(store.find_by_id(id).await.unwrap(), Some(first));
}

#[tokio::test]
async fn find_unknown_id_is_none() {
    let (store, _, _) = seeded().await;
    assert_eq!(store.find_by_id("never-used").await.unwrap(), None);
}

#[tokio::test]
async fn save_keeps_created_untouched() {
    let store = DocumentStore::new(InMemoryStore::new());

    let undated = store
        .save(Document::builder().title("No date").author(author("a")).build())
        .await
        .unwrap();
    let dated = store
        .save(Document::builder().title("Dated").author(author("a")).created(at(7)).build())
        .await
        .unwrap();

    assert_eq!(undated.created, None);
    assert_eq!(dated.created, Some(at(7)));
}

#[tokio::test]
async fn saving_existing_id_overwrites_in_place() {
    let (store, first, _) = seeded().await;

    let mut edited = first.clone();
    edited.title = Some("Edited".to_string());
    let saved = store.save(edited).await.unwrap();

    assert_eq!(saved.id, first.id);
    assert_eq!(store.count().await.unwrap(), 2);

    let stored = store.find_by_id(first.id.as_deref().unwrap()).await.unwrap().unwrap();
    assert_eq!(stored.title.as_deref(), Some("Edited"));
    assert_eq!(stored.created, first.created);
}

#[tokio::test]
async fn saving_unknown_id_generates_a_new_one() {
    let (store, _, _) = seeded().await;

    let saved = store
        .save(Document::builder().id("made-up").title("Fresh").author(author("a")).build())
        .await
        .unwrap();

    assert_ne!(saved.id.as_deref(), Some("made-up"));
    assert_eq!(store.find_by_id("made-up").await.unwrap(), None);
    assert_eq!(store.count().await.unwrap(), 3);
}

#[tokio::test]
async fn empty_search_returns_everything_once() {
    let (store, first, second) = seeded().await;

    let all = store.search(&SearchRequest::new()).await.unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(ids(&all), ids(&[first, second]));
}

#[tokio::test]
async fn title_prefix_search() {
    let (store, first, _) = seeded().await;
    store
        .save(Document::builder().title("Subtitle").author(author("author1")).build())
        .await
        .unwrap();

    let hits = store
        .search(&SearchRequest::builder().title_prefixes(["Tit"]).build())
        .await
        .unwrap();

    assert_eq!(ids(&hits), ids(&[first]));
}

#[tokio::test]
async fn content_substring_search() {
    let (store, first, second) = seeded().await;
    store
        .save(Document::builder().content("no match here").author(author("author1")).build())
        .await
        .unwrap();

    let hits = store
        .search(&SearchRequest::builder().contains_contents(["content"]).build())
        .await
        .unwrap();

    assert_eq!(ids(&hits), ids(&[first, second]));
}

#[tokio::test]
async fn author_search_with_no_matching_author_is_empty() {
    let (store, _, _) = seeded().await;

    let hits = store
        .search(&SearchRequest::builder().author_ids(["author2"]).build())
        .await
        .unwrap();

    assert!(hits.is_empty());
}

#[tokio::test]
async fn created_window_is_inclusive() {
    let (store, first, second) = seeded().await;
    store
        .save(Document::builder().title("Late").author(author("author1")).created(at(18)).build())
        .await
        .unwrap();

    let hits = store
        .search(&SearchRequest::builder().created_from(at(9)).created_to(at(12)).build())
        .await
        .unwrap();

    assert_eq!(ids(&hits), ids(&[first, second.clone()]));

    let narrowed = store
        .search(
            &SearchRequest::builder()
                .created_from(at(9) + TimeDelta::seconds(1))
                .created_to(at(12))
                .build(),
        )
        .await
        .unwrap();

    assert_eq!(ids(&narrowed), ids(&[second]));
}

#[tokio::test]
async fn criteria_are_combined_with_and() {
    let (store, _, second) = seeded().await;

    let hits = store
        .search(
            &SearchRequest::builder()
                .title_prefixes(["Title", "Another"])
                .contains_contents(["More"])
                .author_ids(["author1"])
                .build(),
        )
        .await
        .unwrap();

    assert_eq!(ids(&hits), ids(&[second]));
}

#[tokio::test]
async fn authorless_documents_are_unmatched_by_default() {
    let (store, first, second) = seeded().await;
    let orphan = store
        .save(Document::builder().title("Orphan").build())
        .await
        .unwrap();

    let by_author = store
        .search(&SearchRequest::builder().author_ids(["author1"]).build())
        .await
        .unwrap();
    let by_title = store
        .search(&SearchRequest::builder().title_prefixes(["Orph"]).build())
        .await
        .unwrap();

    assert_eq!(ids(&by_author), ids(&[first, second]));
    assert_eq!(ids(&by_title), ids(&[orphan]));
}

#[tokio::test]
async fn reject_policy_leaves_store_unchanged() {
    let store = DocumentStore::with_options(
        InMemoryStore::new(),
        StoreOptions::default().with_missing_author(MissingAuthorPolicy::Reject),
    );

    let result = store.save(Document::builder().title("Orphan").build()).await;

    assert!(matches!(result, Err(DocumentStoreError::InvalidDocument(_))));
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn documents_serialize_to_json() {
    let (_, first, _) = seeded().await;

    let value = first.to_json().unwrap();
    assert_eq!(value["author"]["id"], serde_json::json!("author1"));
    assert_eq!(Document::from_json(value).unwrap(), first);
}
