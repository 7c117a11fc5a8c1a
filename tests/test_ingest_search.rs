mod common;

use common::{doc, setup};
use ragstore::infrastructure::embeddings::noop::NoopProvider;
use ragstore::RagStore;
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn test_add_and_search() {
    let dir = TempDir::new().unwrap();
    let store = setup(dir.path());

    store
        .add_documents(vec![
            doc("rust", "rust borrow checker ownership"),
            doc("python", "python asyncio event loop"),
            doc("sql", "postgres query planner indexes"),
        ])
        .await
        .unwrap();

    let stats = store.stats().unwrap();
    assert_eq!(stats.documents, 3);
    assert_eq!(stats.indexed, 3);

    // Querying with a stored document's exact text must rank it first
    // with similarity 1.0 (the hashing embedder is deterministic).
    let hits = store
        .search("rust borrow checker ownership", 2)
        .await
        .unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].document.id, "rust");
    assert!((hits[0].score - 1.0).abs() < 1e-6);
    assert!(hits[0].score >= hits[1].score);
}

#[tokio::test]
async fn test_search_empty_store() {
    let dir = TempDir::new().unwrap();
    let store = setup(dir.path());
    let hits = store.search("anything", 5).await.unwrap();
    assert!(hits.is_empty());
}

#[tokio::test]
async fn test_persist_and_reopen() {
    let dir = TempDir::new().unwrap();

    let store = setup(dir.path());
    store
        .add_documents(vec![
            doc("a", "alpha beta"),
            doc("b", "gamma delta"),
            doc("c", "epsilon zeta"),
        ])
        .await
        .unwrap();
    let before = store.search("gamma delta", 3).await.unwrap();
    store.persist().unwrap();
    drop(store);

    let reopened = setup(dir.path());
    let stats = reopened.stats().unwrap();
    assert_eq!(stats.documents, 3);
    assert_eq!(stats.indexed, 3);

    let after = reopened.search("gamma delta", 3).await.unwrap();
    assert_eq!(before.len(), after.len());
    for (x, y) in before.iter().zip(after.iter()) {
        assert_eq!(x.document.id, y.document.id);
        assert_eq!(x.score, y.score);
    }
    assert_eq!(after[0].document.id, "b");
}

#[tokio::test]
async fn test_noop_provider_stores_but_does_not_index() {
    let dir = TempDir::new().unwrap();
    let store = RagStore::with_provider(dir.path(), Arc::new(NoopProvider)).unwrap();

    store
        .add_documents(vec![doc("x", "some text")])
        .await
        .unwrap();

    let stats = store.stats().unwrap();
    assert_eq!(stats.documents, 1);
    assert_eq!(stats.indexed, 0);

    let hits = store.search("some text", 5).await.unwrap();
    assert!(hits.is_empty());
}

#[tokio::test]
async fn test_generated_ids_are_unique() {
    let dir = TempDir::new().unwrap();
    let store = setup(dir.path());

    let documents = store
        .add_documents(vec![
            ragstore::domain::entities::document::NewDocument {
                text: "first".into(),
                ..Default::default()
            },
            ragstore::domain::entities::document::NewDocument {
                text: "second".into(),
                ..Default::default()
            },
        ])
        .await
        .unwrap();

    assert_eq!(documents.len(), 2);
    assert_ne!(documents[0].id, documents[1].id);
}

#[tokio::test]
async fn test_export_preserves_insertion_order() {
    let dir = TempDir::new().unwrap();
    let store = setup(dir.path());

    store
        .add_documents(vec![doc("one", "1"), doc("two", "2"), doc("three", "3")])
        .await
        .unwrap();

    let exported = store.export().unwrap();
    let order: Vec<&str> = exported.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(order, vec!["one", "two", "three"]);
}
