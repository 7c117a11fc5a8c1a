//! Shared test helpers.

use ragstore::domain::entities::document::NewDocument;
use ragstore::infrastructure::embeddings::hashing::HashingProvider;
use ragstore::RagStore;
use std::path::Path;
use std::sync::Arc;

pub fn setup(dir: &Path) -> RagStore {
    RagStore::with_provider(dir, Arc::new(HashingProvider::default())).unwrap()
}

pub fn doc(id: &str, text: &str) -> NewDocument {
    NewDocument {
        id: Some(id.to_string()),
        text: text.to_string(),
        tags: vec![],
        metadata: None,
    }
}
