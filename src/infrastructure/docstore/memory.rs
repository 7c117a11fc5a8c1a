use crate::domain::entities::document::Document;
use crate::domain::error::DomainError;
use crate::domain::ports::document_repository::DocumentRepository;
use crate::infrastructure::index::snapshot;
use std::collections::HashMap;
use std::path::Path;

/// In-memory document repository, persisted as a JSON array alongside
/// the vector snapshot. Same ordering rule as the index: overwriting an
/// id keeps its original position.
pub struct InMemoryDocStore {
    documents: Vec<Document>,
    by_id: HashMap<String, usize>,
}

impl InMemoryDocStore {
    pub fn new() -> Self {
        Self {
            documents: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, DomainError> {
        let data =
            std::fs::read_to_string(path).map_err(|e| snapshot::persistence(path, e))?;
        let documents: Vec<Document> =
            serde_json::from_str(&data).map_err(|e| snapshot::persistence(path, e))?;

        let mut store = Self::new();
        for document in documents {
            store.put(document);
        }
        Ok(store)
    }

    fn put(&mut self, document: Document) {
        match self.by_id.get(&document.id) {
            Some(&slot) => self.documents[slot] = document,
            None => {
                self.by_id.insert(document.id.clone(), self.documents.len());
                self.documents.push(document);
            }
        }
    }
}

impl Default for InMemoryDocStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRepository for InMemoryDocStore {
    fn add(&mut self, document: Document) -> Result<(), DomainError> {
        self.put(document);
        Ok(())
    }

    fn get_by_id(&self, id: &str) -> Result<Option<Document>, DomainError> {
        Ok(self.by_id.get(id).map(|&slot| self.documents[slot].clone()))
    }

    fn all(&self) -> Result<Vec<Document>, DomainError> {
        Ok(self.documents.clone())
    }

    fn len(&self) -> usize {
        self.documents.len()
    }

    fn save(&self, path: &Path) -> Result<(), DomainError> {
        let data = serde_json::to_string_pretty(&self.documents)
            .map_err(|e| snapshot::persistence(path, e))?;
        snapshot::write_atomic(path, &data)
    }
}
