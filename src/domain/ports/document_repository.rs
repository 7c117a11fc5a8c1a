use crate::domain::entities::document::Document;
use crate::domain::error::DomainError;
use std::path::Path;

/// Payload lookup keyed by document id. The vector index stores ids and
/// vectors only; everything a search result displays comes from here.
pub trait DocumentRepository: Send + Sync {
    /// Insert or overwrite a document, keeping insertion order.
    fn add(&mut self, document: Document) -> Result<(), DomainError>;

    fn get_by_id(&self, id: &str) -> Result<Option<Document>, DomainError>;

    /// All documents in insertion order.
    fn all(&self) -> Result<Vec<Document>, DomainError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn save(&self, path: &Path) -> Result<(), DomainError>;
}
