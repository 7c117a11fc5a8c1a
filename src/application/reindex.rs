use crate::domain::entities::document::Document;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use crate::domain::ports::{SharedDocs, SharedIndex};
use std::sync::Arc;

pub struct ReindexUseCase {
    docs: SharedDocs,
    embedder: Arc<dyn EmbeddingProvider>,
    index: SharedIndex,
}

impl ReindexUseCase {
    pub fn new(docs: SharedDocs, embedder: Arc<dyn EmbeddingProvider>, index: SharedIndex) -> Self {
        Self {
            docs,
            embedder,
            index,
        }
    }

    /// Embed and index every document missing a vector. Returns the
    /// number of documents indexed.
    pub async fn execute(&self) -> Result<usize, DomainError> {
        let pending: Vec<Document> = {
            let repo = self
                .docs
                .read()
                .map_err(|_| DomainError::Internal("document lock poisoned".into()))?;
            let index = self
                .index
                .read()
                .map_err(|_| DomainError::Internal("index lock poisoned".into()))?;
            repo.all()?
                .into_iter()
                .filter(|d| !index.contains(&d.id))
                .collect()
        };
        if pending.is_empty() {
            return Ok(0);
        }

        let mut indexed = 0;
        // Batch embed in chunks of 32
        for chunk in pending.chunks(32) {
            let texts: Vec<String> = chunk.iter().map(|d| d.embeddable_text()).collect();
            let vectors = self.embedder.embed(&texts, InputType::Document).await?;
            if vectors.iter().any(|v| v.is_empty()) {
                log::debug!("Embedding provider returned no vectors; nothing to reindex");
                return Ok(indexed);
            }
            let ids: Vec<String> = chunk.iter().map(|d| d.id.clone()).collect();
            let mut index = self
                .index
                .write()
                .map_err(|_| DomainError::Internal("index lock poisoned".into()))?;
            index.add_documents(&vectors, &ids)?;
            indexed += chunk.len();
        }

        Ok(indexed)
    }
}
