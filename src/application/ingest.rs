use crate::domain::entities::document::{Document, NewDocument};
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use crate::domain::ports::{SharedDocs, SharedIndex};
use std::sync::Arc;

pub struct IngestUseCase {
    docs: SharedDocs,
    embedder: Arc<dyn EmbeddingProvider>,
    index: SharedIndex,
}

impl IngestUseCase {
    pub fn new(docs: SharedDocs, embedder: Arc<dyn EmbeddingProvider>, index: SharedIndex) -> Self {
        Self {
            docs,
            embedder,
            index,
        }
    }

    /// Store payloads, then embed and index them in one batch. A failed
    /// or unavailable embedding keeps the documents but leaves them
    /// unindexed; `reindex` picks them up later.
    pub async fn execute(&self, requests: Vec<NewDocument>) -> Result<Vec<Document>, DomainError> {
        if requests.is_empty() {
            return Ok(vec![]);
        }

        let documents: Vec<Document> = requests.into_iter().map(Document::new).collect();
        {
            let mut repo = self
                .docs
                .write()
                .map_err(|_| DomainError::Internal("document lock poisoned".into()))?;
            for document in &documents {
                repo.add(document.clone())?;
            }
        }

        let texts: Vec<String> = documents.iter().map(|d| d.embeddable_text()).collect();
        match self.embedder.embed(&texts, InputType::Document).await {
            Ok(vectors) if vectors.iter().all(|v| !v.is_empty()) => {
                let ids: Vec<String> = documents.iter().map(|d| d.id.clone()).collect();
                let mut index = self
                    .index
                    .write()
                    .map_err(|_| DomainError::Internal("index lock poisoned".into()))?;
                index.add_documents(&vectors, &ids)?;
            }
            Ok(_) => {
                log::debug!("Embedding provider returned no vectors; documents stored unindexed")
            }
            Err(e) => log::warn!("Embedding failed, documents stored unindexed: {e}"),
        }

        Ok(documents)
    }
}
