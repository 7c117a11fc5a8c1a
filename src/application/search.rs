use crate::domain::entities::document::Document;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use crate::domain::ports::{SharedDocs, SharedIndex};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub document: Document,
    pub score: f64,
}

pub struct SearchUseCase {
    docs: SharedDocs,
    embedder: Arc<dyn EmbeddingProvider>,
    index: SharedIndex,
}

impl SearchUseCase {
    pub fn new(docs: SharedDocs, embedder: Arc<dyn EmbeddingProvider>, index: SharedIndex) -> Self {
        Self {
            docs,
            embedder,
            index,
        }
    }

    pub async fn semantic_search(
        &self,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<SearchHit>, DomainError> {
        if top_k == 0 {
            return Err(DomainError::InvalidInput("top_k must be positive".into()));
        }

        let vectors = self
            .embedder
            .embed(&[query.to_string()], InputType::Query)
            .await?;
        let query_vector = match vectors.into_iter().next() {
            Some(v) if !v.is_empty() => v,
            _ => return Ok(vec![]),
        };

        let ranked = {
            let index = self
                .index
                .read()
                .map_err(|_| DomainError::Internal("index lock poisoned".into()))?;
            index.search(&query_vector, top_k)?
        };

        let repo = self
            .docs
            .read()
            .map_err(|_| DomainError::Internal("document lock poisoned".into()))?;
        let mut hits = Vec::new();
        for (id, score) in ranked {
            if let Some(document) = repo.get_by_id(&id)? {
                hits.push(SearchHit { document, score });
            }
        }
        Ok(hits)
    }
}
