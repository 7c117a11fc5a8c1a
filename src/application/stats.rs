use crate::domain::error::DomainError;
use crate::domain::ports::{SharedDocs, SharedIndex};
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct StoreStats {
    pub documents: usize,
    pub indexed: usize,
    pub dim: usize,
}

pub struct StatsUseCase {
    docs: SharedDocs,
    index: SharedIndex,
}

impl StatsUseCase {
    pub fn new(docs: SharedDocs, index: SharedIndex) -> Self {
        Self { docs, index }
    }

    pub fn stats(&self) -> Result<StoreStats, DomainError> {
        let repo = self
            .docs
            .read()
            .map_err(|_| DomainError::Internal("document lock poisoned".into()))?;
        let index = self
            .index
            .read()
            .map_err(|_| DomainError::Internal("index lock poisoned".into()))?;
        Ok(StoreStats {
            documents: repo.len(),
            indexed: index.len(),
            dim: index.dim(),
        })
    }
}
