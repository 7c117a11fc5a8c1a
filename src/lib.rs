pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::ingest::IngestUseCase;
use crate::application::reindex::ReindexUseCase;
use crate::application::search::{SearchHit, SearchUseCase};
use crate::application::stats::{StatsUseCase, StoreStats};
use crate::domain::entities::document::{Document, NewDocument};
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::ports::vector_index::VectorIndex;
use crate::domain::ports::{SharedDocs, SharedIndex};
use crate::infrastructure::docstore::memory::InMemoryDocStore;
use crate::infrastructure::embeddings::hashing::HashingProvider;
use crate::infrastructure::embeddings::noop::NoopProvider;
use crate::infrastructure::embeddings::openai::OpenAiProvider;
use crate::infrastructure::embeddings::voyage::VoyageProvider;
use crate::infrastructure::index::linear::LinearIndex;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

const VECTORS_FILE: &str = "vectors.json";
const DOCUMENTS_FILE: &str = "documents.json";

pub struct RagStore {
    ingest_uc: IngestUseCase,
    search_uc: SearchUseCase,
    reindex_uc: ReindexUseCase,
    stats_uc: StatsUseCase,
    index: SharedIndex,
    docs: SharedDocs,
    vectors_path: PathBuf,
    documents_path: PathBuf,
}

impl RagStore {
    /// Open a store in `dir`, selecting the embedding provider from the
    /// environment (`RAGSTORE_EMBEDDING_PROVIDER` = hash | openai |
    /// voyage | noop; defaults to the offline hashing provider).
    /// `RAGSTORE_EMBEDDING_MODEL` and `RAGSTORE_EMBEDDING_BASE_URL`
    /// override the remote providers' model and endpoint.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, DomainError> {
        let provider =
            std::env::var("RAGSTORE_EMBEDDING_PROVIDER").unwrap_or_else(|_| "hash".into());
        let api_key = std::env::var("RAGSTORE_EMBEDDING_API_KEY").unwrap_or_default();
        let model = std::env::var("RAGSTORE_EMBEDDING_MODEL").ok();
        let base_url = std::env::var("RAGSTORE_EMBEDDING_BASE_URL").ok();

        let embedder: Arc<dyn EmbeddingProvider> = match provider.as_str() {
            "openai" => Arc::new(OpenAiProvider::new(api_key, model, base_url)),
            "voyage" => Arc::new(VoyageProvider::new(api_key, model, base_url)),
            "noop" => Arc::new(NoopProvider),
            _ => Arc::new(HashingProvider::default()),
        };

        Self::with_provider(dir, embedder)
    }

    pub fn with_provider(
        dir: impl AsRef<Path>,
        embedder: Arc<dyn EmbeddingProvider>,
    ) -> Result<Self, DomainError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir).map_err(|e| DomainError::Persistence {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;
        let vectors_path = dir.join(VECTORS_FILE);
        let documents_path = dir.join(DOCUMENTS_FILE);

        let index = if vectors_path.exists() {
            LinearIndex::load(&vectors_path)?
        } else {
            let dim = match embedder.dimension() {
                0 => infrastructure::embeddings::hashing::DEFAULT_DIM,
                d => d,
            };
            LinearIndex::new(dim)?
        };

        let provider_dim = embedder.dimension();
        if provider_dim > 0 && index.dim() != provider_dim {
            log::warn!(
                "Stored vectors have dimension {} but the embedding provider reports {}; \
                 searches against old vectors will not match new embeddings",
                index.dim(),
                provider_dim
            );
        }

        let repo = if documents_path.exists() {
            InMemoryDocStore::load(&documents_path)?
        } else {
            InMemoryDocStore::new()
        };

        let index: SharedIndex = Arc::new(RwLock::new(Box::new(index)));
        let docs: SharedDocs = Arc::new(RwLock::new(Box::new(repo)));

        Ok(Self {
            ingest_uc: IngestUseCase::new(docs.clone(), embedder.clone(), index.clone()),
            search_uc: SearchUseCase::new(docs.clone(), embedder.clone(), index.clone()),
            reindex_uc: ReindexUseCase::new(docs.clone(), embedder, index.clone()),
            stats_uc: StatsUseCase::new(docs.clone(), index.clone()),
            index,
            docs,
            vectors_path,
            documents_path,
        })
    }

    // Delegating methods
    pub async fn add_documents(
        &self,
        requests: Vec<NewDocument>,
    ) -> Result<Vec<Document>, DomainError> {
        self.ingest_uc.execute(requests).await
    }

    pub async fn search(&self, query: &str, top_k: usize) -> Result<Vec<SearchHit>, DomainError> {
        self.search_uc.semantic_search(query, top_k).await
    }

    pub async fn reindex(&self) -> Result<usize, DomainError> {
        self.reindex_uc.execute().await
    }

    pub fn stats(&self) -> Result<StoreStats, DomainError> {
        self.stats_uc.stats()
    }

    pub fn export(&self) -> Result<Vec<Document>, DomainError> {
        self.docs
            .read()
            .map_err(|_| DomainError::Internal("document lock poisoned".into()))?
            .all()
    }

    /// Flush both snapshots to disk. Writes are atomic per file.
    pub fn persist(&self) -> Result<(), DomainError> {
        self.index
            .read()
            .map_err(|_| DomainError::Internal("index lock poisoned".into()))?
            .save(&self.vectors_path)?;
        self.docs
            .read()
            .map_err(|_| DomainError::Internal("document lock poisoned".into()))?
            .save(&self.documents_path)?;
        Ok(())
    }
}
