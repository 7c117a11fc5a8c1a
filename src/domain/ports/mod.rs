pub mod document_repository;
pub mod embedding_port;
pub mod vector_index;

use std::sync::{Arc, RwLock};

/// Shared handle to the vector index. The index itself performs no
/// locking; this wrapper is the single point of synchronization for
/// the owning service (readers may overlap, writers must not).
pub type SharedIndex = Arc<RwLock<Box<dyn vector_index::VectorIndex>>>;

/// Shared handle to the document repository, synchronized the same way.
pub type SharedDocs = Arc<RwLock<Box<dyn document_repository::DocumentRepository>>>;
