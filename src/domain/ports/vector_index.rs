use crate::domain::error::DomainError;
use std::path::Path;

/// Ranked search hit: document id plus cosine similarity in [-1, 1].
pub type ScoredId = (String, f64);

/// Capability set shared by every index backend: add, search, save, size.
///
/// Loading is an alternate constructor and lives on the concrete type.
/// Implementations perform no internal locking. `search` is a pure read
/// and may run concurrently; callers must serialize `add_documents` and
/// `save` against each other and against readers (see `SharedIndex`).
pub trait VectorIndex: Send + Sync {
    /// Fixed embedding dimension this index accepts.
    fn dim(&self) -> usize;

    /// Insert or overwrite vectors, paired positionally with ids.
    ///
    /// Validation is atomic: if any pair is rejected, nothing is
    /// inserted. Overwriting an existing id replaces its vector but
    /// keeps the original insertion rank.
    fn add_documents(&mut self, vectors: &[Vec<f32>], ids: &[String]) -> Result<(), DomainError>;

    /// Top-k ids by cosine similarity, sorted descending; ties broken
    /// by insertion order. Returns at most `min(top_k, len)` hits.
    fn search(&self, query: &[f32], top_k: usize) -> Result<Vec<ScoredId>, DomainError>;

    /// Write the full index state to `path` (atomic replace: the old
    /// snapshot survives a failed write).
    fn save(&self, path: &Path) -> Result<(), DomainError>;

    fn contains(&self, id: &str) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
