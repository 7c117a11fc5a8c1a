use crate::domain::error::DomainError;
use crate::domain::ports::vector_index::{ScoredId, VectorIndex};
use crate::infrastructure::index::snapshot::{self, Snapshot, SnapshotItem, SNAPSHOT_VERSION};
use std::collections::HashMap;
use std::path::Path;

/// Brute-force vector index: a linear scan over every stored vector.
///
/// O(n * dim) per query, which is fine for the corpus sizes this store
/// targets (thousands to low tens of thousands of vectors). Entries keep
/// their insertion order so that equal scores rank deterministically.
#[derive(Debug)]
pub struct LinearIndex {
    dim: usize,
    entries: Vec<IndexEntry>,
    slots: HashMap<String, usize>,
}

#[derive(Debug)]
struct IndexEntry {
    id: String,
    vector: Vec<f32>,
}

impl LinearIndex {
    pub fn new(dim: usize) -> Result<Self, DomainError> {
        if dim == 0 {
            return Err(DomainError::InvalidDimension(dim));
        }
        Ok(Self {
            dim,
            entries: Vec::new(),
            slots: HashMap::new(),
        })
    }

    /// Alternate constructor: rebuild an index from a snapshot file.
    /// Accepts both versioned and legacy (unversioned) snapshots.
    pub fn load(path: &Path) -> Result<Self, DomainError> {
        let snapshot = snapshot::read(path)?;
        if snapshot.version > SNAPSHOT_VERSION {
            return Err(snapshot::persistence(
                path,
                format!("unsupported snapshot version {}", snapshot.version),
            ));
        }

        let mut index = Self::new(snapshot.dim)?;
        for item in snapshot.items {
            // item lengths were validated against dim on read
            index.insert(item.id, item.vector);
        }
        log::info!(
            "Loaded {} vectors (dim {}) from {}",
            index.len(),
            index.dim,
            path.display()
        );
        Ok(index)
    }

    fn insert(&mut self, id: String, vector: Vec<f32>) {
        match self.slots.get(&id) {
            // Overwrite in place: the original rank is kept on purpose so
            // persisted ordering stays stable across updates.
            Some(&slot) => self.entries[slot].vector = vector,
            None => {
                self.slots.insert(id.clone(), self.entries.len());
                self.entries.push(IndexEntry { id, vector });
            }
        }
    }

    fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
        let mut dot = 0.0_f64;
        let mut norm_a = 0.0_f64;
        let mut norm_b = 0.0_f64;
        for (x, y) in a.iter().zip(b.iter()) {
            let x = *x as f64;
            let y = *y as f64;
            dot += x * y;
            norm_a += x * x;
            norm_b += y * y;
        }
        let denom = norm_a.sqrt() * norm_b.sqrt();
        // A zero-norm vector scores 0 rather than failing the search.
        if denom == 0.0 {
            0.0
        } else {
            dot / denom
        }
    }
}

impl VectorIndex for LinearIndex {
    fn dim(&self) -> usize {
        self.dim
    }

    fn add_documents(&mut self, vectors: &[Vec<f32>], ids: &[String]) -> Result<(), DomainError> {
        if vectors.len() != ids.len() {
            return Err(DomainError::LengthMismatch {
                vectors: vectors.len(),
                ids: ids.len(),
            });
        }
        // Validate the whole batch before touching any state, so a bad
        // pair cannot leave a partial insert behind.
        for (vector, id) in vectors.iter().zip(ids.iter()) {
            if vector.len() != self.dim {
                return Err(DomainError::DimensionMismatch {
                    id: id.clone(),
                    expected: self.dim,
                    actual: vector.len(),
                });
            }
        }

        for (vector, id) in vectors.iter().zip(ids.iter()) {
            self.insert(id.clone(), vector.clone());
        }
        log::debug!("Added {} vectors, total {}", vectors.len(), self.len());
        Ok(())
    }

    fn search(&self, query: &[f32], top_k: usize) -> Result<Vec<ScoredId>, DomainError> {
        if query.len() != self.dim {
            return Err(DomainError::DimensionMismatch {
                id: "query".to_string(),
                expected: self.dim,
                actual: query.len(),
            });
        }

        let mut scores: Vec<ScoredId> = self
            .entries
            .iter()
            .map(|entry| {
                let similarity = Self::cosine_similarity(query, &entry.vector);
                (entry.id.clone(), similarity)
            })
            .collect();

        // Stable sort: equal scores keep insertion order, so identical
        // inputs always produce identical rankings.
        scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scores.truncate(top_k);
        Ok(scores)
    }

    fn save(&self, path: &Path) -> Result<(), DomainError> {
        let out = Snapshot {
            version: SNAPSHOT_VERSION,
            dim: self.dim,
            items: self
                .entries
                .iter()
                .map(|entry| SnapshotItem {
                    id: entry.id.clone(),
                    vector: entry.vector.clone(),
                })
                .collect(),
        };
        snapshot::write(path, &out)?;
        log::info!("Saved {} vectors to {}", self.len(), path.display());
        Ok(())
    }

    fn contains(&self, id: &str) -> bool {
        self.slots.contains_key(id)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_zero_dim_rejected() {
        let result = LinearIndex::new(0);
        assert!(matches!(result, Err(DomainError::InvalidDimension(0))));
    }

    #[test]
    fn test_add_and_search() {
        let mut index = LinearIndex::new(3).unwrap();
        index
            .add_documents(
                &[
                    vec![1.0, 0.0, 0.0],
                    vec![0.0, 1.0, 0.0],
                    vec![0.0, 0.0, 1.0],
                ],
                &ids(&["a", "b", "c"]),
            )
            .unwrap();
        assert_eq!(index.len(), 3);

        let results = index.search(&[1.0, 0.0, 0.0], 2).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, "a");
        assert!((results[0].1 - 1.0).abs() < 1e-9);
        // b and c both score 0; insertion order breaks the tie
        assert_eq!(results[1].0, "b");
        assert!(results[1].1.abs() < 1e-9);
    }

    #[test]
    fn test_empty_store_search() {
        let index = LinearIndex::new(3).unwrap();
        let results = index.search(&[1.0, 0.0, 0.0], 5).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_top_k_larger_than_store() {
        let mut index = LinearIndex::new(2).unwrap();
        index
            .add_documents(&[vec![1.0, 0.0], vec![0.0, 1.0]], &ids(&["a", "b"]))
            .unwrap();
        let results = index.search(&[1.0, 0.0], 10).unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_dimension_mismatch_names_id() {
        let mut index = LinearIndex::new(3).unwrap();
        let err = index
            .add_documents(
                &[vec![1.0, 0.0, 0.0], vec![1.0, 0.0]],
                &ids(&["good", "bad"]),
            )
            .unwrap_err();
        match err {
            DomainError::DimensionMismatch { id, expected, actual } => {
                assert_eq!(id, "bad");
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
        // Atomic batch: the valid pair must not have been inserted either.
        assert_eq!(index.len(), 0);
    }

    #[test]
    fn test_length_mismatch() {
        let mut index = LinearIndex::new(2).unwrap();
        let err = index
            .add_documents(&[vec![1.0, 0.0]], &ids(&["a", "b"]))
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::LengthMismatch { vectors: 1, ids: 2 }
        ));
        assert_eq!(index.len(), 0);
    }

    #[test]
    fn test_query_dimension_mismatch() {
        let mut index = LinearIndex::new(3).unwrap();
        index
            .add_documents(&[vec![1.0, 0.0, 0.0]], &ids(&["a"]))
            .unwrap();
        let err = index.search(&[1.0, 0.0], 1).unwrap_err();
        assert!(matches!(err, DomainError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_overwrite_keeps_rank() {
        let mut index = LinearIndex::new(2).unwrap();
        index
            .add_documents(&[vec![1.0, 0.0], vec![0.0, 1.0]], &ids(&["a", "b"]))
            .unwrap();
        // Re-add "a" pointing the same way as "b": both now tie on any
        // query, and "a" must still rank first.
        index
            .add_documents(&[vec![0.0, 1.0]], &ids(&["a"]))
            .unwrap();
        assert_eq!(index.len(), 2);

        let results = index.search(&[0.0, 1.0], 2).unwrap();
        assert_eq!(results[0].0, "a");
        assert_eq!(results[1].0, "b");
        assert!((results[0].1 - 1.0).abs() < 1e-9);
        assert!((results[1].1 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_vector_scores_zero() {
        let mut index = LinearIndex::new(3).unwrap();
        index
            .add_documents(
                &[vec![0.0, 0.0, 0.0], vec![1.0, 0.0, 0.0]],
                &ids(&["zero", "x"]),
            )
            .unwrap();
        let results = index.search(&[1.0, 2.0, 3.0], 2).unwrap();
        let zero = results.iter().find(|(id, _)| id == "zero").unwrap();
        assert_eq!(zero.1, 0.0);
    }

    #[test]
    fn test_results_sorted_descending() {
        let mut index = LinearIndex::new(2).unwrap();
        index
            .add_documents(
                &[vec![1.0, 0.0], vec![0.7, 0.7], vec![0.0, 1.0]],
                &ids(&["exact", "diag", "ortho"]),
            )
            .unwrap();
        let results = index.search(&[1.0, 0.0], 3).unwrap();
        assert_eq!(results[0].0, "exact");
        assert_eq!(results[1].0, "diag");
        assert_eq!(results[2].0, "ortho");
        assert!(results[0].1 >= results[1].1 && results[1].1 >= results[2].1);
    }
}
