use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

pub const DEFAULT_DIM: usize = 256;

/// Deterministic offline embedder using signed feature hashing: each
/// whitespace token hashes to a bucket and a sign, and the result is
/// L2-normalized. No semantic smarts, but identical text always maps to
/// the identical vector, which is what the local setup and the test
/// suite need when no embedding API is configured.
pub struct HashingProvider {
    dim: usize,
}

impl HashingProvider {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }

    fn embed_one(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0_f32; self.dim];
        for token in text.split_whitespace() {
            let mut hasher = DefaultHasher::new();
            token.to_lowercase().hash(&mut hasher);
            let h = hasher.finish();
            let bucket = (h % self.dim as u64) as usize;
            let sign = if h & (1 << 63) == 0 { 1.0 } else { -1.0 };
            vector[bucket] += sign;
        }

        let norm = vector
            .iter()
            .map(|x| (*x as f64) * (*x as f64))
            .sum::<f64>()
            .sqrt();
        if norm > 0.0 {
            for x in vector.iter_mut() {
                *x = (*x as f64 / norm) as f32;
            }
        }
        vector
    }
}

impl Default for HashingProvider {
    fn default() -> Self {
        Self::new(DEFAULT_DIM)
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for HashingProvider {
    async fn embed(
        &self,
        texts: &[String],
        _input_type: InputType,
    ) -> Result<Vec<Vec<f32>>, DomainError> {
        Ok(texts.iter().map(|t| self.embed_one(t)).collect())
    }

    fn dimension(&self) -> usize {
        self.dim
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let provider = HashingProvider::default();
        let a = provider.embed_one("the quick brown fox");
        let b = provider.embed_one("the quick brown fox");
        assert_eq!(a, b);
        assert_eq!(a.len(), DEFAULT_DIM);
    }

    #[test]
    fn test_normalized() {
        let provider = HashingProvider::new(32);
        let v = provider.embed_one("alpha beta gamma");
        let norm: f64 = v.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_text_is_zero_vector() {
        let provider = HashingProvider::new(16);
        let v = provider.embed_one("");
        assert!(v.iter().all(|x| *x == 0.0));
    }
}
