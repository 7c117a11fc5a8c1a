use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid dimension: {0} (must be positive)")]
    InvalidDimension(usize),

    #[error("Dimension mismatch for '{id}': expected {expected}, got {actual}")]
    DimensionMismatch {
        id: String,
        expected: usize,
        actual: usize,
    },

    #[error("Length mismatch: {vectors} vectors paired with {ids} ids")]
    LengthMismatch { vectors: usize, ids: usize },

    #[error("Persistence error ({path}): {message}")]
    Persistence { path: String, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
