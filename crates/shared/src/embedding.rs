use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmbeddingError {
  #[error("embedding must not be empty")]
  Empty,
  #[error("embedding element at index {index} is not finite")]
  NonFinite { index: usize },
  #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
  DimensionMismatch { expected: usize, actual: usize },
}

/// Reject embeddings that cannot take part in a cosine comparison.
pub fn validate_embedding(embedding: &[f32]) -> Result<(), EmbeddingError> {
  if embedding.is_empty() {
    return Err(EmbeddingError::Empty);
  }

  match embedding.iter().position(|x| !x.is_finite()) {
    Some(index) => Err(EmbeddingError::NonFinite { index }),
    None => Ok(()),
  }
}
