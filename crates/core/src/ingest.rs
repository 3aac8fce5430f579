use resonance_ai::Embedder;
use resonance_shared::AppError;

use crate::{MessageStore, RecordId};

/// Embed `text` and store it under `author`.
///
/// Nothing is stored if the embedder fails.
pub async fn ingest(
  text: &str,
  author: &str,
  embedder: &dyn Embedder,
  store: &dyn MessageStore,
) -> Result<RecordId, AppError> {
  let embedding = embedder.embed(text).await?;
  let dim = embedding.len();
  let id = store
    .append(text.to_owned(), author.to_owned(), embedding)
    .await?;

  tracing::debug!(author, id, dim, "message ingested");

  Ok(id)
}

#[cfg(test)]
mod tests {
  use async_trait::async_trait;

  use super::*;
  use crate::MemoryMessageStore;

  /// Maps text length onto a fixed 2-d direction.
  struct LengthEmbedder;

  #[async_trait]
  impl Embedder for LengthEmbedder {
    async fn embed(&self, input: &str) -> Result<Vec<f32>, AppError> {
      Ok(vec![input.len() as f32, 1.0])
    }
  }

  struct DownEmbedder;

  #[async_trait]
  impl Embedder for DownEmbedder {
    async fn embed(&self, _input: &str) -> Result<Vec<f32>, AppError> {
      Err(anyhow::anyhow!("embedding service unreachable").into())
    }
  }

  #[tokio::test]
  async fn stores_text_with_its_embedding() {
    let store = MemoryMessageStore::new();
    let id = ingest("hey", "u1", &LengthEmbedder, &store).await.unwrap();

    let record = store.most_recent_by_author("u1").await.unwrap().unwrap();
    assert_eq!(record.id, id);
    assert_eq!(record.text, "hey");
    assert_eq!(record.author, "u1");
    assert_eq!(record.embedding, vec![3.0, 1.0]);
  }

  #[tokio::test]
  async fn embedder_failure_stores_nothing() {
    let store = MemoryMessageStore::new();
    let err = ingest("hey", "u1", &DownEmbedder, &store).await.unwrap_err();

    assert!(err.to_string().contains("embedding service unreachable"));
    assert!(store.all_records().await.unwrap().is_empty());
  }
}
