use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use resonance_shared::{AppError, validate_embedding};
use tokio::sync::RwLock;

use super::MessageStore;
use crate::{MessageRecord, RecordId};

/// In-process store. Clones share the same records.
#[derive(Clone, Debug, Default)]
pub struct MemoryMessageStore {
  records: Arc<RwLock<Vec<MessageRecord>>>,
}

impl MemoryMessageStore {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl MessageStore for MemoryMessageStore {
  async fn append(
    &self,
    text: String,
    author: String,
    embedding: Vec<f32>,
  ) -> Result<RecordId, AppError> {
    validate_embedding(&embedding)?;

    // id assignment and push happen under one write lock
    let mut records = self.records.write().await;
    let id = records.last().map_or(1, |last| last.id + 1);
    records.push(MessageRecord {
      id,
      text,
      author,
      embedding,
      created_at: Utc::now(),
    });

    Ok(id)
  }

  async fn most_recent_by_author(&self, author: &str) -> Result<Option<MessageRecord>, AppError> {
    let records = self.records.read().await;
    Ok(
      records
        .iter()
        .filter(|r| r.author == author)
        .max_by_key(|r| r.id)
        .cloned(),
    )
  }

  async fn all_records(&self) -> Result<Vec<MessageRecord>, AppError> {
    Ok(self.records.read().await.clone())
  }
}
