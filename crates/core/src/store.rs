use async_trait::async_trait;
use resonance_shared::AppError;

use crate::{MessageRecord, RecordId};

mod db;
pub use db::DbMessageStore;

mod memory;
pub use memory::MemoryMessageStore;

/// Append-only collection of embedded messages.
///
/// Records are never updated or removed. Every append is assigned a strictly
/// increasing [`RecordId`], which is the only ordering the store guarantees.
#[async_trait]
pub trait MessageStore: Send + Sync {
  /// Persist a new record. The embedding must be non-empty and finite.
  async fn append(
    &self,
    text: String,
    author: String,
    embedding: Vec<f32>,
  ) -> Result<RecordId, AppError>;

  /// The record with the largest id among those by `author`.
  async fn most_recent_by_author(&self, author: &str) -> Result<Option<MessageRecord>, AppError>;

  /// Every stored record, oldest first.
  async fn all_records(&self) -> Result<Vec<MessageRecord>, AppError>;
}
