use chrono::{DateTime, Utc};
use resonance_entities::message;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Store-assigned insertion sequence number.
pub type RecordId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
  pub id: RecordId,
  pub text: String,
  pub author: String,
  pub embedding: Vec<f32>,
  pub created_at: DateTime<Utc>,
}

impl MessageRecord {
  #[must_use]
  pub fn from_model(model: message::Model) -> Self {
    Self {
      id: model.id,
      text: model.text,
      author: model.author,
      embedding: model.embedding.to_vec(),
      created_at: model.created_at.with_timezone(&Utc),
    }
  }
}

/// One stored message scored against the queried author's latest message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScoredMessage {
  pub author: String,
  pub text: String,
  /// Cosine similarity to the reference message, or 1.0 when the author has none
  pub similarity: f64,
}
