use resonance_shared::{AppError, similarity::cosine_similarity};

use crate::{MessageStore, ScoredMessage};

/// Score given to every record when the queried author has no messages.
///
/// This is a "nothing to compare against" marker, not a real match.
pub const NO_REFERENCE_SIMILARITY: f64 = 1.0;

/// Score every stored message against `author`'s most recent message.
///
/// Output follows store order (oldest first) and is neither sorted nor
/// filtered. The reference message itself is included and scores 1.0.
/// Any dimension mismatch fails the whole query.
pub async fn rank(author: &str, store: &dyn MessageStore) -> Result<Vec<ScoredMessage>, AppError> {
  let reference = store.most_recent_by_author(author).await?;
  let records = store.all_records().await?;

  match &reference {
    Some(reference) => tracing::debug!(
      author,
      reference_id = reference.id,
      candidates = records.len(),
      "ranking against latest message"
    ),
    None => tracing::debug!(
      author,
      candidates = records.len(),
      "author has no messages, using sentinel similarity"
    ),
  }

  let mut scored = Vec::with_capacity(records.len());
  for record in records {
    let similarity = match &reference {
      Some(reference) => cosine_similarity(&reference.embedding, &record.embedding)?,
      None => NO_REFERENCE_SIMILARITY,
    };
    scored.push(ScoredMessage {
      author: record.author,
      text: record.text,
      similarity,
    });
  }

  Ok(scored)
}
