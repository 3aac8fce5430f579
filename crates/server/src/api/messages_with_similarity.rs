use axum::{Json, extract::State};
use resonance_core::{ScoredMessage, rank};
use resonance_shared::AppError;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::utils::AppState;

#[derive(Deserialize, ToSchema)]
pub struct MessagesWithSimilarity {
  /// Author whose latest message is the comparison reference
  pub username: String,
}

/// Every stored message scored against the user's latest message.
///
/// Results are in storage order, not sorted. When the user has no messages,
/// every entry carries the sentinel similarity 1.0.
#[utoipa::path(
  post,
  path = "/api/v0/messages_with_similarity",
  request_body = MessagesWithSimilarity,
  responses(
    (status = 200, description = "Messages with similarity scores", body = Vec<ScoredMessage>),
    (status = 409, description = "Stored embeddings have different dimensions")
  )
)]
#[axum::debug_handler]
pub async fn messages_with_similarity(
  State(state): State<AppState>,
  Json(payload): Json<MessagesWithSimilarity>,
) -> Result<Json<Vec<ScoredMessage>>, AppError> {
  let scored = rank(&payload.username, state.store.as_ref()).await?;
  Ok(Json(scored))
}
