use axum::{Json, extract::State, http::StatusCode};
use resonance_core::ingest;
use resonance_shared::AppError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::utils::AppState;

#[derive(Deserialize, ToSchema)]
pub struct WriteMessage {
  /// Message text to embed and store
  pub message: String,
  pub author: String,
}

#[derive(Serialize, ToSchema)]
pub struct WriteMessageResult {
  /// Insertion sequence of the stored message
  pub id: i64,
}

/// Embed a message and store it
#[utoipa::path(
  post,
  path = "/api/v0/write_message",
  request_body = WriteMessage,
  responses(
    (status = 200, description = "Message stored", body = WriteMessageResult),
    (status = 400, description = "Message or author is empty"),
    (status = 422, description = "Embedder returned an unusable vector")
  )
)]
#[axum::debug_handler]
pub async fn write_message(
  State(state): State<AppState>,
  Json(payload): Json<WriteMessage>,
) -> Result<Json<WriteMessageResult>, AppError> {
  if payload.message.is_empty() {
    return Err(AppError::with_status(
      StatusCode::BAD_REQUEST,
      anyhow::anyhow!("Message cannot be empty"),
    ));
  }
  if payload.author.is_empty() {
    return Err(AppError::with_status(
      StatusCode::BAD_REQUEST,
      anyhow::anyhow!("Author cannot be empty"),
    ));
  }

  let id = ingest(
    &payload.message,
    &payload.author,
    state.embedder.as_ref(),
    state.store.as_ref(),
  )
  .await?;

  Ok(Json(WriteMessageResult { id }))
}
