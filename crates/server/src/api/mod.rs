use axum::{
  Json, Router,
  routing::{get, post},
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::utils::AppState;

mod messages_with_similarity;
mod write_message;

pub use messages_with_similarity::MessagesWithSimilarity;
pub use write_message::{WriteMessage, WriteMessageResult};

#[derive(OpenApi)]
#[openapi(
  info(
    title = "Resonance API",
    version = "0.0.1",
    description = "Messages ranked by similarity to an author's latest message"
  ),
  paths(
    write_message::write_message,
    messages_with_similarity::messages_with_similarity
  ),
  components(schemas(
    WriteMessage,
    WriteMessageResult,
    MessagesWithSimilarity,
    resonance_core::ScoredMessage,
  ))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
  Json(ApiDoc::openapi())
}

pub fn app() -> Router<AppState> {
  Router::new()
    .route("/api/v0/write_message", post(write_message::write_message))
    .route(
      "/api/v0/messages_with_similarity",
      post(messages_with_similarity::messages_with_similarity),
    )
    .route("/openapi.json", get(openapi_json))
    .merge(Scalar::with_url("/openapi/", ApiDoc::openapi()))
}
