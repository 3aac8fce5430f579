use axum::{Router, response::Html, routing::get};
use resonance_shared::AppError;
use tokio::net::TcpListener;

use crate::{
  api,
  utils::{AppState, shutdown_signal},
};

#[axum::debug_handler]
async fn handler() -> Html<&'static str> {
  Html("<h1>Resonance</h1>")
}

pub fn router(app_state: AppState) -> Router {
  Router::new()
    .route("/", get(handler))
    .merge(api::app())
    .with_state(app_state)
}

pub async fn server(app_state: AppState, listen_addr: &str) -> Result<(), AppError> {
  let app = router(app_state);

  let listener = TcpListener::bind(listen_addr).await?;

  tracing::info!("server started at http://{}", listener.local_addr()?);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}
