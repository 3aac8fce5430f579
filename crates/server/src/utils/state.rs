use std::sync::Arc;

use resonance_ai::Embedder;
use resonance_core::MessageStore;

#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn MessageStore>,
  pub embedder: Arc<dyn Embedder>,
}

impl AppState {
  #[must_use]
  pub fn new(store: Arc<dyn MessageStore>, embedder: Arc<dyn Embedder>) -> Self {
    Self { store, embedder }
  }
}
