use anyhow::anyhow;
use async_openai::{Client, config::OpenAIConfig, types::embeddings::CreateEmbeddingRequestArgs};
use async_trait::async_trait;
use resonance_shared::{AppEnv, AppError};

/// Turns text into an embedding vector.
#[async_trait]
pub trait Embedder: Send + Sync {
  async fn embed(&self, input: &str) -> Result<Vec<f32>, AppError>;
}

/// Embedder backed by an OpenAI-compatible `/embeddings` endpoint.
#[derive(Clone)]
pub struct OpenAiEmbedder {
  client: Client<OpenAIConfig>,
  model: String,
  dimensions: Option<u32>,
}

impl OpenAiEmbedder {
  #[must_use]
  pub fn new(env: &AppEnv) -> Self {
    let config = OpenAIConfig::new()
      .with_api_key(&env.openai_api_key)
      .with_api_base(&env.openai_base_url);

    Self {
      client: Client::with_config(config),
      model: env.openai_embedding_model.clone(),
      dimensions: env.openai_embedding_dimensions,
    }
  }

  #[must_use]
  pub fn model(&self) -> &str {
    &self.model
  }

  #[must_use]
  pub const fn dimensions(&self) -> Option<u32> {
    self.dimensions
  }
}

#[async_trait]
impl Embedder for OpenAiEmbedder {
  async fn embed(&self, input: &str) -> Result<Vec<f32>, AppError> {
    let mut args = CreateEmbeddingRequestArgs::default();
    args.model(&self.model).input(input);
    if let Some(dimensions) = self.dimensions {
      args.dimensions(dimensions);
    }
    let request = args.build()?;

    let embedding = self
      .client
      .embeddings()
      .create(request)
      .await
      .map(|r| r.data.into_iter())?
      .map(|e| e.embedding)
      .next_back()
      .ok_or_else(|| anyhow!("empty embedding"))?;

    tracing::debug!(model = %self.model, dim = embedding.len(), "text embedded");

    Ok(embedding)
  }
}
