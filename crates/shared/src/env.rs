use std::env;

use anyhow::{Context, anyhow};

use crate::AppError;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct AppEnv {
  pub database_url: String,
  pub openai_base_url: String,
  pub openai_api_key: String,
  pub openai_embedding_model: String,
  /// Requested output size; `None` keeps the model's native dimension.
  pub openai_embedding_dimensions: Option<u32>,
  pub listen_addr: String,
}

impl AppEnv {
  /// Read configuration from the process environment.
  pub fn from_env() -> Result<Self, AppError> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let required = |key: &str| lookup(key).ok_or_else(|| anyhow!("{key} must be set"));
    let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

    let database_url = required("DATABASE_URL")?;
    let openai_api_key = required("OPENAI_API_KEY")?;

    let openai_embedding_dimensions = lookup("OPENAI_EMBEDDING_DIMENSIONS")
      .map(|raw| {
        raw
          .parse::<u32>()
          .with_context(|| format!("OPENAI_EMBEDDING_DIMENSIONS is not a valid u32: {raw}"))
      })
      .transpose()?;

    Ok(Self {
      database_url,
      openai_base_url: or_default("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
      openai_api_key,
      openai_embedding_model: or_default("OPENAI_EMBEDDING_MODEL", DEFAULT_EMBEDDING_MODEL),
      openai_embedding_dimensions,
      listen_addr: or_default("LISTEN_ADDR", DEFAULT_LISTEN_ADDR),
    })
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use super::*;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
      .iter()
      .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
      .collect();
    move |key: &str| map.get(key).cloned()
  }

  #[test]
  fn fills_defaults() {
    let env = AppEnv::from_lookup(lookup_from(&[
      ("DATABASE_URL", "postgres://localhost/resonance"),
      ("OPENAI_API_KEY", "sk-test"),
    ]))
    .unwrap();

    assert_eq!(env.database_url, "postgres://localhost/resonance");
    assert_eq!(env.openai_base_url, DEFAULT_OPENAI_BASE_URL);
    assert_eq!(env.openai_embedding_model, "text-embedding-3-small");
    assert_eq!(env.openai_embedding_dimensions, None);
    assert_eq!(env.listen_addr, "0.0.0.0:3000");
  }

  #[test]
  fn reads_overrides() {
    let env = AppEnv::from_lookup(lookup_from(&[
      ("DATABASE_URL", "postgres://db/resonance"),
      ("OPENAI_API_KEY", "sk-test"),
      ("OPENAI_BASE_URL", "http://localhost:11434/v1"),
      ("OPENAI_EMBEDDING_MODEL", "nomic-embed-text"),
      ("OPENAI_EMBEDDING_DIMENSIONS", "768"),
      ("LISTEN_ADDR", "127.0.0.1:8080"),
    ]))
    .unwrap();

    assert_eq!(env.openai_base_url, "http://localhost:11434/v1");
    assert_eq!(env.openai_embedding_model, "nomic-embed-text");
    assert_eq!(env.openai_embedding_dimensions, Some(768));
    assert_eq!(env.listen_addr, "127.0.0.1:8080");
  }

  #[test]
  fn missing_required_variable_is_named() {
    let err = AppEnv::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-test")])).unwrap_err();
    assert!(err.to_string().contains("DATABASE_URL must be set"));
  }

  #[test]
  fn required_variables_reported_before_optional_ones() {
    let err = AppEnv::from_lookup(lookup_from(&[
      ("OPENAI_API_KEY", "sk-test"),
      ("OPENAI_EMBEDDING_DIMENSIONS", "many"),
    ]))
    .unwrap_err();
    assert!(err.to_string().contains("DATABASE_URL must be set"));

    let err = AppEnv::from_lookup(lookup_from(&[
      ("DATABASE_URL", "postgres://db/resonance"),
      ("OPENAI_EMBEDDING_DIMENSIONS", "many"),
    ]))
    .unwrap_err();
    assert!(err.to_string().contains("OPENAI_API_KEY must be set"));
  }

  #[test]
  fn invalid_dimensions_fail() {
    let err = AppEnv::from_lookup(lookup_from(&[
      ("DATABASE_URL", "postgres://db/resonance"),
      ("OPENAI_API_KEY", "sk-test"),
      ("OPENAI_EMBEDDING_DIMENSIONS", "many"),
    ]))
    .unwrap_err();
    assert!(err.to_string().contains("OPENAI_EMBEDDING_DIMENSIONS"));
  }
}
