use std::sync::Arc;

use resonance_ai::OpenAiEmbedder;
use resonance_core::DbMessageStore;
use resonance_migration::{Migrator, MigratorTrait};
use resonance_server::{server, utils::AppState};
use resonance_shared::{AppEnv, AppError};
use sea_orm::Database;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();
  dotenvy::dotenv().ok();

  let app_env = AppEnv::from_env()?;

  let db = Database::connect(app_env.database_url.as_str()).await?;

  // Apply all pending migrations
  // https://www.sea-ql.org/SeaORM/docs/migration/running-migration/#migrating-programmatically
  Migrator::up(&db, None).await?;

  let embedder = OpenAiEmbedder::new(&app_env);
  tracing::info!(
    model = embedder.model(),
    dimensions = ?embedder.dimensions(),
    "embedder configured"
  );

  let app_state = AppState::new(Arc::new(DbMessageStore::new(db)), Arc::new(embedder));

  server(app_state, &app_env.listen_addr).await
}
