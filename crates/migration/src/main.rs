use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
  cli::run_cli(resonance_migration::Migrator).await
}
