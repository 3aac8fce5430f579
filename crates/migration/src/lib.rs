pub use sea_orm_migration::*;

mod m20261017_01_create_message_table;
mod m20261017_02_create_message_author_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
  fn migrations() -> Vec<Box<dyn MigrationTrait>> {
    vec![
      Box::new(m20261017_01_create_message_table::Migration),
      Box::new(m20261017_02_create_message_author_index::Migration),
    ]
  }
}
