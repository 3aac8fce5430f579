use sea_orm_migration::prelude::*;

use crate::m20261017_01_create_message_table::Message;

const INDEX_NAME: &str = "idx_message_author_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    // latest message per author: WHERE author = $1 ORDER BY id DESC LIMIT 1
    manager
      .create_index(
        Index::create()
          .name(INDEX_NAME)
          .table(Message::Table)
          .col(Message::Author)
          .col(Message::Id)
          .if_not_exists()
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_index(Index::drop().name(INDEX_NAME).table(Message::Table).to_owned())
      .await
  }
}
