use sea_orm_migration::{
  prelude::*,
  schema::{big_integer, custom, text, timestamp_with_time_zone},
  sea_orm::Statement,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .get_connection()
      .execute_raw(Statement::from_string(
        manager.get_database_backend(),
        "CREATE EXTENSION IF NOT EXISTS vector;",
      ))
      .await?;

    manager
      .create_table(
        Table::create()
          .table(Message::Table)
          .if_not_exists()
          .col(
            big_integer(Message::Id)
              .auto_increment()
              .primary_key(),
          )
          .col(text(Message::Text))
          .col(text(Message::Author))
          // no fixed dimension, the embedding model decides
          .col(custom(Message::Embedding, "vector").not_null())
          .col(
            timestamp_with_time_zone(Message::CreatedAt)
              .default(Expr::current_timestamp()),
          )
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(Message::Table).to_owned())
      .await
  }
}

#[derive(Iden)]
pub enum Message {
  Table,
  // bigserial, insertion sequence
  Id,
  // message body
  Text,
  // author name
  Author,
  // text embedding (for cosine similarity)
  Embedding,
  // create timestamp
  CreatedAt,
}
