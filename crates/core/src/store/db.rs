use async_trait::async_trait;
use chrono::Utc;
use resonance_entities::message;
use resonance_shared::{AppError, validate_embedding};
use sea_orm::{
  ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
  prelude::PgVector,
};

use super::MessageStore;
use crate::{MessageRecord, RecordId};

/// Postgres-backed store; embeddings live in a pgvector column.
#[derive(Clone, Debug)]
pub struct DbMessageStore {
  db: DatabaseConnection,
}

impl DbMessageStore {
  #[must_use]
  pub const fn new(db: DatabaseConnection) -> Self {
    Self { db }
  }
}

#[async_trait]
impl MessageStore for DbMessageStore {
  async fn append(
    &self,
    text: String,
    author: String,
    embedding: Vec<f32>,
  ) -> Result<RecordId, AppError> {
    validate_embedding(&embedding)?;

    let active_model = message::ActiveModel {
      id: NotSet,
      text: Set(text),
      author: Set(author),
      embedding: Set(PgVector::from(embedding)),
      created_at: Set(Utc::now().into()),
    };

    let id = message::Entity::insert(active_model)
      .exec(&self.db)
      .await?
      .last_insert_id;

    Ok(id)
  }

  async fn most_recent_by_author(&self, author: &str) -> Result<Option<MessageRecord>, AppError> {
    let model = message::Entity::find()
      .filter(message::Column::Author.eq(author))
      .order_by_desc(message::Column::Id)
      .one(&self.db)
      .await?;

    Ok(model.map(MessageRecord::from_model))
  }

  async fn all_records(&self) -> Result<Vec<MessageRecord>, AppError> {
    let models = message::Entity::find()
      .order_by_asc(message::Column::Id)
      .all(&self.db)
      .await?;

    Ok(models.into_iter().map(MessageRecord::from_model).collect())
  }
}
