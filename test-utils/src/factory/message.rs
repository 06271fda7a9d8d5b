//! Message factory for creating test game chat messages.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test messages with customizable fields.
pub struct MessageFactory<'a> {
    db: &'a DatabaseConnection,
    game_id: Uuid,
    user_id: Uuid,
    content: Option<String>,
    image_url: Option<String>,
    created_at: chrono::DateTime<Utc>,
}

impl<'a> MessageFactory<'a> {
    /// Creates a new MessageFactory with default values.
    ///
    /// Defaults:
    /// - content: `"Message {n}"` where n is auto-incremented
    /// - image_url: `None`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, game_id: Uuid, user_id: Uuid) -> Self {
        let n = next_id();
        Self {
            db,
            game_id,
            user_id,
            content: Some(format!("Message {}", n)),
            image_url: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the text content of the message.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Sets the attached image URL.
    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Sets the creation timestamp, useful for ordering assertions.
    pub fn created_at(mut self, created_at: chrono::DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the message entity into the database.
    pub async fn build(self) -> Result<entity::message::Model, DbErr> {
        entity::message::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            game_id: ActiveValue::Set(self.game_id),
            user_id: ActiveValue::Set(self.user_id),
            content: ActiveValue::Set(self.content),
            image_url: ActiveValue::Set(self.image_url),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a text message with default values.
pub async fn create_message(
    db: &DatabaseConnection,
    game_id: Uuid,
    user_id: Uuid,
) -> Result<entity::message::Model, DbErr> {
    MessageFactory::new(db, game_id, user_id).build().await
}
