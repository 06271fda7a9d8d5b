//! Private message factory for creating test direct messages.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test private messages with customizable fields.
pub struct PrivateMessageFactory<'a> {
    db: &'a DatabaseConnection,
    sender_id: Uuid,
    receiver_id: Uuid,
    content: Option<String>,
    image_url: Option<String>,
    created_at: chrono::DateTime<Utc>,
}

impl<'a> PrivateMessageFactory<'a> {
    /// Creates a new PrivateMessageFactory with default values.
    ///
    /// Defaults:
    /// - content: `"Private message {n}"` where n is auto-incremented
    /// - image_url: `None`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, sender_id: Uuid, receiver_id: Uuid) -> Self {
        let n = next_id();
        Self {
            db,
            sender_id,
            receiver_id,
            content: Some(format!("Private message {}", n)),
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

    /// Builds and inserts the private message entity into the database.
    pub async fn build(self) -> Result<entity::private_message::Model, DbErr> {
        entity::private_message::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            sender_id: ActiveValue::Set(self.sender_id),
            receiver_id: ActiveValue::Set(self.receiver_id),
            content: ActiveValue::Set(self.content),
            image_url: ActiveValue::Set(self.image_url),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a private message with default values.
pub async fn create_private_message(
    db: &DatabaseConnection,
    sender_id: Uuid,
    receiver_id: Uuid,
) -> Result<entity::private_message::Model, DbErr> {
    PrivateMessageFactory::new(db, sender_id, receiver_id)
        .build()
        .await
}
