//! Notification factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test notifications with customizable fields.
pub struct NotificationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Uuid,
    kind: String,
    content: String,
    reference_id: Option<Uuid>,
    is_read: bool,
}

impl<'a> NotificationFactory<'a> {
    /// Creates a new NotificationFactory with default values.
    ///
    /// Defaults:
    /// - kind: `"SESSION_CREATED"`
    /// - content: `"Notification {n}"` where n is auto-incremented
    /// - reference_id: `None`
    /// - is_read: `false`
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid) -> Self {
        let n = next_id();
        Self {
            db,
            user_id,
            kind: "SESSION_CREATED".to_string(),
            content: format!("Notification {}", n),
            reference_id: None,
            is_read: false,
        }
    }

    /// Sets the notification type.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Sets the human-readable content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the referenced row's id.
    pub fn reference_id(mut self, reference_id: Uuid) -> Self {
        self.reference_id = Some(reference_id);
        self
    }

    /// Sets the read flag.
    pub fn is_read(mut self, is_read: bool) -> Self {
        self.is_read = is_read;
        self
    }

    /// Builds and inserts the notification entity into the database.
    pub async fn build(self) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(self.user_id),
            kind: ActiveValue::Set(self.kind),
            content: ActiveValue::Set(self.content),
            reference_id: ActiveValue::Set(self.reference_id),
            is_read: ActiveValue::Set(self.is_read),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unread notification with default values.
pub async fn create_notification(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<entity::notification::Model, DbErr> {
    NotificationFactory::new(db, user_id).build().await
}
