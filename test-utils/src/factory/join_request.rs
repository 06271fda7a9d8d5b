//! Join request factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test join requests with customizable fields.
pub struct JoinRequestFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Uuid,
    game_id: Uuid,
    message: Option<String>,
    status: String,
}

impl<'a> JoinRequestFactory<'a> {
    /// Creates a new JoinRequestFactory with default values.
    ///
    /// Defaults:
    /// - message: `None`
    /// - status: `"PENDING"`
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid, game_id: Uuid) -> Self {
        Self {
            db,
            user_id,
            game_id,
            message: None,
            status: "PENDING".to_string(),
        }
    }

    /// Sets the optional message to the game admins.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the request status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the join request entity into the database.
    pub async fn build(self) -> Result<entity::join_request::Model, DbErr> {
        entity::join_request::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(self.user_id),
            game_id: ActiveValue::Set(self.game_id),
            message: ActiveValue::Set(self.message),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a PENDING join request with default values.
pub async fn create_join_request(
    db: &DatabaseConnection,
    user_id: Uuid,
    game_id: Uuid,
) -> Result<entity::join_request::Model, DbErr> {
    JoinRequestFactory::new(db, user_id, game_id).build().await
}
