//! Friend request factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test friend requests with customizable fields.
pub struct FriendRequestFactory<'a> {
    db: &'a DatabaseConnection,
    sender_id: Uuid,
    receiver_id: Uuid,
    status: String,
}

impl<'a> FriendRequestFactory<'a> {
    /// Creates a new FriendRequestFactory with default values.
    ///
    /// Defaults:
    /// - status: `"PENDING"`
    pub fn new(db: &'a DatabaseConnection, sender_id: Uuid, receiver_id: Uuid) -> Self {
        Self {
            db,
            sender_id,
            receiver_id,
            status: "PENDING".to_string(),
        }
    }

    /// Sets the request status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the friend request entity into the database.
    pub async fn build(self) -> Result<entity::friend_request::Model, DbErr> {
        entity::friend_request::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            sender_id: ActiveValue::Set(self.sender_id),
            receiver_id: ActiveValue::Set(self.receiver_id),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a PENDING friend request with default values.
pub async fn create_friend_request(
    db: &DatabaseConnection,
    sender_id: Uuid,
    receiver_id: Uuid,
) -> Result<entity::friend_request::Model, DbErr> {
    FriendRequestFactory::new(db, sender_id, receiver_id)
        .build()
        .await
}

/// Creates an ACCEPTED friend request, i.e. an established friendship.
pub async fn create_friendship(
    db: &DatabaseConnection,
    sender_id: Uuid,
    receiver_id: Uuid,
) -> Result<entity::friend_request::Model, DbErr> {
    FriendRequestFactory::new(db, sender_id, receiver_id)
        .status("ACCEPTED")
        .build()
        .await
}
