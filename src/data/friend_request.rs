//! Friend request data repository.
//!
//! A friendship is an accepted friend request. Requests are directional but
//! friendship checks look in both directions.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, ModelTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::model::friend_request::{STATUS_ACCEPTED, STATUS_PENDING};

/// Repository providing database operations for friend requests.
pub struct FriendRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FriendRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        sender_id: Uuid,
        receiver_id: Uuid,
    ) -> Result<entity::friend_request::Model, DbErr> {
        entity::friend_request::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            sender_id: ActiveValue::Set(sender_id),
            receiver_id: ActiveValue::Set(receiver_id),
            status: ActiveValue::Set(STATUS_PENDING.to_string()),
            created_at: ActiveValue::Set(chrono::Utc::now()),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<entity::friend_request::Model>, DbErr> {
        entity::prelude::FriendRequest::find_by_id(id)
            .one(self.db)
            .await
    }

    fn between_condition(a: Uuid, b: Uuid) -> Condition {
        Condition::any()
            .add(
                Condition::all()
                    .add(entity::friend_request::Column::SenderId.eq(a))
                    .add(entity::friend_request::Column::ReceiverId.eq(b)),
            )
            .add(
                Condition::all()
                    .add(entity::friend_request::Column::SenderId.eq(b))
                    .add(entity::friend_request::Column::ReceiverId.eq(a)),
            )
    }

    /// Finds any request between two users regardless of direction or status.
    pub async fn find_between(
        &self,
        a: Uuid,
        b: Uuid,
    ) -> Result<Option<entity::friend_request::Model>, DbErr> {
        entity::prelude::FriendRequest::find()
            .filter(Self::between_condition(a, b))
            .one(self.db)
            .await
    }

    /// Finds the accepted request linking two users, if they are friends.
    pub async fn find_accepted_between(
        &self,
        a: Uuid,
        b: Uuid,
    ) -> Result<Option<entity::friend_request::Model>, DbErr> {
        entity::prelude::FriendRequest::find()
            .filter(Self::between_condition(a, b))
            .filter(entity::friend_request::Column::Status.eq(STATUS_ACCEPTED))
            .one(self.db)
            .await
    }

    /// Gets pending requests addressed to the user, newest first.
    pub async fn find_pending_received(
        &self,
        receiver_id: Uuid,
    ) -> Result<Vec<entity::friend_request::Model>, DbErr> {
        entity::prelude::FriendRequest::find()
            .filter(entity::friend_request::Column::ReceiverId.eq(receiver_id))
            .filter(entity::friend_request::Column::Status.eq(STATUS_PENDING))
            .order_by_desc(entity::friend_request::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Gets accepted requests the user is part of, in either role.
    pub async fn find_accepted_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<entity::friend_request::Model>, DbErr> {
        entity::prelude::FriendRequest::find()
            .filter(
                Condition::any()
                    .add(entity::friend_request::Column::SenderId.eq(user_id))
                    .add(entity::friend_request::Column::ReceiverId.eq(user_id)),
            )
            .filter(entity::friend_request::Column::Status.eq(STATUS_ACCEPTED))
            .all(self.db)
            .await
    }

    pub async fn update_status(
        &self,
        request: entity::friend_request::Model,
        status: &str,
    ) -> Result<entity::friend_request::Model, DbErr> {
        let mut active: entity::friend_request::ActiveModel = request.into();
        active.status = ActiveValue::Set(status.to_string());
        active.update(self.db).await
    }

    pub async fn delete(&self, request: entity::friend_request::Model) -> Result<(), DbErr> {
        request.delete(self.db).await?;
        Ok(())
    }
}
