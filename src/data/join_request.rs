//! Join request data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::model::friend_request::STATUS_PENDING;

/// Repository providing database operations for game join requests.
pub struct JoinRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JoinRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        game_id: Uuid,
        message: Option<String>,
    ) -> Result<entity::join_request::Model, DbErr> {
        entity::join_request::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            game_id: ActiveValue::Set(game_id),
            message: ActiveValue::Set(message),
            status: ActiveValue::Set(STATUS_PENDING.to_string()),
            created_at: ActiveValue::Set(chrono::Utc::now()),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<entity::join_request::Model>, DbErr> {
        entity::prelude::JoinRequest::find_by_id(id).one(self.db).await
    }

    /// Finds the user's pending request for a game, if one exists.
    pub async fn find_pending_by_user_and_game(
        &self,
        user_id: Uuid,
        game_id: Uuid,
    ) -> Result<Option<entity::join_request::Model>, DbErr> {
        entity::prelude::JoinRequest::find()
            .filter(entity::join_request::Column::UserId.eq(user_id))
            .filter(entity::join_request::Column::GameId.eq(game_id))
            .filter(entity::join_request::Column::Status.eq(STATUS_PENDING))
            .one(self.db)
            .await
    }

    /// Gets pending requests of a game with the applicant profile, oldest first.
    pub async fn find_pending_by_game(
        &self,
        game_id: Uuid,
    ) -> Result<Vec<(entity::join_request::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::JoinRequest::find()
            .filter(entity::join_request::Column::GameId.eq(game_id))
            .filter(entity::join_request::Column::Status.eq(STATUS_PENDING))
            .order_by_asc(entity::join_request::Column::CreatedAt)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await
    }

    pub async fn update_status(
        &self,
        request: entity::join_request::Model,
        status: &str,
    ) -> Result<entity::join_request::Model, DbErr> {
        let mut active: entity::join_request::ActiveModel = request.into();
        active.status = ActiveValue::Set(status.to_string());
        active.update(self.db).await
    }
}
