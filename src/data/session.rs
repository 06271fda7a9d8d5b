//! Session data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    ModelTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use uuid::Uuid;

use crate::model::session::{CreateSessionDto, UpdateSessionDto};

/// Repository providing database operations for play sessions.
pub struct SessionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SessionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        game_id: Uuid,
        dto: CreateSessionDto,
    ) -> Result<entity::session::Model, DbErr> {
        entity::session::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            game_id: ActiveValue::Set(game_id),
            name: ActiveValue::Set(dto.name),
            is_presential: ActiveValue::Set(dto.is_presential),
            datetime: ActiveValue::Set(dto.datetime),
            place: ActiveValue::Set(dto.place),
            observations: ActiveValue::Set(dto.observations),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::session::Model>, DbErr> {
        entity::prelude::Session::find_by_id(id).one(self.db).await
    }

    /// Gets all sessions of a game ordered by scheduled time.
    pub async fn find_by_game(
        &self,
        game_id: Uuid,
    ) -> Result<Vec<entity::session::Model>, DbErr> {
        entity::prelude::Session::find()
            .filter(entity::session::Column::GameId.eq(game_id))
            .order_by_asc(entity::session::Column::Datetime)
            .all(self.db)
            .await
    }

    /// Gets the user's sessions across all active games within a time range.
    ///
    /// Joins through games and subscriptions so only sessions of non-deleted
    /// games the user actively belongs to are returned.
    pub async fn find_for_user_in_range(
        &self,
        user_id: Uuid,
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    ) -> Result<Vec<entity::session::Model>, DbErr> {
        entity::prelude::Session::find()
            .join(JoinType::InnerJoin, entity::session::Relation::Game.def())
            .join(JoinType::InnerJoin, entity::game::Relation::Subscription.def())
            .filter(entity::subscription::Column::UserId.eq(user_id))
            .filter(entity::subscription::Column::IsActive.eq(true))
            .filter(entity::game::Column::IsDeleted.eq(false))
            .filter(entity::session::Column::Datetime.gte(start))
            .filter(entity::session::Column::Datetime.lt(end))
            .order_by_asc(entity::session::Column::Datetime)
            .all(self.db)
            .await
    }

    /// Applies a partial update. Only fields present in the DTO are written.
    pub async fn update(
        &self,
        session: entity::session::Model,
        dto: UpdateSessionDto,
    ) -> Result<entity::session::Model, DbErr> {
        let mut active: entity::session::ActiveModel = session.into();

        if let Some(name) = dto.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(is_presential) = dto.is_presential {
            active.is_presential = ActiveValue::Set(Some(is_presential));
        }
        if let Some(datetime) = dto.datetime {
            active.datetime = ActiveValue::Set(Some(datetime));
        }
        if let Some(place) = dto.place {
            active.place = ActiveValue::Set(Some(place));
        }
        if let Some(observations) = dto.observations {
            active.observations = ActiveValue::Set(Some(observations));
        }

        active.update(self.db).await
    }

    pub async fn delete(&self, session: entity::session::Model) -> Result<(), DbErr> {
        session.delete(self.db).await?;
        Ok(())
    }
}
