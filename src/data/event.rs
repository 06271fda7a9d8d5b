//! Event data repository. Mirrors the session repository minus the agenda query.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::model::event::{CreateEventDto, UpdateEventDto};

/// Repository providing database operations for side events.
pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        game_id: Uuid,
        dto: CreateEventDto,
    ) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
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

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::event::Model>, DbErr> {
        entity::prelude::Event::find_by_id(id).one(self.db).await
    }

    /// Gets all events of a game ordered by scheduled time.
    pub async fn find_by_game(&self, game_id: Uuid) -> Result<Vec<entity::event::Model>, DbErr> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::GameId.eq(game_id))
            .order_by_asc(entity::event::Column::Datetime)
            .all(self.db)
            .await
    }

    /// Applies a partial update. Only fields present in the DTO are written.
    pub async fn update(
        &self,
        event: entity::event::Model,
        dto: UpdateEventDto,
    ) -> Result<entity::event::Model, DbErr> {
        let mut active: entity::event::ActiveModel = event.into();

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

    pub async fn delete(&self, event: entity::event::Model) -> Result<(), DbErr> {
        event.delete(self.db).await?;
        Ok(())
    }
}
