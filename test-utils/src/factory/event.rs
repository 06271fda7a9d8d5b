//! Event factory for creating test side events.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test events with customizable fields.
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    game_id: Uuid,
    name: String,
    datetime: Option<chrono::DateTime<Utc>>,
    place: Option<String>,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Event {n}"` where n is auto-incremented
    /// - datetime: now
    /// - place: `None`
    pub fn new(db: &'a DatabaseConnection, game_id: Uuid) -> Self {
        let n = next_id();
        Self {
            db,
            game_id,
            name: format!("Event {}", n),
            datetime: Some(Utc::now()),
            place: None,
        }
    }

    /// Sets the name for the event.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the scheduled time for the event.
    pub fn datetime(mut self, datetime: chrono::DateTime<Utc>) -> Self {
        self.datetime = Some(datetime);
        self
    }

    /// Sets the meeting place for the event.
    pub fn place(mut self, place: impl Into<String>) -> Self {
        self.place = Some(place.into());
        self
    }

    /// Builds and inserts the event entity into the database.
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            game_id: ActiveValue::Set(self.game_id),
            name: ActiveValue::Set(self.name),
            is_presential: ActiveValue::Set(None),
            datetime: ActiveValue::Set(self.datetime),
            place: ActiveValue::Set(self.place),
            observations: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event with default values for the given game.
pub async fn create_event(
    db: &DatabaseConnection,
    game_id: Uuid,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, game_id).build().await
}
