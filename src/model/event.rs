//! Event DTOs. Events share the session shape but are scheduled separately.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventDto {
    pub id: Uuid,
    pub game_id: Uuid,
    pub name: String,
    pub is_presential: Option<bool>,
    pub datetime: Option<DateTime<Utc>>,
    pub place: Option<String>,
    pub observations: Option<String>,
}

impl EventDto {
    pub fn from_entity(entity: entity::event::Model) -> Self {
        Self {
            id: entity.id,
            game_id: entity.game_id,
            name: entity.name,
            is_presential: entity.is_presential,
            datetime: entity.datetime,
            place: entity.place,
            observations: entity.observations,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateEventDto {
    pub name: String,
    pub is_presential: Option<bool>,
    pub datetime: Option<DateTime<Utc>>,
    pub place: Option<String>,
    pub observations: Option<String>,
}

/// Partial event update; absent fields are left unchanged.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateEventDto {
    pub name: Option<String>,
    pub is_presential: Option<bool>,
    pub datetime: Option<DateTime<Utc>>,
    pub place: Option<String>,
    pub observations: Option<String>,
}
