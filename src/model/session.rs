//! Session DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionDto {
    pub id: Uuid,
    pub game_id: Uuid,
    pub name: String,
    pub is_presential: Option<bool>,
    pub datetime: Option<DateTime<Utc>>,
    pub place: Option<String>,
    pub observations: Option<String>,
}

impl SessionDto {
    pub fn from_entity(entity: entity::session::Model) -> Self {
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
pub struct CreateSessionDto {
    pub name: String,
    pub is_presential: Option<bool>,
    pub datetime: Option<DateTime<Utc>>,
    pub place: Option<String>,
    pub observations: Option<String>,
}

/// Partial session update; absent fields are left unchanged.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateSessionDto {
    pub name: Option<String>,
    pub is_presential: Option<bool>,
    pub datetime: Option<DateTime<Utc>>,
    pub place: Option<String>,
    pub observations: Option<String>,
}

/// A member's attendance mark for a session or event.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttendeeDto {
    pub user_id: Uuid,
    pub nickname: String,
    /// `true` confirmed, `false` declined, `null` pending.
    pub confirm_assist: Option<bool>,
}

/// Calendar month filter for the caller's session agenda.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct MonthParam {
    pub year: i32,
    /// 1-12.
    pub month: u32,
}
