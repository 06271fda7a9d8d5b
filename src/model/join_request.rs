//! Join request DTOs.
//!
//! Join requests share the PENDING/ACCEPTED/REJECTED status strings with
//! friend requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JoinRequestDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub game_id: Uuid,
    pub message: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl JoinRequestDto {
    pub fn from_entity(entity: entity::join_request::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            game_id: entity.game_id,
            message: entity.message,
            status: entity.status,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateJoinRequestDto {
    pub message: Option<String>,
}

/// Response of the "have I already asked to join" check.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JoinRequestExistsDto {
    pub exists: bool,
}
