//! Game chat message DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub id: Uuid,
    pub game_id: Uuid,
    pub user_id: Uuid,
    pub content: Option<String>,
    /// Resolved public URL of the attached image, if any.
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl MessageDto {
    pub fn from_entity(entity: entity::message::Model, image_url: Option<String>) -> Self {
        Self {
            id: entity.id,
            game_id: entity.game_id,
            user_id: entity.user_id,
            content: entity.content,
            image_url,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SendMessageDto {
    pub content: String,
}
