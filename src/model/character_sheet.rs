//! Character sheet DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CharacterSheetDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub game_id: Uuid,
    pub name: String,
    pub role: Option<String>,
    pub description: Option<String>,
    pub level: Option<i32>,
    /// Resolved public URL of the character portrait, if any.
    pub character_photo: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CharacterSheetDto {
    pub fn from_entity(entity: entity::character_sheet::Model, photo_url: Option<String>) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            game_id: entity.game_id,
            name: entity.name,
            role: entity.role,
            description: entity.description,
            level: entity.level,
            character_photo: photo_url,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateCharacterSheetDto {
    pub name: String,
    pub role: Option<String>,
    pub description: Option<String>,
    pub level: Option<i32>,
}

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateCharacterSheetDto {
    pub name: Option<String>,
    pub role: Option<String>,
    pub description: Option<String>,
    pub level: Option<i32>,
}
