//! Theme DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ThemeDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub theme_photo: Option<String>,
}

impl ThemeDto {
    pub fn from_entity(entity: entity::theme::Model, photo_url: Option<String>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            theme_photo: photo_url,
        }
    }
}
