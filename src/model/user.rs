//! User profile DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Public view of a user profile.
///
/// `profile_photo` carries the resolved public storage URL, not the stored
/// object path.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: Uuid,
    pub email: String,
    pub nickname: String,
    pub bio: Option<String>,
    pub preference: Option<String>,
    pub disponibility: Option<String>,
    pub profile_photo: Option<String>,
}

impl UserDto {
    pub fn from_entity(entity: entity::user::Model, photo_url: Option<String>) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            nickname: entity.nickname,
            bio: entity.bio,
            preference: entity.preference,
            disponibility: entity.disponibility,
            profile_photo: photo_url,
        }
    }
}

/// Payload for registering the authenticated account's local profile.
///
/// Identity (id and email) comes from the bearer token, never the body.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterUserDto {
    pub nickname: String,
    pub bio: Option<String>,
    pub preference: Option<String>,
    pub disponibility: Option<String>,
}

/// Partial profile update; absent fields are left unchanged.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    pub nickname: Option<String>,
    pub bio: Option<String>,
    pub preference: Option<String>,
    pub disponibility: Option<String>,
}
