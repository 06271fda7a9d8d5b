//! Subscription DTOs and role constants.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Role held by the user who created the game.
pub const ROLE_OWNER: &str = "OWNER";
/// Role held by every other member.
pub const ROLE_PLAYER: &str = "PLAYER";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub game_id: Uuid,
    pub game_nickname: Option<String>,
    pub role: String,
    pub is_admin: bool,
    pub is_active: bool,
}

impl SubscriptionDto {
    pub fn from_entity(entity: entity::subscription::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            game_id: entity.game_id,
            game_nickname: entity.game_nickname,
            role: entity.role,
            is_admin: entity.is_admin,
            is_active: entity.is_active,
        }
    }
}
