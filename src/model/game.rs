//! Game DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Summary view of a game, used in discovery and "my games" listings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GameDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub game_photo: Option<String>,
    pub max_players: Option<i16>,
    pub is_public: bool,
    pub theme_id: Option<Uuid>,
}

impl GameDto {
    pub fn from_entity(entity: entity::game::Model, photo_url: Option<String>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            game_photo: photo_url,
            max_players: entity.max_players,
            is_public: entity.is_public,
            theme_id: entity.theme_id,
        }
    }
}

/// Detail view with theme name, master, and the active player list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GameDetailDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub game_photo: Option<String>,
    pub max_players: Option<i16>,
    pub is_public: bool,
    pub theme_id: Option<Uuid>,
    pub theme_name: Option<String>,
    /// User id of the OWNER subscription, if one exists.
    pub master_id: Option<Uuid>,
    pub player_count: u64,
    pub players: Vec<GameMemberDto>,
}

/// A member of a game as shown in member listings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GameMemberDto {
    pub user_id: Uuid,
    pub nickname: String,
    pub game_nickname: Option<String>,
    pub role: String,
    pub is_admin: bool,
    pub profile_photo: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateGameDto {
    pub name: String,
    pub description: Option<String>,
    pub max_players: Option<i16>,
    pub is_public: Option<bool>,
    pub theme_id: Option<Uuid>,
}

/// Partial game update; absent fields are left unchanged.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateGameDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub max_players: Option<i16>,
    pub is_public: Option<bool>,
    pub theme_id: Option<Uuid>,
}

/// Query parameter for name-filtered game discovery.
#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
pub struct GameSearchParam {
    /// Case-insensitive contains filter on the game name.
    pub name: Option<String>,
}
