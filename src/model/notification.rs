//! Notification DTOs and type constants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A session was scheduled in one of the user's games; reference is the session.
pub const TYPE_SESSION_CREATED: &str = "SESSION_CREATED";
/// Unread game chat; reference is the game. At most one unread row per game.
pub const TYPE_UNREAD_MESSAGES: &str = "UNREAD_MESSAGES";
/// Unread direct messages; reference is the sender. At most one unread row per sender.
pub const TYPE_UNREAD_PRIVATE_MESSAGES: &str = "UNREAD_PRIVATE_MESSAGES";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotificationDto {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    pub reference_id: Option<Uuid>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl NotificationDto {
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            kind: entity.kind,
            content: entity.content,
            reference_id: entity.reference_id,
            is_read: entity.is_read,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UnreadCountDto {
    pub count: u64,
}
