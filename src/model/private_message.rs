//! Direct message DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PrivateMessageDto {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub content: Option<String>,
    /// Resolved public URL of the attached image, if any.
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PrivateMessageDto {
    pub fn from_entity(entity: entity::private_message::Model, image_url: Option<String>) -> Self {
        Self {
            id: entity.id,
            sender_id: entity.sender_id,
            receiver_id: entity.receiver_id,
            content: entity.content,
            image_url,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SendPrivateMessageDto {
    pub content: String,
}

/// One entry in the conversations overview: the counterpart and the most
/// recent message exchanged with them.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConversationDto {
    pub user_id: Uuid,
    pub nickname: String,
    pub profile_photo: Option<String>,
    pub last_message: PrivateMessageDto,
}
