//! Game chat service.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    data::{
        message::MessageRepository, notification::NotificationRepository,
        subscription::SubscriptionRepository,
    },
    error::AppError,
    model::{
        api::PaginatedDto,
        message::MessageDto,
        notification::TYPE_UNREAD_MESSAGES,
    },
    service::storage::{StorageService, BUCKET_MESSAGE_PHOTOS},
};

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Posts a text message to a game chat.
    ///
    /// Every other active member gets an `UNREAD_MESSAGES` notification
    /// referencing the game, unless they already carry an unread one.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Empty or whitespace-only content
    pub async fn send(
        &self,
        storage: &StorageService<'_>,
        sender_id: Uuid,
        game_id: Uuid,
        content: String,
    ) -> Result<MessageDto, AppError> {
        if content.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Message content cannot be empty".to_string(),
            ));
        }

        let repo = MessageRepository::new(self.db);
        let message = repo.create(game_id, sender_id, Some(content), None).await?;

        self.notify_members(sender_id, game_id).await?;

        Ok(self.to_dto(storage, message))
    }

    /// Posts an image message, optionally with a caption.
    ///
    /// The image is stored under a fresh UUID inside the game's folder so
    /// uploads never collide.
    pub async fn send_image(
        &self,
        storage: &StorageService<'_>,
        sender_id: Uuid,
        game_id: Uuid,
        content: Option<String>,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<MessageDto, AppError> {
        let path = format!("{}/{}", game_id, Uuid::new_v4());
        storage
            .upload(BUCKET_MESSAGE_PHOTOS, &path, content_type, data)
            .await?;

        let content = content.filter(|c| !c.trim().is_empty());

        let repo = MessageRepository::new(self.db);
        let message = repo
            .create(game_id, sender_id, content, Some(path))
            .await?;

        self.notify_members(sender_id, game_id).await?;

        Ok(self.to_dto(storage, message))
    }

    /// Gets one page of a game's chat, newest first.
    pub async fn page(
        &self,
        storage: &StorageService<'_>,
        game_id: Uuid,
        page: u64,
        size: u64,
    ) -> Result<PaginatedDto<MessageDto>, AppError> {
        let repo = MessageRepository::new(self.db);
        let (rows, total) = repo.find_by_game_paginated(game_id, page, size).await?;

        let items = rows
            .into_iter()
            .map(|(message, _)| self.to_dto(storage, message))
            .collect();

        Ok(PaginatedDto::new(items, total, page, size))
    }

    async fn notify_members(&self, sender_id: Uuid, game_id: Uuid) -> Result<(), AppError> {
        let subscription_repo = SubscriptionRepository::new(self.db);
        let notification_repo = NotificationRepository::new(self.db);

        let members = subscription_repo.find_active_by_game(game_id).await?;

        for (subscription, _) in members {
            if subscription.user_id == sender_id {
                continue;
            }
            if notification_repo
                .unread_exists(subscription.user_id, TYPE_UNREAD_MESSAGES, game_id)
                .await?
            {
                continue;
            }
            notification_repo
                .create(
                    subscription.user_id,
                    TYPE_UNREAD_MESSAGES,
                    "You have unread messages".to_string(),
                    Some(game_id),
                )
                .await?;
        }

        Ok(())
    }

    fn to_dto(&self, storage: &StorageService<'_>, message: entity::message::Model) -> MessageDto {
        let image_url = storage.resolve(BUCKET_MESSAGE_PHOTOS, message.image_url.as_deref());
        MessageDto::from_entity(message, image_url)
    }
}
