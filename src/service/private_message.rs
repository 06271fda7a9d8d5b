//! Direct message service. Messaging is restricted to accepted friends.

use std::collections::HashSet;

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    data::{
        friend_request::FriendRequestRepository, private_message::PrivateMessageRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        api::PaginatedDto,
        notification::TYPE_UNREAD_PRIVATE_MESSAGES,
        private_message::{ConversationDto, PrivateMessageDto},
    },
    service::storage::{StorageService, BUCKET_PRIVATE_MESSAGE_PHOTOS, BUCKET_PROFILE_PHOTOS},
};

pub struct PrivateMessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PrivateMessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sends a text message to a friend.
    ///
    /// The receiver gets an `UNREAD_PRIVATE_MESSAGES` notification referencing
    /// the sender, unless they already carry an unread one.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Empty content
    /// - `Err(AppError::Forbidden)` - No accepted friendship with the receiver
    pub async fn send(
        &self,
        storage: &StorageService<'_>,
        sender_id: Uuid,
        receiver_id: Uuid,
        content: String,
    ) -> Result<PrivateMessageDto, AppError> {
        if content.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Message content cannot be empty".to_string(),
            ));
        }

        self.require_friendship(sender_id, receiver_id).await?;

        let repo = PrivateMessageRepository::new(self.db);
        let message = repo
            .create(sender_id, receiver_id, Some(content), None)
            .await?;

        self.notify_receiver(sender_id, receiver_id).await?;

        Ok(self.to_dto(storage, message))
    }

    /// Sends an image message to a friend.
    pub async fn send_image(
        &self,
        storage: &StorageService<'_>,
        sender_id: Uuid,
        receiver_id: Uuid,
        content: Option<String>,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<PrivateMessageDto, AppError> {
        self.require_friendship(sender_id, receiver_id).await?;

        let path = format!("{}/{}", sender_id, Uuid::new_v4());
        storage
            .upload(BUCKET_PRIVATE_MESSAGE_PHOTOS, &path, content_type, data)
            .await?;

        let content = content.filter(|c| !c.trim().is_empty());

        let repo = PrivateMessageRepository::new(self.db);
        let message = repo
            .create(sender_id, receiver_id, content, Some(path))
            .await?;

        self.notify_receiver(sender_id, receiver_id).await?;

        Ok(self.to_dto(storage, message))
    }

    /// Gets one page of the conversation with a friend, newest first.
    pub async fn conversation(
        &self,
        storage: &StorageService<'_>,
        user_id: Uuid,
        other_id: Uuid,
        page: u64,
        size: u64,
    ) -> Result<PaginatedDto<PrivateMessageDto>, AppError> {
        self.require_friendship(user_id, other_id).await?;

        let repo = PrivateMessageRepository::new(self.db);
        let (rows, total) = repo
            .find_conversation_paginated(user_id, other_id, page, size)
            .await?;

        let items = rows
            .into_iter()
            .map(|message| self.to_dto(storage, message))
            .collect();

        Ok(PaginatedDto::new(items, total, page, size))
    }

    /// Builds the conversations overview: the latest message exchanged with
    /// each counterpart, together with that counterpart's profile.
    pub async fn conversations(
        &self,
        storage: &StorageService<'_>,
        user_id: Uuid,
    ) -> Result<Vec<ConversationDto>, AppError> {
        let repo = PrivateMessageRepository::new(self.db);
        let messages = repo.find_all_for_user(user_id).await?;

        let user_repo = UserRepository::new(self.db);
        let mut seen: HashSet<Uuid> = HashSet::new();
        let mut conversations = Vec::new();

        // Messages arrive newest first, so the first message per counterpart
        // is the latest one.
        for message in messages {
            let counterpart_id = if message.sender_id == user_id {
                message.receiver_id
            } else {
                message.sender_id
            };

            if !seen.insert(counterpart_id) {
                continue;
            }

            let Some(counterpart) = user_repo.find_by_id(counterpart_id).await? else {
                continue;
            };

            conversations.push(ConversationDto {
                user_id: counterpart.id,
                nickname: counterpart.nickname,
                profile_photo: storage
                    .resolve(BUCKET_PROFILE_PHOTOS, counterpart.profile_photo.as_deref()),
                last_message: self.to_dto(storage, message),
            });
        }

        Ok(conversations)
    }

    async fn require_friendship(&self, a: Uuid, b: Uuid) -> Result<(), AppError> {
        let repo = FriendRequestRepository::new(self.db);

        if repo.find_accepted_between(a, b).await?.is_none() {
            return Err(AppError::Forbidden(
                "You can only message your friends".to_string(),
            ));
        }

        Ok(())
    }

    async fn notify_receiver(&self, sender_id: Uuid, receiver_id: Uuid) -> Result<(), AppError> {
        let repo = crate::data::notification::NotificationRepository::new(self.db);

        if repo
            .unread_exists(receiver_id, TYPE_UNREAD_PRIVATE_MESSAGES, sender_id)
            .await?
        {
            return Ok(());
        }

        repo.create(
            receiver_id,
            TYPE_UNREAD_PRIVATE_MESSAGES,
            "You have unread private messages".to_string(),
            Some(sender_id),
        )
        .await?;

        Ok(())
    }

    fn to_dto(
        &self,
        storage: &StorageService<'_>,
        message: entity::private_message::Model,
    ) -> PrivateMessageDto {
        let image_url = storage.resolve(
            BUCKET_PRIVATE_MESSAGE_PHOTOS,
            message.image_url.as_deref(),
        );
        PrivateMessageDto::from_entity(message, image_url)
    }
}
