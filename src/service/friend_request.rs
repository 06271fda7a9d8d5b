//! Friendship service.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    data::{
        friend_request::FriendRequestRepository, private_message::PrivateMessageRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        friend_request::{FriendRequestDto, STATUS_ACCEPTED, STATUS_PENDING, STATUS_REJECTED},
        user::UserDto,
    },
    service::storage::{StorageService, BUCKET_PRIVATE_MESSAGE_PHOTOS, BUCKET_PROFILE_PHOTOS},
};

pub struct FriendRequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FriendRequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sends a friend request.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Request addressed to oneself
    /// - `Err(AppError::NotFound)` - Receiver does not exist
    /// - `Err(AppError::Conflict)` - A request already exists in either
    ///   direction ("Already friends" when it is accepted)
    pub async fn send(
        &self,
        sender_id: Uuid,
        receiver_id: Uuid,
    ) -> Result<FriendRequestDto, AppError> {
        if sender_id == receiver_id {
            return Err(AppError::BadRequest(
                "You cannot send a friend request to yourself".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_id(receiver_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let repo = FriendRequestRepository::new(self.db);

        if let Some(existing) = repo.find_between(sender_id, receiver_id).await? {
            let message = if existing.status == STATUS_ACCEPTED {
                "Already friends"
            } else {
                "A friend request already exists"
            };
            return Err(AppError::Conflict(message.to_string()));
        }

        let request = repo.create(sender_id, receiver_id).await?;
        Ok(FriendRequestDto::from_entity(request))
    }

    /// Lists pending requests addressed to the caller.
    pub async fn pending(&self, user_id: Uuid) -> Result<Vec<FriendRequestDto>, AppError> {
        let repo = FriendRequestRepository::new(self.db);
        let requests = repo.find_pending_received(user_id).await?;

        Ok(requests
            .into_iter()
            .map(FriendRequestDto::from_entity)
            .collect())
    }

    /// Accepts a pending request. Receiver only.
    pub async fn accept(
        &self,
        user_id: Uuid,
        request_id: Uuid,
    ) -> Result<FriendRequestDto, AppError> {
        self.resolve(user_id, request_id, STATUS_ACCEPTED).await
    }

    /// Rejects a pending request. Receiver only.
    pub async fn reject(
        &self,
        user_id: Uuid,
        request_id: Uuid,
    ) -> Result<FriendRequestDto, AppError> {
        self.resolve(user_id, request_id, STATUS_REJECTED).await
    }

    async fn resolve(
        &self,
        user_id: Uuid,
        request_id: Uuid,
        status: &str,
    ) -> Result<FriendRequestDto, AppError> {
        let repo = FriendRequestRepository::new(self.db);

        let Some(request) = repo.find_by_id(request_id).await? else {
            return Err(AppError::NotFound("Friend request not found".to_string()));
        };

        if request.receiver_id != user_id {
            return Err(AppError::Forbidden(
                "Only the receiver can respond to a friend request".to_string(),
            ));
        }

        if request.status != STATUS_PENDING {
            return Err(AppError::Conflict(
                "Friend request already resolved".to_string(),
            ));
        }

        let updated = repo.update_status(request, status).await?;
        Ok(FriendRequestDto::from_entity(updated))
    }

    /// Lists the caller's friends as profiles.
    pub async fn friends(
        &self,
        storage: &StorageService<'_>,
        user_id: Uuid,
    ) -> Result<Vec<UserDto>, AppError> {
        let repo = FriendRequestRepository::new(self.db);
        let friendships = repo.find_accepted_for_user(user_id).await?;

        let user_repo = UserRepository::new(self.db);
        let mut friends = Vec::with_capacity(friendships.len());

        for friendship in friendships {
            let counterpart_id = if friendship.sender_id == user_id {
                friendship.receiver_id
            } else {
                friendship.sender_id
            };

            if let Some(user) = user_repo.find_by_id(counterpart_id).await? {
                let photo_url =
                    storage.resolve(BUCKET_PROFILE_PHOTOS, user.profile_photo.as_deref());
                friends.push(UserDto::from_entity(user, photo_url));
            }
        }

        Ok(friends)
    }

    /// Removes a friendship and the conversation attached to it.
    ///
    /// Stored conversation images are deleted best effort before the rows go.
    pub async fn remove_friend(
        &self,
        storage: &StorageService<'_>,
        user_id: Uuid,
        friend_id: Uuid,
    ) -> Result<(), AppError> {
        let repo = FriendRequestRepository::new(self.db);

        let Some(friendship) = repo.find_accepted_between(user_id, friend_id).await? else {
            return Err(AppError::NotFound("Friendship not found".to_string()));
        };

        let message_repo = PrivateMessageRepository::new(self.db);
        let image_paths = message_repo.take_image_paths(user_id, friend_id).await?;
        for path in image_paths {
            storage
                .delete_best_effort(BUCKET_PRIVATE_MESSAGE_PHOTOS, &path)
                .await;
        }
        message_repo.delete_conversation(user_id, friend_id).await?;

        repo.delete(friendship).await?;
        Ok(())
    }
}
