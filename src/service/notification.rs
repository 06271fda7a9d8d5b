//! Notification service.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    data::notification::NotificationRepository,
    error::AppError,
    model::{
        api::PaginatedDto,
        notification::{NotificationDto, UnreadCountDto},
    },
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of the caller's notifications, newest first.
    pub async fn list(
        &self,
        user_id: Uuid,
        unread_only: bool,
        page: u64,
        size: u64,
    ) -> Result<PaginatedDto<NotificationDto>, AppError> {
        let repo = NotificationRepository::new(self.db);
        let (rows, total) = repo
            .find_by_user_paginated(user_id, unread_only, page, size)
            .await?;

        let items = rows.into_iter().map(NotificationDto::from_entity).collect();

        Ok(PaginatedDto::new(items, total, page, size))
    }

    /// Gets the unread badge count.
    pub async fn unread_count(&self, user_id: Uuid) -> Result<UnreadCountDto, AppError> {
        let repo = NotificationRepository::new(self.db);
        let count = repo.count_unread(user_id).await?;

        Ok(UnreadCountDto { count })
    }

    /// Marks one notification as read. Owner only.
    pub async fn mark_read(&self, user_id: Uuid, notification_id: Uuid) -> Result<(), AppError> {
        let repo = NotificationRepository::new(self.db);

        let Some(notification) = repo.find_by_id(notification_id).await? else {
            return Err(AppError::NotFound("Notification not found".to_string()));
        };

        if notification.user_id != user_id {
            return Err(AppError::Forbidden(
                "You can only read your own notifications".to_string(),
            ));
        }

        repo.mark_read(notification_id).await?;
        Ok(())
    }

    /// Marks all unread notifications referencing a chat as read.
    ///
    /// Used when the client opens a game chat or a private conversation, so
    /// the matching unread-messages notifications stop showing.
    pub async fn mark_read_by_reference(
        &self,
        user_id: Uuid,
        kind: &str,
        reference_id: Uuid,
    ) -> Result<(), AppError> {
        let repo = NotificationRepository::new(self.db);
        repo.mark_read_by_reference(user_id, kind, reference_id).await?;
        Ok(())
    }

    /// Marks everything unread as read.
    pub async fn mark_all_read(&self, user_id: Uuid) -> Result<(), AppError> {
        let repo = NotificationRepository::new(self.db);
        repo.mark_all_read(user_id).await?;
        Ok(())
    }
}
