//! Notification data repository.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

/// Repository providing database operations for user notifications.
pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        kind: &str,
        content: String,
        reference_id: Option<Uuid>,
    ) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            kind: ActiveValue::Set(kind.to_string()),
            content: ActiveValue::Set(content),
            reference_id: ActiveValue::Set(reference_id),
            is_read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(chrono::Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Checks whether an unread notification of this kind and reference
    /// already exists, so repeated triggers do not pile up.
    pub async fn unread_exists(
        &self,
        user_id: Uuid,
        kind: &str,
        reference_id: Uuid,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::Kind.eq(kind))
            .filter(entity::notification::Column::ReferenceId.eq(reference_id))
            .filter(entity::notification::Column::IsRead.eq(false))
            .count(self.db)
            .await?;
        Ok(count > 0)
    }

    /// Gets one page of the user's notifications, newest first.
    ///
    /// # Returns
    /// The page rows and the total notification count.
    pub async fn find_by_user_paginated(
        &self,
        user_id: Uuid,
        unread_only: bool,
        page: u64,
        size: u64,
    ) -> Result<(Vec<entity::notification::Model>, u64), DbErr> {
        let mut query = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id));

        if unread_only {
            query = query.filter(entity::notification::Column::IsRead.eq(false));
        }

        let query = query.order_by_desc(entity::notification::Column::CreatedAt);

        let total = query.clone().count(self.db).await?;

        let rows = query.paginate(self.db, size).fetch_page(page).await?;

        Ok((rows, total))
    }

    pub async fn count_unread(&self, user_id: Uuid) -> Result<u64, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::IsRead.eq(false))
            .count(self.db)
            .await
    }

    pub async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<entity::notification::Model>, DbErr> {
        entity::prelude::Notification::find_by_id(id).one(self.db).await
    }

    pub async fn mark_read(&self, notification_id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Notification::update_many()
            .filter(entity::notification::Column::Id.eq(notification_id))
            .col_expr(entity::notification::Column::IsRead, Expr::value(true))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Marks all of the user's unread notifications of this kind and
    /// reference as read, used when the referenced chat is opened.
    ///
    /// The kind filter keeps other notifications sharing the reference
    /// (a session scheduled in the same game, for instance) unread.
    pub async fn mark_read_by_reference(
        &self,
        user_id: Uuid,
        kind: &str,
        reference_id: Uuid,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::Kind.eq(kind))
            .filter(entity::notification::Column::ReferenceId.eq(reference_id))
            .filter(entity::notification::Column::IsRead.eq(false))
            .col_expr(entity::notification::Column::IsRead, Expr::value(true))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn mark_all_read(&self, user_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::IsRead.eq(false))
            .col_expr(entity::notification::Column::IsRead, Expr::value(true))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
