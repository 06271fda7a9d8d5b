//! Private message data repository.
//!
//! A conversation is the set of messages exchanged between two users in
//! either direction. There is no conversation table, so conversation queries
//! filter on both (sender, receiver) orderings.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

/// Repository providing database operations for direct messages.
pub struct PrivateMessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PrivateMessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        sender_id: Uuid,
        receiver_id: Uuid,
        content: Option<String>,
        image_url: Option<String>,
    ) -> Result<entity::private_message::Model, DbErr> {
        entity::private_message::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            sender_id: ActiveValue::Set(sender_id),
            receiver_id: ActiveValue::Set(receiver_id),
            content: ActiveValue::Set(content),
            image_url: ActiveValue::Set(image_url),
            created_at: ActiveValue::Set(chrono::Utc::now()),
        }
        .insert(self.db)
        .await
    }

    fn between_condition(a: Uuid, b: Uuid) -> Condition {
        Condition::any()
            .add(
                Condition::all()
                    .add(entity::private_message::Column::SenderId.eq(a))
                    .add(entity::private_message::Column::ReceiverId.eq(b)),
            )
            .add(
                Condition::all()
                    .add(entity::private_message::Column::SenderId.eq(b))
                    .add(entity::private_message::Column::ReceiverId.eq(a)),
            )
    }

    /// Gets one page of the conversation between two users, newest first.
    ///
    /// # Returns
    /// The page rows and the total message count of the conversation.
    pub async fn find_conversation_paginated(
        &self,
        user_id: Uuid,
        other_id: Uuid,
        page: u64,
        size: u64,
    ) -> Result<(Vec<entity::private_message::Model>, u64), DbErr> {
        let query = entity::prelude::PrivateMessage::find()
            .filter(Self::between_condition(user_id, other_id))
            .order_by_desc(entity::private_message::Column::CreatedAt);

        let total = query.clone().count(self.db).await?;

        let rows = query.paginate(self.db, size).fetch_page(page).await?;

        Ok((rows, total))
    }

    /// Gets every message the user sent or received, newest first.
    ///
    /// Used to build the conversations overview. The caller keeps the first
    /// message seen per counterpart.
    pub async fn find_all_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<entity::private_message::Model>, DbErr> {
        entity::prelude::PrivateMessage::find()
            .filter(
                Condition::any()
                    .add(entity::private_message::Column::SenderId.eq(user_id))
                    .add(entity::private_message::Column::ReceiverId.eq(user_id)),
            )
            .order_by_desc(entity::private_message::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Deletes the whole conversation between two users.
    pub async fn delete_conversation(&self, user_id: Uuid, other_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::PrivateMessage::delete_many()
            .filter(Self::between_condition(user_id, other_id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    /// Clears stored image paths for a conversation, returning the paths that
    /// were set so the caller can remove the objects from storage.
    pub async fn take_image_paths(
        &self,
        user_id: Uuid,
        other_id: Uuid,
    ) -> Result<Vec<String>, DbErr> {
        let rows = entity::prelude::PrivateMessage::find()
            .filter(Self::between_condition(user_id, other_id))
            .filter(entity::private_message::Column::ImageUrl.is_not_null())
            .all(self.db)
            .await?;

        let paths: Vec<String> = rows.into_iter().filter_map(|m| m.image_url).collect();

        if !paths.is_empty() {
            entity::prelude::PrivateMessage::update_many()
                .filter(Self::between_condition(user_id, other_id))
                .col_expr(
                    entity::private_message::Column::ImageUrl,
                    Expr::value(Option::<String>::None),
                )
                .exec(self.db)
                .await?;
        }

        Ok(paths)
    }
}
