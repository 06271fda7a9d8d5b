//! Game chat message data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

/// Repository providing database operations for game chat messages.
pub struct MessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        game_id: Uuid,
        user_id: Uuid,
        content: Option<String>,
        image_url: Option<String>,
    ) -> Result<entity::message::Model, DbErr> {
        entity::message::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            game_id: ActiveValue::Set(game_id),
            user_id: ActiveValue::Set(user_id),
            content: ActiveValue::Set(content),
            image_url: ActiveValue::Set(image_url),
            created_at: ActiveValue::Set(chrono::Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Gets one page of a game's chat, newest first, with the sender profile.
    ///
    /// # Returns
    /// The page rows and the total message count of the game.
    pub async fn find_by_game_paginated(
        &self,
        game_id: Uuid,
        page: u64,
        size: u64,
    ) -> Result<
        (
            Vec<(entity::message::Model, Option<entity::user::Model>)>,
            u64,
        ),
        DbErr,
    > {
        let query = entity::prelude::Message::find()
            .filter(entity::message::Column::GameId.eq(game_id))
            .order_by_desc(entity::message::Column::CreatedAt);

        let total = query.clone().count(self.db).await?;

        let rows = query
            .find_also_related(entity::prelude::User)
            .paginate(self.db, size)
            .fetch_page(page)
            .await?;

        Ok((rows, total))
    }
}
