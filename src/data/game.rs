//! Game data repository.
//!
//! Games are never hard-deleted; `soft_delete` flips `is_deleted` and every
//! listing query filters it out.

use sea_orm::sea_query::{Expr, ExprTrait, Func};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::model::game::{CreateGameDto, UpdateGameDto};

/// Repository providing database operations for games.
pub struct GameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new game. The owner subscription is created separately by the
    /// service inside the same flow.
    pub async fn create(&self, dto: CreateGameDto) -> Result<entity::game::Model, DbErr> {
        entity::game::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(dto.name),
            description: ActiveValue::Set(dto.description),
            game_photo: ActiveValue::Set(None),
            max_players: ActiveValue::Set(dto.max_players),
            is_public: ActiveValue::Set(dto.is_public.unwrap_or(true)),
            is_deleted: ActiveValue::Set(false),
            theme_id: ActiveValue::Set(dto.theme_id),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::game::Model>, DbErr> {
        entity::prelude::Game::find_by_id(id).one(self.db).await
    }

    /// Finds a game that has not been soft-deleted.
    pub async fn find_active_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<entity::game::Model>, DbErr> {
        entity::prelude::Game::find_by_id(id)
            .filter(entity::game::Column::IsDeleted.eq(false))
            .one(self.db)
            .await
    }

    /// Gets public, non-deleted games with an optional case-insensitive name
    /// filter, ordered alphabetically.
    pub async fn find_public(
        &self,
        name: Option<&str>,
    ) -> Result<Vec<entity::game::Model>, DbErr> {
        let mut query = entity::prelude::Game::find()
            .filter(entity::game::Column::IsPublic.eq(true))
            .filter(entity::game::Column::IsDeleted.eq(false));

        if let Some(name) = name {
            query = query.filter(
                Expr::expr(Func::lower(Expr::col(entity::game::Column::Name)))
                    .like(format!("%{}%", name.to_lowercase())),
            );
        }

        query
            .order_by_asc(entity::game::Column::Name)
            .all(self.db)
            .await
    }

    /// Gets the non-deleted games the user holds an active subscription to.
    pub async fn find_active_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<entity::game::Model>, DbErr> {
        entity::prelude::Game::find()
            .inner_join(entity::prelude::Subscription)
            .filter(entity::subscription::Column::UserId.eq(user_id))
            .filter(entity::subscription::Column::IsActive.eq(true))
            .filter(entity::game::Column::IsDeleted.eq(false))
            .order_by_asc(entity::game::Column::Name)
            .all(self.db)
            .await
    }

    /// Applies a partial update. Only fields present in the DTO are written.
    pub async fn update(
        &self,
        game: entity::game::Model,
        dto: UpdateGameDto,
    ) -> Result<entity::game::Model, DbErr> {
        let mut active: entity::game::ActiveModel = game.into();

        if let Some(name) = dto.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = dto.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(max_players) = dto.max_players {
            active.max_players = ActiveValue::Set(Some(max_players));
        }
        if let Some(is_public) = dto.is_public {
            active.is_public = ActiveValue::Set(is_public);
        }
        if let Some(theme_id) = dto.theme_id {
            active.theme_id = ActiveValue::Set(Some(theme_id));
        }

        active.update(self.db).await
    }

    /// Marks a game deleted without removing the row.
    pub async fn soft_delete(&self, game_id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Game::update_many()
            .filter(entity::game::Column::Id.eq(game_id))
            .col_expr(entity::game::Column::IsDeleted, Expr::value(true))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Sets or clears the stored game photo path.
    pub async fn set_photo(&self, game_id: Uuid, photo_path: Option<String>) -> Result<(), DbErr> {
        entity::prelude::Game::update_many()
            .filter(entity::game::Column::Id.eq(game_id))
            .col_expr(entity::game::Column::GamePhoto, Expr::value(photo_path))
            .exec(self.db)
            .await?;
        Ok(())
    }
}
