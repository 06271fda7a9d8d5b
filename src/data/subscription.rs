//! Subscription data repository.
//!
//! At most one subscription row exists per (user, game); leaving and rejoining
//! toggle `is_active` on that row.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};
use uuid::Uuid;

/// Repository providing database operations for game memberships.
pub struct SubscriptionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriptionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new membership row.
    ///
    /// # Arguments
    /// - `user_id` / `game_id` - The member and the game
    /// - `role` - "OWNER" for the creator, "PLAYER" otherwise
    /// - `is_admin` - Whether the member can manage the game
    pub async fn create(
        &self,
        user_id: Uuid,
        game_id: Uuid,
        role: &str,
        is_admin: bool,
    ) -> Result<entity::subscription::Model, DbErr> {
        entity::subscription::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            game_id: ActiveValue::Set(game_id),
            game_nickname: ActiveValue::Set(None),
            role: ActiveValue::Set(role.to_string()),
            is_admin: ActiveValue::Set(is_admin),
            is_active: ActiveValue::Set(true),
        }
        .insert(self.db)
        .await
    }

    /// Finds the membership row for a (user, game) pair, active or not.
    pub async fn find_by_user_and_game(
        &self,
        user_id: Uuid,
        game_id: Uuid,
    ) -> Result<Option<entity::subscription::Model>, DbErr> {
        entity::prelude::Subscription::find()
            .filter(entity::subscription::Column::UserId.eq(user_id))
            .filter(entity::subscription::Column::GameId.eq(game_id))
            .one(self.db)
            .await
    }

    /// Gets all active memberships of a game together with the member profile.
    pub async fn find_active_by_game(
        &self,
        game_id: Uuid,
    ) -> Result<Vec<(entity::subscription::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Subscription::find()
            .filter(entity::subscription::Column::GameId.eq(game_id))
            .filter(entity::subscription::Column::IsActive.eq(true))
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await
    }

    /// Counts active members of a game, used for seat-limit checks.
    pub async fn count_active_by_game(&self, game_id: Uuid) -> Result<u64, DbErr> {
        entity::prelude::Subscription::find()
            .filter(entity::subscription::Column::GameId.eq(game_id))
            .filter(entity::subscription::Column::IsActive.eq(true))
            .count(self.db)
            .await
    }

    /// Activates or deactivates a membership row.
    pub async fn set_active(&self, subscription_id: Uuid, is_active: bool) -> Result<(), DbErr> {
        entity::prelude::Subscription::update_many()
            .filter(entity::subscription::Column::Id.eq(subscription_id))
            .col_expr(
                entity::subscription::Column::IsActive,
                Expr::value(is_active),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
