//! Subscription factory for creating test game memberships.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test subscriptions with customizable fields.
pub struct SubscriptionFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Uuid,
    game_id: Uuid,
    game_nickname: Option<String>,
    role: String,
    is_admin: bool,
    is_active: bool,
}

impl<'a> SubscriptionFactory<'a> {
    /// Creates a new SubscriptionFactory with default values.
    ///
    /// Defaults:
    /// - role: `"PLAYER"`
    /// - is_admin: `false`
    /// - is_active: `true`
    /// - game_nickname: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - User the subscription belongs to
    /// - `game_id` - Game the subscription belongs to
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid, game_id: Uuid) -> Self {
        Self {
            db,
            user_id,
            game_id,
            game_nickname: None,
            role: "PLAYER".to_string(),
            is_admin: false,
            is_active: true,
        }
    }

    /// Sets the in-game nickname.
    pub fn game_nickname(mut self, game_nickname: impl Into<String>) -> Self {
        self.game_nickname = Some(game_nickname.into());
        self
    }

    /// Sets the membership role.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Sets the admin flag.
    pub fn is_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    /// Sets the active flag.
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the subscription entity into the database.
    pub async fn build(self) -> Result<entity::subscription::Model, DbErr> {
        entity::subscription::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(self.user_id),
            game_id: ActiveValue::Set(self.game_id),
            game_nickname: ActiveValue::Set(self.game_nickname),
            role: ActiveValue::Set(self.role),
            is_admin: ActiveValue::Set(self.is_admin),
            is_active: ActiveValue::Set(self.is_active),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active PLAYER subscription with default values.
pub async fn create_subscription(
    db: &DatabaseConnection,
    user_id: Uuid,
    game_id: Uuid,
) -> Result<entity::subscription::Model, DbErr> {
    SubscriptionFactory::new(db, user_id, game_id).build().await
}

/// Creates an OWNER subscription with the admin flag set.
pub async fn create_owner_subscription(
    db: &DatabaseConnection,
    user_id: Uuid,
    game_id: Uuid,
) -> Result<entity::subscription::Model, DbErr> {
    SubscriptionFactory::new(db, user_id, game_id)
        .role("OWNER")
        .is_admin(true)
        .build()
        .await
}
