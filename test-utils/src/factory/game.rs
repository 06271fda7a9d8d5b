//! Game factory for creating test game entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test games with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let game = GameFactory::new(&db)
///     .name("Curse of Strahd")
///     .is_public(false)
///     .max_players(5)
///     .build()
///     .await?;
/// ```
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    max_players: Option<i16>,
    is_public: bool,
    is_deleted: bool,
    theme_id: Option<Uuid>,
}

impl<'a> GameFactory<'a> {
    /// Creates a new GameFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Game {n}"` where n is auto-incremented
    /// - description: `None`
    /// - max_players: `None`
    /// - is_public: `true`
    /// - is_deleted: `false`
    /// - theme_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            name: format!("Game {}", n),
            description: None,
            max_players: None,
            is_public: true,
            is_deleted: false,
            theme_id: None,
        }
    }

    /// Sets the name for the game.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the description for the game.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the seat limit for the game.
    pub fn max_players(mut self, max_players: i16) -> Self {
        self.max_players = Some(max_players);
        self
    }

    /// Sets whether the game shows up in public discovery.
    pub fn is_public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    /// Sets the soft-delete flag.
    pub fn is_deleted(mut self, is_deleted: bool) -> Self {
        self.is_deleted = is_deleted;
        self
    }

    /// Sets the theme the game belongs to.
    pub fn theme_id(mut self, theme_id: Uuid) -> Self {
        self.theme_id = Some(theme_id);
        self
    }

    /// Builds and inserts the game entity into the database.
    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        entity::game::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            game_photo: ActiveValue::Set(None),
            max_players: ActiveValue::Set(self.max_players),
            is_public: ActiveValue::Set(self.is_public),
            is_deleted: ActiveValue::Set(self.is_deleted),
            theme_id: ActiveValue::Set(self.theme_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a public game with default values.
pub async fn create_game(db: &DatabaseConnection) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db).build().await
}
