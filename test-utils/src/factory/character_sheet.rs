//! Character sheet factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test character sheets with customizable fields.
pub struct CharacterSheetFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Uuid,
    game_id: Uuid,
    name: String,
    role: Option<String>,
    level: Option<i32>,
}

impl<'a> CharacterSheetFactory<'a> {
    /// Creates a new CharacterSheetFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Character {n}"` where n is auto-incremented
    /// - role: `None`
    /// - level: `None`
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid, game_id: Uuid) -> Self {
        let n = next_id();
        Self {
            db,
            user_id,
            game_id,
            name: format!("Character {}", n),
            role: None,
            level: None,
        }
    }

    /// Sets the character name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the character class or role.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Sets the character level.
    pub fn level(mut self, level: i32) -> Self {
        self.level = Some(level);
        self
    }

    /// Builds and inserts the character sheet entity into the database.
    pub async fn build(self) -> Result<entity::character_sheet::Model, DbErr> {
        entity::character_sheet::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(self.user_id),
            game_id: ActiveValue::Set(self.game_id),
            name: ActiveValue::Set(self.name),
            role: ActiveValue::Set(self.role),
            description: ActiveValue::Set(None),
            level: ActiveValue::Set(self.level),
            character_photo: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character sheet with default values.
pub async fn create_character_sheet(
    db: &DatabaseConnection,
    user_id: Uuid,
    game_id: Uuid,
) -> Result<entity::character_sheet::Model, DbErr> {
    CharacterSheetFactory::new(db, user_id, game_id).build().await
}
