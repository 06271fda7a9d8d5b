//! Theme factory for creating test theme entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test themes with customizable fields.
pub struct ThemeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
}

impl<'a> ThemeFactory<'a> {
    /// Creates a new ThemeFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Theme {n}"` where n is auto-incremented
    /// - description: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            name: format!("Theme {}", n),
            description: None,
        }
    }

    /// Sets the name for the theme.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the description for the theme.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds and inserts the theme entity into the database.
    pub async fn build(self) -> Result<entity::theme::Model, DbErr> {
        entity::theme::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            theme_photo: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a theme with default values.
pub async fn create_theme(db: &DatabaseConnection) -> Result<entity::theme::Model, DbErr> {
    ThemeFactory::new(db).build().await
}
