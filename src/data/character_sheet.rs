//! Character sheet data repository.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::model::character_sheet::{CreateCharacterSheetDto, UpdateCharacterSheetDto};

/// Repository providing database operations for character sheets.
pub struct CharacterSheetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterSheetRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        game_id: Uuid,
        dto: CreateCharacterSheetDto,
    ) -> Result<entity::character_sheet::Model, DbErr> {
        entity::character_sheet::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            game_id: ActiveValue::Set(game_id),
            name: ActiveValue::Set(dto.name),
            role: ActiveValue::Set(dto.role),
            description: ActiveValue::Set(dto.description),
            level: ActiveValue::Set(dto.level),
            character_photo: ActiveValue::Set(None),
            created_at: ActiveValue::Set(chrono::Utc::now()),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<entity::character_sheet::Model>, DbErr> {
        entity::prelude::CharacterSheet::find_by_id(id).one(self.db).await
    }

    /// Gets all sheets of a game, oldest first.
    pub async fn find_by_game(
        &self,
        game_id: Uuid,
    ) -> Result<Vec<entity::character_sheet::Model>, DbErr> {
        entity::prelude::CharacterSheet::find()
            .filter(entity::character_sheet::Column::GameId.eq(game_id))
            .order_by_asc(entity::character_sheet::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Gets the user's sheets within a game.
    pub async fn find_by_user_and_game(
        &self,
        user_id: Uuid,
        game_id: Uuid,
    ) -> Result<Vec<entity::character_sheet::Model>, DbErr> {
        entity::prelude::CharacterSheet::find()
            .filter(entity::character_sheet::Column::UserId.eq(user_id))
            .filter(entity::character_sheet::Column::GameId.eq(game_id))
            .order_by_asc(entity::character_sheet::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Applies a partial update. Only fields present in the DTO are written.
    pub async fn update(
        &self,
        sheet: entity::character_sheet::Model,
        dto: UpdateCharacterSheetDto,
    ) -> Result<entity::character_sheet::Model, DbErr> {
        let mut active: entity::character_sheet::ActiveModel = sheet.into();

        if let Some(name) = dto.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(role) = dto.role {
            active.role = ActiveValue::Set(Some(role));
        }
        if let Some(description) = dto.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(level) = dto.level {
            active.level = ActiveValue::Set(Some(level));
        }

        active.update(self.db).await
    }

    pub async fn set_photo(&self, sheet_id: Uuid, path: Option<String>) -> Result<(), DbErr> {
        entity::prelude::CharacterSheet::update_many()
            .filter(entity::character_sheet::Column::Id.eq(sheet_id))
            .col_expr(
                entity::character_sheet::Column::CharacterPhoto,
                Expr::value(path),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, sheet: entity::character_sheet::Model) -> Result<(), DbErr> {
        sheet.delete(self.db).await?;
        Ok(())
    }
}
