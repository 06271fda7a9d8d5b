//! Character sheet service.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    data::{character_sheet::CharacterSheetRepository, subscription::SubscriptionRepository},
    error::AppError,
    model::character_sheet::{
        CharacterSheetDto, CreateCharacterSheetDto, UpdateCharacterSheetDto,
    },
    service::storage::{StorageService, BUCKET_CHARACTER_PHOTOS},
};

pub struct CharacterSheetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterSheetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        storage: &StorageService<'_>,
        user_id: Uuid,
        game_id: Uuid,
        dto: CreateCharacterSheetDto,
    ) -> Result<CharacterSheetDto, AppError> {
        let repo = CharacterSheetRepository::new(self.db);
        let sheet = repo.create(user_id, game_id, dto).await?;

        Ok(self.to_dto(storage, sheet))
    }

    /// Lists every sheet of a game.
    pub async fn list(
        &self,
        storage: &StorageService<'_>,
        game_id: Uuid,
    ) -> Result<Vec<CharacterSheetDto>, AppError> {
        let repo = CharacterSheetRepository::new(self.db);
        let sheets = repo.find_by_game(game_id).await?;

        Ok(sheets
            .into_iter()
            .map(|sheet| self.to_dto(storage, sheet))
            .collect())
    }

    /// Lists the caller's sheets within a game.
    pub async fn mine(
        &self,
        storage: &StorageService<'_>,
        user_id: Uuid,
        game_id: Uuid,
    ) -> Result<Vec<CharacterSheetDto>, AppError> {
        let repo = CharacterSheetRepository::new(self.db);
        let sheets = repo.find_by_user_and_game(user_id, game_id).await?;

        Ok(sheets
            .into_iter()
            .map(|sheet| self.to_dto(storage, sheet))
            .collect())
    }

    pub async fn get(
        &self,
        storage: &StorageService<'_>,
        game_id: Uuid,
        sheet_id: Uuid,
    ) -> Result<CharacterSheetDto, AppError> {
        let sheet = self.find_in_game(game_id, sheet_id).await?;
        Ok(self.to_dto(storage, sheet))
    }

    /// Applies a partial update to a sheet. Owner only.
    pub async fn update(
        &self,
        storage: &StorageService<'_>,
        user_id: Uuid,
        game_id: Uuid,
        sheet_id: Uuid,
        dto: UpdateCharacterSheetDto,
    ) -> Result<CharacterSheetDto, AppError> {
        let sheet = self.find_in_game(game_id, sheet_id).await?;

        if sheet.user_id != user_id {
            return Err(AppError::Forbidden(
                "Only the character's owner can update it".to_string(),
            ));
        }

        let repo = CharacterSheetRepository::new(self.db);
        let updated = repo.update(sheet, dto).await?;

        Ok(self.to_dto(storage, updated))
    }

    /// Deletes a sheet. Owner or game admin only.
    ///
    /// The stored photo is removed best effort: a dangling object is better
    /// than a sheet the player cannot delete.
    pub async fn delete(
        &self,
        storage: &StorageService<'_>,
        user_id: Uuid,
        game_id: Uuid,
        sheet_id: Uuid,
    ) -> Result<(), AppError> {
        let sheet = self.find_in_game(game_id, sheet_id).await?;

        if sheet.user_id != user_id {
            let subscription_repo = SubscriptionRepository::new(self.db);
            let subscription = subscription_repo
                .find_by_user_and_game(user_id, game_id)
                .await?;

            if !subscription
                .map(|s| s.is_active && s.is_admin)
                .unwrap_or(false)
            {
                return Err(AppError::Forbidden(
                    "Only the character's owner or a game admin can delete it".to_string(),
                ));
            }
        }

        if let Some(path) = &sheet.character_photo {
            storage.delete_best_effort(BUCKET_CHARACTER_PHOTOS, path).await;
        }

        let repo = CharacterSheetRepository::new(self.db);
        repo.delete(sheet).await?;

        Ok(())
    }

    /// Stores a character photo. Owner only.
    pub async fn upload_photo(
        &self,
        storage: &StorageService<'_>,
        user_id: Uuid,
        game_id: Uuid,
        sheet_id: Uuid,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<CharacterSheetDto, AppError> {
        let mut sheet = self.find_in_game(game_id, sheet_id).await?;

        if sheet.user_id != user_id {
            return Err(AppError::Forbidden(
                "Only the character's owner can change its photo".to_string(),
            ));
        }

        let path = format!("{}/{}", game_id, sheet_id);
        storage
            .upload(BUCKET_CHARACTER_PHOTOS, &path, content_type, data)
            .await?;

        let repo = CharacterSheetRepository::new(self.db);
        repo.set_photo(sheet_id, Some(path.clone())).await?;

        sheet.character_photo = Some(path);
        Ok(self.to_dto(storage, sheet))
    }

    /// Removes the stored character photo, if any. Owner only.
    pub async fn delete_photo(
        &self,
        storage: &StorageService<'_>,
        user_id: Uuid,
        game_id: Uuid,
        sheet_id: Uuid,
    ) -> Result<(), AppError> {
        let sheet = self.find_in_game(game_id, sheet_id).await?;

        if sheet.user_id != user_id {
            return Err(AppError::Forbidden(
                "Only the character's owner can change its photo".to_string(),
            ));
        }

        if let Some(path) = sheet.character_photo {
            storage.delete(BUCKET_CHARACTER_PHOTOS, &path).await?;

            let repo = CharacterSheetRepository::new(self.db);
            repo.set_photo(sheet.id, None).await?;
        }

        Ok(())
    }

    async fn find_in_game(
        &self,
        game_id: Uuid,
        sheet_id: Uuid,
    ) -> Result<entity::character_sheet::Model, AppError> {
        let repo = CharacterSheetRepository::new(self.db);

        match repo.find_by_id(sheet_id).await? {
            Some(sheet) if sheet.game_id == game_id => Ok(sheet),
            _ => Err(AppError::NotFound("Character sheet not found".to_string())),
        }
    }

    fn to_dto(
        &self,
        storage: &StorageService<'_>,
        sheet: entity::character_sheet::Model,
    ) -> CharacterSheetDto {
        let photo_url = storage.resolve(BUCKET_CHARACTER_PHOTOS, sheet.character_photo.as_deref());
        CharacterSheetDto::from_entity(sheet, photo_url)
    }
}
