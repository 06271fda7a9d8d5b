//! Theme service.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    data::theme::ThemeRepository,
    error::AppError,
    model::theme::ThemeDto,
    service::storage::{StorageService, BUCKET_THEME_PHOTOS},
};

pub struct ThemeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ThemeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists themes, optionally filtered by a case-insensitive name fragment.
    pub async fn list(
        &self,
        storage: &StorageService<'_>,
        name: Option<&str>,
    ) -> Result<Vec<ThemeDto>, AppError> {
        let repo = ThemeRepository::new(self.db);

        let themes = match name {
            Some(fragment) => repo.find_by_name_contains(fragment).await?,
            None => repo.get_all().await?,
        };

        Ok(themes
            .into_iter()
            .map(|theme| self.to_dto(storage, theme))
            .collect())
    }

    /// Stores a theme photo and records its path.
    pub async fn upload_photo(
        &self,
        storage: &StorageService<'_>,
        theme_id: Uuid,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<ThemeDto, AppError> {
        let repo = ThemeRepository::new(self.db);

        let Some(mut theme) = repo.find_by_id(theme_id).await? else {
            return Err(AppError::NotFound("Theme not found".to_string()));
        };

        let path = theme_id.to_string();
        storage
            .upload(BUCKET_THEME_PHOTOS, &path, content_type, data)
            .await?;
        repo.set_photo(theme_id, Some(path.clone())).await?;

        theme.theme_photo = Some(path);
        Ok(self.to_dto(storage, theme))
    }

    /// Removes the stored theme photo, if any.
    pub async fn delete_photo(
        &self,
        storage: &StorageService<'_>,
        theme_id: Uuid,
    ) -> Result<(), AppError> {
        let repo = ThemeRepository::new(self.db);

        let Some(theme) = repo.find_by_id(theme_id).await? else {
            return Err(AppError::NotFound("Theme not found".to_string()));
        };

        if let Some(path) = theme.theme_photo {
            storage.delete(BUCKET_THEME_PHOTOS, &path).await?;
            repo.set_photo(theme_id, None).await?;
        }

        Ok(())
    }

    fn to_dto(&self, storage: &StorageService<'_>, theme: entity::theme::Model) -> ThemeDto {
        let photo_url = storage.resolve(BUCKET_THEME_PHOTOS, theme.theme_photo.as_deref());
        ThemeDto::from_entity(theme, photo_url)
    }
}
