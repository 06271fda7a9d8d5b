//! User service for profile lifecycle logic.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    data::user::UserRepository,
    error::AppError,
    middleware::auth::AuthUser,
    model::user::{RegisterUserDto, UpdateUserDto, UserDto},
    service::auth_admin::AuthAdminService,
    service::storage::{StorageService, BUCKET_PROFILE_PHOTOS},
};

/// Service providing business logic for user profiles.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a local profile for an authenticated auth account.
    ///
    /// The auth provider has already created its account when this runs, so
    /// any registration failure triggers a best-effort deletion of that
    /// account to avoid orphans, and the original error is propagated.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Profile created
    /// - `Err(AppError::Conflict)` - Email already registered or nickname taken
    pub async fn register(
        &self,
        auth_admin: &AuthAdminService<'_>,
        storage: &StorageService<'_>,
        caller: &AuthUser,
        dto: RegisterUserDto,
    ) -> Result<UserDto, AppError> {
        let result = self.try_register(caller, dto).await;

        match result {
            Ok(user) => Ok(self.to_dto(storage, user)),
            Err(err) => {
                auth_admin.delete_user(caller.id).await;
                Err(err)
            }
        }
    }

    async fn try_register(
        &self,
        caller: &AuthUser,
        dto: RegisterUserDto,
    ) -> Result<entity::user::Model, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&caller.email).await?.is_some() {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }
        if repo.nickname_taken(&dto.nickname, None).await? {
            return Err(AppError::Conflict("Nickname already taken".to_string()));
        }

        Ok(repo.create(caller.id, caller.email.clone(), dto).await?)
    }

    /// Gets the caller's profile, creating one on first login.
    ///
    /// A fresh profile defaults the nickname to the email local part.
    pub async fn login(
        &self,
        storage: &StorageService<'_>,
        caller: &AuthUser,
    ) -> Result<UserDto, AppError> {
        let repo = UserRepository::new(self.db);

        if let Some(user) = repo.find_by_id(caller.id).await? {
            return Ok(self.to_dto(storage, user));
        }

        let nickname = caller
            .email
            .split('@')
            .next()
            .unwrap_or(&caller.email)
            .to_string();

        let user = repo
            .create(
                caller.id,
                caller.email.clone(),
                RegisterUserDto {
                    nickname,
                    bio: None,
                    preference: None,
                    disponibility: None,
                },
            )
            .await?;

        Ok(self.to_dto(storage, user))
    }

    /// Gets a user's profile by id.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Profile found
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get_profile(
        &self,
        storage: &StorageService<'_>,
        user_id: Uuid,
    ) -> Result<UserDto, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        Ok(self.to_dto(storage, user))
    }

    /// Applies a partial profile update for the caller.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Updated profile
    /// - `Err(AppError::NotFound)` - Caller has no local profile
    /// - `Err(AppError::Conflict)` - Requested nickname belongs to someone else
    pub async fn update_profile(
        &self,
        storage: &StorageService<'_>,
        user_id: Uuid,
        dto: UpdateUserDto,
    ) -> Result<UserDto, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if let Some(nickname) = &dto.nickname {
            if repo.nickname_taken(nickname, Some(user_id)).await? {
                return Err(AppError::Conflict("Nickname already taken".to_string()));
            }
        }

        let updated = repo.update_profile(user, dto).await?;
        Ok(self.to_dto(storage, updated))
    }

    /// Stores a new profile photo and records its path.
    ///
    /// Objects are keyed by user id, so re-uploads overwrite in place.
    pub async fn upload_photo(
        &self,
        storage: &StorageService<'_>,
        user_id: Uuid,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<UserDto, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        let path = user_id.to_string();
        storage
            .upload(BUCKET_PROFILE_PHOTOS, &path, content_type, data)
            .await?;
        repo.set_profile_photo(user_id, Some(path.clone())).await?;

        let mut user = user;
        user.profile_photo = Some(path);
        Ok(self.to_dto(storage, user))
    }

    /// Removes the stored profile photo, if any.
    pub async fn delete_photo(
        &self,
        storage: &StorageService<'_>,
        user_id: Uuid,
    ) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if let Some(path) = user.profile_photo {
            storage.delete(BUCKET_PROFILE_PHOTOS, &path).await?;
            repo.set_profile_photo(user_id, None).await?;
        }

        Ok(())
    }

    /// Deletes the caller's profile and, best effort, the auth account.
    pub async fn delete_account(
        &self,
        auth_admin: &AuthAdminService<'_>,
        storage: &StorageService<'_>,
        user_id: Uuid,
    ) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if let Some(path) = &user.profile_photo {
            storage.delete_best_effort(BUCKET_PROFILE_PHOTOS, path).await;
        }

        repo.delete(user).await?;
        auth_admin.delete_user(user_id).await;

        Ok(())
    }

    fn to_dto(&self, storage: &StorageService<'_>, user: entity::user::Model) -> UserDto {
        let photo_url = storage.resolve(BUCKET_PROFILE_PHOTOS, user.profile_photo.as_deref());
        UserDto::from_entity(user, photo_url)
    }
}
