//! Game service for table lifecycle and membership logic.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    data::{game::GameRepository, subscription::SubscriptionRepository, theme::ThemeRepository},
    error::AppError,
    model::{
        game::{CreateGameDto, GameDetailDto, GameDto, GameMemberDto, UpdateGameDto},
        subscription::ROLE_OWNER,
    },
    service::storage::{StorageService, BUCKET_GAME_PHOTOS, BUCKET_PROFILE_PHOTOS},
};

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a game and subscribes the creator as its OWNER admin.
    ///
    /// # Returns
    /// - `Ok(GameDto)` - Game created
    /// - `Err(AppError::BadRequest)` - `max_players` below 1
    /// - `Err(AppError::NotFound)` - Referenced theme does not exist
    pub async fn create(
        &self,
        storage: &StorageService<'_>,
        creator_id: Uuid,
        dto: CreateGameDto,
    ) -> Result<GameDto, AppError> {
        if matches!(dto.max_players, Some(max) if max < 1) {
            return Err(AppError::BadRequest(
                "max_players must be at least 1".to_string(),
            ));
        }

        if let Some(theme_id) = dto.theme_id {
            let theme_repo = ThemeRepository::new(self.db);
            if theme_repo.find_by_id(theme_id).await?.is_none() {
                return Err(AppError::NotFound("Theme not found".to_string()));
            }
        }

        let game_repo = GameRepository::new(self.db);
        let game = game_repo.create(dto).await?;

        let subscription_repo = SubscriptionRepository::new(self.db);
        subscription_repo
            .create(creator_id, game.id, ROLE_OWNER, true)
            .await?;

        Ok(self.to_dto(storage, game))
    }

    /// Lists public, non-deleted games with an optional name filter.
    pub async fn search_public(
        &self,
        storage: &StorageService<'_>,
        name: Option<&str>,
    ) -> Result<Vec<GameDto>, AppError> {
        let repo = GameRepository::new(self.db);
        let games = repo.find_public(name).await?;

        Ok(games
            .into_iter()
            .map(|game| self.to_dto(storage, game))
            .collect())
    }

    /// Lists the games the user is actively subscribed to.
    pub async fn my_games(
        &self,
        storage: &StorageService<'_>,
        user_id: Uuid,
    ) -> Result<Vec<GameDto>, AppError> {
        let repo = GameRepository::new(self.db);
        let games = repo.find_active_for_user(user_id).await?;

        Ok(games
            .into_iter()
            .map(|game| self.to_dto(storage, game))
            .collect())
    }

    /// Builds the detail view of a game: theme name, master, player list.
    pub async fn detail(
        &self,
        storage: &StorageService<'_>,
        game_id: Uuid,
    ) -> Result<GameDetailDto, AppError> {
        let game_repo = GameRepository::new(self.db);

        let Some(game) = game_repo.find_active_by_id(game_id).await? else {
            return Err(AppError::NotFound("Game not found".to_string()));
        };

        let theme_name = match game.theme_id {
            Some(theme_id) => {
                let theme_repo = ThemeRepository::new(self.db);
                theme_repo.find_by_id(theme_id).await?.map(|t| t.name)
            }
            None => None,
        };

        let subscription_repo = SubscriptionRepository::new(self.db);
        let members = subscription_repo.find_active_by_game(game_id).await?;

        let master_id = members
            .iter()
            .find(|(s, _)| s.role == ROLE_OWNER)
            .map(|(s, _)| s.user_id);

        let players: Vec<GameMemberDto> = members
            .iter()
            .filter_map(|(subscription, user)| {
                user.as_ref().map(|user| GameMemberDto {
                    user_id: user.id,
                    nickname: user.nickname.clone(),
                    game_nickname: subscription.game_nickname.clone(),
                    role: subscription.role.clone(),
                    is_admin: subscription.is_admin,
                    profile_photo: storage
                        .resolve(BUCKET_PROFILE_PHOTOS, user.profile_photo.as_deref()),
                })
            })
            .collect();

        let player_count = players.len() as u64;
        let game_photo = storage.resolve(BUCKET_GAME_PHOTOS, game.game_photo.as_deref());

        Ok(GameDetailDto {
            id: game.id,
            name: game.name,
            description: game.description,
            game_photo,
            max_players: game.max_players,
            is_public: game.is_public,
            theme_id: game.theme_id,
            theme_name,
            master_id,
            player_count,
            players,
        })
    }

    /// Applies a partial update to a game.
    pub async fn update(
        &self,
        storage: &StorageService<'_>,
        game_id: Uuid,
        dto: UpdateGameDto,
    ) -> Result<GameDto, AppError> {
        let repo = GameRepository::new(self.db);

        let Some(game) = repo.find_active_by_id(game_id).await? else {
            return Err(AppError::NotFound("Game not found".to_string()));
        };

        if matches!(dto.max_players, Some(max) if max < 1) {
            return Err(AppError::BadRequest(
                "max_players must be at least 1".to_string(),
            ));
        }

        if let Some(theme_id) = dto.theme_id {
            let theme_repo = ThemeRepository::new(self.db);
            if theme_repo.find_by_id(theme_id).await?.is_none() {
                return Err(AppError::NotFound("Theme not found".to_string()));
            }
        }

        let updated = repo.update(game, dto).await?;
        Ok(self.to_dto(storage, updated))
    }

    /// Soft deletes a game. The row and its history survive.
    pub async fn delete(&self, game_id: Uuid) -> Result<(), AppError> {
        let repo = GameRepository::new(self.db);

        if repo.find_active_by_id(game_id).await?.is_none() {
            return Err(AppError::NotFound("Game not found".to_string()));
        }

        repo.soft_delete(game_id).await?;
        Ok(())
    }

    /// Lists the active members of a game.
    pub async fn members(
        &self,
        storage: &StorageService<'_>,
        game_id: Uuid,
    ) -> Result<Vec<GameMemberDto>, AppError> {
        let repo = SubscriptionRepository::new(self.db);
        let members = repo.find_active_by_game(game_id).await?;

        Ok(members
            .into_iter()
            .filter_map(|(subscription, user)| {
                user.map(|user| GameMemberDto {
                    user_id: user.id,
                    nickname: user.nickname,
                    game_nickname: subscription.game_nickname,
                    role: subscription.role,
                    is_admin: subscription.is_admin,
                    profile_photo: storage
                        .resolve(BUCKET_PROFILE_PHOTOS, user.profile_photo.as_deref()),
                })
            })
            .collect())
    }

    /// Deactivates the caller's membership.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Caller is not an active member
    /// - `Err(AppError::Forbidden)` - Caller is the OWNER, who cannot leave
    pub async fn leave(&self, user_id: Uuid, game_id: Uuid) -> Result<(), AppError> {
        let repo = SubscriptionRepository::new(self.db);

        let Some(subscription) = repo.find_by_user_and_game(user_id, game_id).await? else {
            return Err(AppError::BadRequest(
                "You are not subscribed to this game".to_string(),
            ));
        };

        if !subscription.is_active {
            return Err(AppError::BadRequest(
                "You are not subscribed to this game".to_string(),
            ));
        }

        if subscription.role == ROLE_OWNER {
            return Err(AppError::Forbidden(
                "The game owner cannot leave the game".to_string(),
            ));
        }

        repo.set_active(subscription.id, false).await?;
        Ok(())
    }

    /// Reactivates a previously deactivated membership.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Caller never subscribed to the game
    /// - `Err(AppError::Conflict)` - Membership already active, or game full
    pub async fn rejoin(&self, user_id: Uuid, game_id: Uuid) -> Result<(), AppError> {
        let game_repo = GameRepository::new(self.db);

        let Some(game) = game_repo.find_active_by_id(game_id).await? else {
            return Err(AppError::NotFound("Game not found".to_string()));
        };

        let repo = SubscriptionRepository::new(self.db);

        let Some(subscription) = repo.find_by_user_and_game(user_id, game_id).await? else {
            return Err(AppError::BadRequest(
                "You have never subscribed to this game".to_string(),
            ));
        };

        if subscription.is_active {
            return Err(AppError::Conflict(
                "You are already a member of this game".to_string(),
            ));
        }

        if let Some(max_players) = game.max_players {
            let active = repo.count_active_by_game(game_id).await?;
            if active >= u64::try_from(max_players).unwrap_or(0) {
                return Err(AppError::Conflict("The game is full".to_string()));
            }
        }

        repo.set_active(subscription.id, true).await?;
        Ok(())
    }

    /// Stores a game photo and records its path.
    pub async fn upload_photo(
        &self,
        storage: &StorageService<'_>,
        game_id: Uuid,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<GameDto, AppError> {
        let repo = GameRepository::new(self.db);

        let Some(mut game) = repo.find_active_by_id(game_id).await? else {
            return Err(AppError::NotFound("Game not found".to_string()));
        };

        let path = game_id.to_string();
        storage
            .upload(BUCKET_GAME_PHOTOS, &path, content_type, data)
            .await?;
        repo.set_photo(game_id, Some(path.clone())).await?;

        game.game_photo = Some(path);
        Ok(self.to_dto(storage, game))
    }

    /// Removes the stored game photo, if any.
    pub async fn delete_photo(
        &self,
        storage: &StorageService<'_>,
        game_id: Uuid,
    ) -> Result<(), AppError> {
        let repo = GameRepository::new(self.db);

        let Some(game) = repo.find_active_by_id(game_id).await? else {
            return Err(AppError::NotFound("Game not found".to_string()));
        };

        if let Some(path) = game.game_photo {
            storage.delete(BUCKET_GAME_PHOTOS, &path).await?;
            repo.set_photo(game_id, None).await?;
        }

        Ok(())
    }

    fn to_dto(&self, storage: &StorageService<'_>, game: entity::game::Model) -> GameDto {
        let photo_url = storage.resolve(BUCKET_GAME_PHOTOS, game.game_photo.as_deref());
        GameDto::from_entity(game, photo_url)
    }
}
