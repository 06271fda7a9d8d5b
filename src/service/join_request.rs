//! Join request service: how players get seats at a table.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    data::{
        game::GameRepository, join_request::JoinRequestRepository,
        subscription::SubscriptionRepository,
    },
    error::AppError,
    model::{
        friend_request::{STATUS_ACCEPTED, STATUS_REJECTED},
        join_request::{JoinRequestDto, JoinRequestExistsDto},
        subscription::ROLE_PLAYER,
    },
};

pub struct JoinRequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JoinRequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies to join a game.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Game missing or deleted
    /// - `Err(AppError::Conflict)` - Already an active member, a pending
    ///   request exists, or the game is full
    pub async fn apply(
        &self,
        user_id: Uuid,
        game_id: Uuid,
        message: Option<String>,
    ) -> Result<JoinRequestDto, AppError> {
        let game_repo = GameRepository::new(self.db);

        let Some(game) = game_repo.find_active_by_id(game_id).await? else {
            return Err(AppError::NotFound("Game not found".to_string()));
        };

        let subscription_repo = SubscriptionRepository::new(self.db);

        if let Some(subscription) = subscription_repo
            .find_by_user_and_game(user_id, game_id)
            .await?
        {
            if subscription.is_active {
                return Err(AppError::Conflict(
                    "You are already a member of this game".to_string(),
                ));
            }
        }

        let repo = JoinRequestRepository::new(self.db);

        if repo
            .find_pending_by_user_and_game(user_id, game_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "A join request for this game already exists".to_string(),
            ));
        }

        if let Some(max_players) = game.max_players {
            let active = subscription_repo.count_active_by_game(game_id).await?;
            if active >= u64::try_from(max_players).unwrap_or(0) {
                return Err(AppError::Conflict("The game is full".to_string()));
            }
        }

        let request = repo.create(user_id, game_id, message).await?;
        Ok(JoinRequestDto::from_entity(request))
    }

    /// Tells the caller whether they have a pending request for a game.
    pub async fn exists(
        &self,
        user_id: Uuid,
        game_id: Uuid,
    ) -> Result<JoinRequestExistsDto, AppError> {
        let repo = JoinRequestRepository::new(self.db);
        let exists = repo
            .find_pending_by_user_and_game(user_id, game_id)
            .await?
            .is_some();

        Ok(JoinRequestExistsDto { exists })
    }

    /// Lists a game's pending applications.
    pub async fn pending(&self, game_id: Uuid) -> Result<Vec<JoinRequestDto>, AppError> {
        let repo = JoinRequestRepository::new(self.db);
        let requests = repo.find_pending_by_game(game_id).await?;

        Ok(requests
            .into_iter()
            .map(|(request, _)| JoinRequestDto::from_entity(request))
            .collect())
    }

    /// Accepts an application, turning it into a PLAYER membership.
    ///
    /// A previous inactive membership is reactivated instead of duplicated.
    pub async fn accept(
        &self,
        game_id: Uuid,
        request_id: Uuid,
    ) -> Result<JoinRequestDto, AppError> {
        let repo = JoinRequestRepository::new(self.db);
        let request = self.find_pending_in_game(&repo, game_id, request_id).await?;

        let game_repo = GameRepository::new(self.db);
        let Some(game) = game_repo.find_active_by_id(game_id).await? else {
            return Err(AppError::NotFound("Game not found".to_string()));
        };

        let subscription_repo = SubscriptionRepository::new(self.db);

        if let Some(max_players) = game.max_players {
            let active = subscription_repo.count_active_by_game(game_id).await?;
            if active >= u64::try_from(max_players).unwrap_or(0) {
                return Err(AppError::Conflict("The game is full".to_string()));
            }
        }

        match subscription_repo
            .find_by_user_and_game(request.user_id, game_id)
            .await?
        {
            Some(subscription) if !subscription.is_active => {
                subscription_repo.set_active(subscription.id, true).await?;
            }
            Some(_) => {}
            None => {
                subscription_repo
                    .create(request.user_id, game_id, ROLE_PLAYER, false)
                    .await?;
            }
        }

        let updated = repo.update_status(request, STATUS_ACCEPTED).await?;
        Ok(JoinRequestDto::from_entity(updated))
    }

    /// Rejects an application.
    pub async fn reject(
        &self,
        game_id: Uuid,
        request_id: Uuid,
    ) -> Result<JoinRequestDto, AppError> {
        let repo = JoinRequestRepository::new(self.db);
        let request = self.find_pending_in_game(&repo, game_id, request_id).await?;

        let updated = repo.update_status(request, STATUS_REJECTED).await?;
        Ok(JoinRequestDto::from_entity(updated))
    }

    async fn find_pending_in_game(
        &self,
        repo: &JoinRequestRepository<'_>,
        game_id: Uuid,
        request_id: Uuid,
    ) -> Result<entity::join_request::Model, AppError> {
        match repo.find_by_id(request_id).await? {
            Some(request)
                if request.game_id == game_id
                    && request.status == crate::model::friend_request::STATUS_PENDING =>
            {
                Ok(request)
            }
            _ => Err(AppError::NotFound("Join request not found".to_string())),
        }
    }
}
