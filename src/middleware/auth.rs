//! Bearer-token authentication and per-game authorization.
//!
//! Identity is delegated to the auth provider: every protected request carries
//! a JWT signed with the provider's shared secret. `AuthUser` extracts and
//! validates the token; `AuthGuard` then enforces game-level permissions
//! against the subscriptions table.

use axum::{extract::FromRequestParts, http::header, http::request::Parts};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    data::{subscription::SubscriptionRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    state::AppState,
};

/// JWT claims issued by the auth provider.
#[derive(Debug, Deserialize)]
pub struct Claims {
    /// Auth account UUID, used as the local user primary key.
    pub sub: Uuid,
    /// Email the account was registered with.
    pub email: String,
    /// Expiry as a unix timestamp, validated by jsonwebtoken.
    pub exp: usize,
}

/// The authenticated caller, extracted from the `Authorization` header.
///
/// Extraction only proves the token is valid; it does not check that a local
/// profile exists. Handlers that need a profile go through `AuthGuard` or the
/// user repository.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
}

/// Decodes and validates a bearer token against the shared secret.
///
/// # Arguments
/// - `token` - Raw JWT without the `Bearer ` prefix
/// - `secret` - HMAC secret shared with the auth provider
///
/// # Returns
/// - `Ok(Claims)` - Token is valid and unexpired
/// - `Err(AuthError::InvalidToken)` - Signature, expiry, or claim validation failed
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )?;

    Ok(data.claims)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::MissingToken)?;

        let claims = decode_token(token, &state.config.supabase_jwt_secret)?;

        Ok(AuthUser {
            id: claims.sub,
            email: claims.email,
        })
    }
}

/// Game-level permissions checked by `AuthGuard::require`.
pub enum Permission {
    /// Caller holds an active subscription to the given game.
    Subscribed(Uuid),
    /// Caller holds an active admin subscription to the given game.
    GameAdmin(Uuid),
    /// Caller is the OWNER of the given game.
    GameOwner(Uuid),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the caller's profile and checks the requested permissions.
    ///
    /// Always verifies that a local profile exists for the authenticated
    /// subject; permissions are then checked against the subscriptions table.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Caller's profile, all permissions held
    /// - `Err(AuthError::UserNotRegistered)` - Token valid but no local profile
    /// - `Err(AuthError::AccessDenied)` - A requested permission is missing
    pub async fn require(
        &self,
        user_id: Uuid,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotRegistered(user_id).into());
        };

        let subscription_repo = SubscriptionRepository::new(self.db);

        for permission in permissions {
            match permission {
                Permission::Subscribed(game_id) => {
                    let subscription = subscription_repo
                        .find_by_user_and_game(user_id, *game_id)
                        .await?;

                    if !subscription.map(|s| s.is_active).unwrap_or(false) {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "You are not a member of this game".to_string(),
                        )
                        .into());
                    }
                }
                Permission::GameAdmin(game_id) => {
                    let subscription = subscription_repo
                        .find_by_user_and_game(user_id, *game_id)
                        .await?;

                    if !subscription
                        .map(|s| s.is_active && s.is_admin)
                        .unwrap_or(false)
                    {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "Only game admins can perform this action".to_string(),
                        )
                        .into());
                    }
                }
                Permission::GameOwner(game_id) => {
                    let subscription = subscription_repo
                        .find_by_user_and_game(user_id, *game_id)
                        .await?;

                    if !subscription
                        .map(|s| s.is_active && s.role == crate::model::subscription::ROLE_OWNER)
                        .unwrap_or(false)
                    {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "Only the game owner can perform this action".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
