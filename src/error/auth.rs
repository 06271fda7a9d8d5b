use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header was present on the request.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Missing bearer token")]
    MissingToken,

    /// The bearer token failed signature or claim validation.
    ///
    /// Results in a 401 Unauthorized response. The underlying jsonwebtoken
    /// error is logged but not exposed to the client.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// The token is valid but no local profile exists for its subject.
    ///
    /// The auth provider knows the account but the user never completed
    /// registration. Results in a 404 Not Found response.
    #[error("No registered profile for user {0}")]
    UserNotRegistered(Uuid),

    /// The user lacks the required permission for this operation.
    ///
    /// Results in a 403 Forbidden response with the given message.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(Uuid, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes:
/// - `MissingToken` / `InvalidToken` → 401 Unauthorized
/// - `UserNotRegistered` → 404 Not Found
/// - `AccessDenied` → 403 Forbidden
///
/// Token validation failures are logged at debug level for diagnostics while
/// keeping client-facing messages generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Missing bearer token".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidToken(err) => {
                tracing::debug!("Rejected bearer token: {}", err);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Invalid bearer token".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::UserNotRegistered(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "User not found".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(user_id, msg) => {
                tracing::debug!("Access denied for user {}: {}", user_id, msg);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto { error: msg }),
                )
                    .into_response()
            }
        }
    }
}
