use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, AuthUser, Permission},
    model::{
        api::ErrorDto,
        join_request::{CreateJoinRequestDto, JoinRequestDto, JoinRequestExistsDto},
    },
    service::join_request::JoinRequestService,
    state::AppState,
};

/// Tag for grouping join request endpoints in OpenAPI documentation
pub static JOIN_REQUEST_TAG: &str = "join-request";

/// Apply to join a game, optionally with a message for the admins.
///
/// # Returns
/// - `201 Created` - Application filed
/// - `409 Conflict` - Already a member, a pending request exists, or the
///   game is full
#[utoipa::path(
    post,
    path = "/games/{game_id}/join-requests",
    tag = JOIN_REQUEST_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    request_body = CreateJoinRequestDto,
    responses(
        (status = 201, description = "Join request created", body = JoinRequestDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 409, description = "Already a member, duplicate request, or game full", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_join_request(
    State(state): State<AppState>,
    user: AuthUser,
    Path(game_id): Path<Uuid>,
    Json(payload): Json<CreateJoinRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db).require(user.id, &[]).await?;

    let service = JoinRequestService::new(&state.db);
    let request = service.apply(user.id, game_id, payload.message).await?;

    Ok((StatusCode::CREATED, Json(request)))
}

/// Check whether the caller has a pending request for a game.
#[utoipa::path(
    get,
    path = "/games/{game_id}/join-requests/me",
    tag = JOIN_REQUEST_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Pending request existence", body = JoinRequestExistsDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_request_exists(
    State(state): State<AppState>,
    user: AuthUser,
    Path(game_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db).require(user.id, &[]).await?;

    let service = JoinRequestService::new(&state.db);
    let exists = service.exists(user.id, game_id).await?;

    Ok((StatusCode::OK, Json(exists)))
}

/// List a game's pending applications. Admins only.
#[utoipa::path(
    get,
    path = "/games/{game_id}/join-requests",
    tag = JOIN_REQUEST_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Pending join requests", body = Vec<JoinRequestDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a game admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pending_join_requests(
    State(state): State<AppState>,
    user: AuthUser,
    Path(game_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::GameAdmin(game_id)])
        .await?;

    let service = JoinRequestService::new(&state.db);
    let requests = service.pending(game_id).await?;

    Ok((StatusCode::OK, Json(requests)))
}

/// Accept an application, turning it into a PLAYER membership. Admins only.
#[utoipa::path(
    post,
    path = "/games/{game_id}/join-requests/{request_id}/accept",
    tag = JOIN_REQUEST_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID"),
        ("request_id" = Uuid, Path, description = "Join request ID")
    ),
    responses(
        (status = 200, description = "Request accepted", body = JoinRequestDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a game admin", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 409, description = "The game is full", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accept_join_request(
    State(state): State<AppState>,
    user: AuthUser,
    Path((game_id, request_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::GameAdmin(game_id)])
        .await?;

    let service = JoinRequestService::new(&state.db);
    let request = service.accept(game_id, request_id).await?;

    Ok((StatusCode::OK, Json(request)))
}

/// Reject an application. Admins only.
#[utoipa::path(
    post,
    path = "/games/{game_id}/join-requests/{request_id}/reject",
    tag = JOIN_REQUEST_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID"),
        ("request_id" = Uuid, Path, description = "Join request ID")
    ),
    responses(
        (status = 200, description = "Request rejected", body = JoinRequestDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a game admin", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_join_request(
    State(state): State<AppState>,
    user: AuthUser,
    Path((game_id, request_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::GameAdmin(game_id)])
        .await?;

    let service = JoinRequestService::new(&state.db);
    let request = service.reject(game_id, request_id).await?;

    Ok((StatusCode::OK, Json(request)))
}
