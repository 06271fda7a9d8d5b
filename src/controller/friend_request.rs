use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, AuthUser},
    model::{
        api::ErrorDto,
        friend_request::{CreateFriendRequestDto, FriendRequestDto},
        user::UserDto,
    },
    service::{friend_request::FriendRequestService, storage::StorageService},
    state::AppState,
};

/// Tag for grouping friendship endpoints in OpenAPI documentation
pub static FRIEND_TAG: &str = "friend";

/// Send a friend request.
///
/// # Returns
/// - `201 Created` - Request sent
/// - `400 Bad Request` - Addressed to oneself
/// - `409 Conflict` - A request already exists in either direction
#[utoipa::path(
    post,
    path = "/friends/requests",
    tag = FRIEND_TAG,
    request_body = CreateFriendRequestDto,
    responses(
        (status = 201, description = "Friend request sent", body = FriendRequestDto),
        (status = 400, description = "Request addressed to oneself", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Receiver not found", body = ErrorDto),
        (status = 409, description = "Already friends or request pending", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_friend_request(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateFriendRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db).require(user.id, &[]).await?;

    let service = FriendRequestService::new(&state.db);
    let request = service.send(user.id, payload.receiver_id).await?;

    Ok((StatusCode::CREATED, Json(request)))
}

/// List pending friend requests addressed to the caller.
#[utoipa::path(
    get,
    path = "/friends/requests/pending",
    tag = FRIEND_TAG,
    responses(
        (status = 200, description = "Pending requests received", body = Vec<FriendRequestDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pending_requests(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db).require(user.id, &[]).await?;

    let service = FriendRequestService::new(&state.db);
    let requests = service.pending(user.id).await?;

    Ok((StatusCode::OK, Json(requests)))
}

/// Accept a pending friend request. Receiver only.
#[utoipa::path(
    post,
    path = "/friends/requests/{request_id}/accept",
    tag = FRIEND_TAG,
    params(
        ("request_id" = Uuid, Path, description = "Friend request ID")
    ),
    responses(
        (status = 200, description = "Request accepted", body = FriendRequestDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not the receiver", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 409, description = "Request already resolved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accept_friend_request(
    State(state): State<AppState>,
    user: AuthUser,
    Path(request_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db).require(user.id, &[]).await?;

    let service = FriendRequestService::new(&state.db);
    let request = service.accept(user.id, request_id).await?;

    Ok((StatusCode::OK, Json(request)))
}

/// Reject a pending friend request. Receiver only.
#[utoipa::path(
    post,
    path = "/friends/requests/{request_id}/reject",
    tag = FRIEND_TAG,
    params(
        ("request_id" = Uuid, Path, description = "Friend request ID")
    ),
    responses(
        (status = 200, description = "Request rejected", body = FriendRequestDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not the receiver", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 409, description = "Request already resolved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_friend_request(
    State(state): State<AppState>,
    user: AuthUser,
    Path(request_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db).require(user.id, &[]).await?;

    let service = FriendRequestService::new(&state.db);
    let request = service.reject(user.id, request_id).await?;

    Ok((StatusCode::OK, Json(request)))
}

/// List the caller's friends.
#[utoipa::path(
    get,
    path = "/friends",
    tag = FRIEND_TAG,
    responses(
        (status = 200, description = "Accepted friends", body = Vec<UserDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_friends(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db).require(user.id, &[]).await?;

    let storage = StorageService::new(&state.http_client, &state.config);

    let service = FriendRequestService::new(&state.db);
    let friends = service.friends(&storage, user.id).await?;

    Ok((StatusCode::OK, Json(friends)))
}

/// Remove a friendship. Deletes the conversation and its stored images.
#[utoipa::path(
    delete,
    path = "/friends/{friend_user_id}",
    tag = FRIEND_TAG,
    params(
        ("friend_user_id" = Uuid, Path, description = "Friend's user ID")
    ),
    responses(
        (status = 204, description = "Friendship removed"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Friendship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_friend(
    State(state): State<AppState>,
    user: AuthUser,
    Path(friend_user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db).require(user.id, &[]).await?;

    let storage = StorageService::new(&state.http_client, &state.config);

    let service = FriendRequestService::new(&state.db);
    service.remove_friend(&storage, user.id, friend_user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
