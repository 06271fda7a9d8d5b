use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, AuthUser},
    model::{
        api::{ErrorDto, PaginatedDto, PaginationParam},
        notification::{
            NotificationDto, UnreadCountDto, TYPE_UNREAD_MESSAGES, TYPE_UNREAD_PRIVATE_MESSAGES,
        },
    },
    service::notification::NotificationService,
    state::AppState,
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// GET /notifications
/// One page of the caller's notifications, newest first.
#[utoipa::path(
    get,
    path = "/notifications",
    tag = NOTIFICATION_TAG,
    params(PaginationParam),
    responses(
        (status = 200, description = "One page of notifications", body = PaginatedDto<NotificationDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db).require(user.id, &[]).await?;

    let service = NotificationService::new(&state.db);
    let page = service
        .list(user.id, false, params.page(), params.size())
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// GET /notifications/unread
#[utoipa::path(
    get,
    path = "/notifications/unread",
    tag = NOTIFICATION_TAG,
    params(PaginationParam),
    responses(
        (status = 200, description = "One page of unread notifications", body = PaginatedDto<NotificationDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_unread_notifications(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db).require(user.id, &[]).await?;

    let service = NotificationService::new(&state.db);
    let page = service
        .list(user.id, true, params.page(), params.size())
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// GET /notifications/unread/count
#[utoipa::path(
    get,
    path = "/notifications/unread/count",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Unread badge count", body = UnreadCountDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_unread_count(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db).require(user.id, &[]).await?;

    let service = NotificationService::new(&state.db);
    let count = service.unread_count(user.id).await?;

    Ok((StatusCode::OK, Json(count)))
}

/// POST /notifications/{notification_id}/read
/// Mark one notification as read. Owner only.
#[utoipa::path(
    post,
    path = "/notifications/{notification_id}/read",
    tag = NOTIFICATION_TAG,
    params(
        ("notification_id" = Uuid, Path, description = "Notification ID")
    ),
    responses(
        (status = 204, description = "Marked as read"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Notification belongs to someone else", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn read_notification(
    State(state): State<AppState>,
    user: AuthUser,
    Path(notification_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db).require(user.id, &[]).await?;

    let service = NotificationService::new(&state.db);
    service.mark_read(user.id, notification_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /notifications/messages/{game_id}/read
/// Mark the unread game chat notifications for one game as read.
#[utoipa::path(
    post,
    path = "/notifications/messages/{game_id}/read",
    tag = NOTIFICATION_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    responses(
        (status = 204, description = "Marked as read"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn read_game_message_notifications(
    State(state): State<AppState>,
    user: AuthUser,
    Path(game_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db).require(user.id, &[]).await?;

    let service = NotificationService::new(&state.db);
    service
        .mark_read_by_reference(user.id, TYPE_UNREAD_MESSAGES, game_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /notifications/private-messages/{friend_user_id}/read
/// Mark the unread direct message notifications from one sender as read.
#[utoipa::path(
    post,
    path = "/notifications/private-messages/{friend_user_id}/read",
    tag = NOTIFICATION_TAG,
    params(
        ("friend_user_id" = Uuid, Path, description = "Sender's user ID")
    ),
    responses(
        (status = 204, description = "Marked as read"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn read_private_message_notifications(
    State(state): State<AppState>,
    user: AuthUser,
    Path(friend_user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db).require(user.id, &[]).await?;

    let service = NotificationService::new(&state.db);
    service
        .mark_read_by_reference(user.id, TYPE_UNREAD_PRIVATE_MESSAGES, friend_user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /notifications/read-all
#[utoipa::path(
    post,
    path = "/notifications/read-all",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 204, description = "Everything marked as read"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn read_all_notifications(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db).require(user.id, &[]).await?;

    let service = NotificationService::new(&state.db);
    service.mark_all_read(user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
