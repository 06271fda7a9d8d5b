use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    controller::read_image_upload,
    error::AppError,
    middleware::auth::{AuthGuard, AuthUser, Permission},
    model::{
        api::{ErrorDto, PaginatedDto, PaginationParam},
        message::{MessageDto, SendMessageDto},
    },
    service::{message::MessageService, storage::StorageService},
    state::AppState,
};

/// Tag for grouping game chat endpoints in OpenAPI documentation
pub static MESSAGE_TAG: &str = "message";

/// Post a text message to a game chat. Subscribers only.
///
/// Every other active member gets an unread-messages notification unless
/// they already carry one for this game.
#[utoipa::path(
    post,
    path = "/games/{game_id}/messages",
    tag = MESSAGE_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    request_body = SendMessageDto,
    responses(
        (status = 201, description = "Message posted", body = MessageDto),
        (status = 400, description = "Empty content", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_message(
    State(state): State<AppState>,
    user: AuthUser,
    Path(game_id): Path<Uuid>,
    Json(payload): Json<SendMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::Subscribed(game_id)])
        .await?;

    let storage = StorageService::new(&state.http_client, &state.config);

    let service = MessageService::new(&state.db);
    let message = service
        .send(&storage, user.id, game_id, payload.content)
        .await?;

    Ok((StatusCode::CREATED, Json(message)))
}

/// Post an image message, optionally captioned via a `content` form field.
#[utoipa::path(
    post,
    path = "/games/{game_id}/messages/image",
    tag = MESSAGE_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    responses(
        (status = 201, description = "Image message posted", body = MessageDto),
        (status = 400, description = "Missing file or non-image upload", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_image_message(
    State(state): State<AppState>,
    user: AuthUser,
    Path(game_id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::Subscribed(game_id)])
        .await?;

    let upload = read_image_upload(&mut multipart).await?;
    let storage = StorageService::new(&state.http_client, &state.config);

    let service = MessageService::new(&state.db);
    let message = service
        .send_image(
            &storage,
            user.id,
            game_id,
            upload.caption,
            &upload.content_type,
            upload.data,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(message)))
}

/// Get one page of a game's chat, newest first. Subscribers only.
#[utoipa::path(
    get,
    path = "/games/{game_id}/messages",
    tag = MESSAGE_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID"),
        PaginationParam
    ),
    responses(
        (status = 200, description = "One page of messages", body = PaginatedDto<MessageDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_messages(
    State(state): State<AppState>,
    user: AuthUser,
    Path(game_id): Path<Uuid>,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::Subscribed(game_id)])
        .await?;

    let storage = StorageService::new(&state.http_client, &state.config);

    let service = MessageService::new(&state.db);
    let page = service
        .page(&storage, game_id, params.page(), params.size())
        .await?;

    Ok((StatusCode::OK, Json(page)))
}
