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
    middleware::auth::{AuthGuard, AuthUser},
    model::{
        api::{ErrorDto, PaginatedDto, PaginationParam},
        private_message::{ConversationDto, PrivateMessageDto, SendPrivateMessageDto},
    },
    service::{private_message::PrivateMessageService, storage::StorageService},
    state::AppState,
};

/// Tag for grouping direct message endpoints in OpenAPI documentation
pub static PRIVATE_MESSAGE_TAG: &str = "private-message";

/// Send a text message to a friend.
///
/// # Returns
/// - `201 Created` - Message sent
/// - `403 Forbidden` - No accepted friendship with the receiver
#[utoipa::path(
    post,
    path = "/friends/{friend_user_id}/messages",
    tag = PRIVATE_MESSAGE_TAG,
    params(
        ("friend_user_id" = Uuid, Path, description = "Friend's user ID")
    ),
    request_body = SendPrivateMessageDto,
    responses(
        (status = 201, description = "Message sent", body = PrivateMessageDto),
        (status = 400, description = "Empty content", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not friends with the receiver", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_private_message(
    State(state): State<AppState>,
    user: AuthUser,
    Path(friend_user_id): Path<Uuid>,
    Json(payload): Json<SendPrivateMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db).require(user.id, &[]).await?;

    let storage = StorageService::new(&state.http_client, &state.config);

    let service = PrivateMessageService::new(&state.db);
    let message = service
        .send(&storage, user.id, friend_user_id, payload.content)
        .await?;

    Ok((StatusCode::CREATED, Json(message)))
}

/// Send an image message to a friend, optionally captioned.
#[utoipa::path(
    post,
    path = "/friends/{friend_user_id}/messages/image",
    tag = PRIVATE_MESSAGE_TAG,
    params(
        ("friend_user_id" = Uuid, Path, description = "Friend's user ID")
    ),
    responses(
        (status = 201, description = "Image message sent", body = PrivateMessageDto),
        (status = 400, description = "Missing file or non-image upload", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not friends with the receiver", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_private_image_message(
    State(state): State<AppState>,
    user: AuthUser,
    Path(friend_user_id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db).require(user.id, &[]).await?;

    let upload = read_image_upload(&mut multipart).await?;
    let storage = StorageService::new(&state.http_client, &state.config);

    let service = PrivateMessageService::new(&state.db);
    let message = service
        .send_image(
            &storage,
            user.id,
            friend_user_id,
            upload.caption,
            &upload.content_type,
            upload.data,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(message)))
}

/// Get one page of the conversation with a friend, newest first.
#[utoipa::path(
    get,
    path = "/friends/{friend_user_id}/messages",
    tag = PRIVATE_MESSAGE_TAG,
    params(
        ("friend_user_id" = Uuid, Path, description = "Friend's user ID"),
        PaginationParam
    ),
    responses(
        (status = 200, description = "One page of the conversation", body = PaginatedDto<PrivateMessageDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Not friends with the counterpart", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_conversation(
    State(state): State<AppState>,
    user: AuthUser,
    Path(friend_user_id): Path<Uuid>,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db).require(user.id, &[]).await?;

    let storage = StorageService::new(&state.http_client, &state.config);

    let service = PrivateMessageService::new(&state.db);
    let page = service
        .conversation(&storage, user.id, friend_user_id, params.page(), params.size())
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get the conversations overview: the latest message per counterpart.
#[utoipa::path(
    get,
    path = "/friends/conversations",
    tag = PRIVATE_MESSAGE_TAG,
    responses(
        (status = 200, description = "Latest message per counterpart", body = Vec<ConversationDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_conversations(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db).require(user.id, &[]).await?;

    let storage = StorageService::new(&state.http_client, &state.config);

    let service = PrivateMessageService::new(&state.db);
    let conversations = service.conversations(&storage, user.id).await?;

    Ok((StatusCode::OK, Json(conversations)))
}
