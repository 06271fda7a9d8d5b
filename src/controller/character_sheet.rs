use axum::{
    extract::{Multipart, Path, State},
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
        api::ErrorDto,
        character_sheet::{CharacterSheetDto, CreateCharacterSheetDto, UpdateCharacterSheetDto},
    },
    service::{character_sheet::CharacterSheetService, storage::StorageService},
    state::AppState,
};

/// Tag for grouping character sheet endpoints in OpenAPI documentation
pub static CHARACTER_TAG: &str = "character";

/// Create a character sheet in a game. Subscribers only.
#[utoipa::path(
    post,
    path = "/games/{game_id}/characters",
    tag = CHARACTER_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    request_body = CreateCharacterSheetDto,
    responses(
        (status = 201, description = "Character sheet created", body = CharacterSheetDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    user: AuthUser,
    Path(game_id): Path<Uuid>,
    Json(payload): Json<CreateCharacterSheetDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::Subscribed(game_id)])
        .await?;

    let storage = StorageService::new(&state.http_client, &state.config);

    let service = CharacterSheetService::new(&state.db);
    let sheet = service.create(&storage, user.id, game_id, payload).await?;

    Ok((StatusCode::CREATED, Json(sheet)))
}

/// List every character sheet of a game. Subscribers only.
#[utoipa::path(
    get,
    path = "/games/{game_id}/characters",
    tag = CHARACTER_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Character sheets", body = Vec<CharacterSheetDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(
    State(state): State<AppState>,
    user: AuthUser,
    Path(game_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::Subscribed(game_id)])
        .await?;

    let storage = StorageService::new(&state.http_client, &state.config);

    let service = CharacterSheetService::new(&state.db);
    let sheets = service.list(&storage, game_id).await?;

    Ok((StatusCode::OK, Json(sheets)))
}

/// List the caller's own sheets in a game.
#[utoipa::path(
    get,
    path = "/games/{game_id}/characters/mine",
    tag = CHARACTER_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Caller's character sheets", body = Vec<CharacterSheetDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_characters(
    State(state): State<AppState>,
    user: AuthUser,
    Path(game_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::Subscribed(game_id)])
        .await?;

    let storage = StorageService::new(&state.http_client, &state.config);

    let service = CharacterSheetService::new(&state.db);
    let sheets = service.mine(&storage, user.id, game_id).await?;

    Ok((StatusCode::OK, Json(sheets)))
}

/// Get one character sheet.
#[utoipa::path(
    get,
    path = "/games/{game_id}/characters/{character_id}",
    tag = CHARACTER_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID"),
        ("character_id" = Uuid, Path, description = "Character sheet ID")
    ),
    responses(
        (status = 200, description = "Character sheet", body = CharacterSheetDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a member", body = ErrorDto),
        (status = 404, description = "Character sheet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    user: AuthUser,
    Path((game_id, character_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::Subscribed(game_id)])
        .await?;

    let storage = StorageService::new(&state.http_client, &state.config);

    let service = CharacterSheetService::new(&state.db);
    let sheet = service.get(&storage, game_id, character_id).await?;

    Ok((StatusCode::OK, Json(sheet)))
}

/// Partially update a character sheet. Owner only.
#[utoipa::path(
    put,
    path = "/games/{game_id}/characters/{character_id}",
    tag = CHARACTER_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID"),
        ("character_id" = Uuid, Path, description = "Character sheet ID")
    ),
    request_body = UpdateCharacterSheetDto,
    responses(
        (status = 200, description = "Updated character sheet", body = CharacterSheetDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller does not own the character", body = ErrorDto),
        (status = 404, description = "Character sheet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_character(
    State(state): State<AppState>,
    user: AuthUser,
    Path((game_id, character_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<UpdateCharacterSheetDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::Subscribed(game_id)])
        .await?;

    let storage = StorageService::new(&state.http_client, &state.config);

    let service = CharacterSheetService::new(&state.db);
    let sheet = service
        .update(&storage, user.id, game_id, character_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(sheet)))
}

/// Delete a character sheet. Owner or game admin only.
#[utoipa::path(
    delete,
    path = "/games/{game_id}/characters/{character_id}",
    tag = CHARACTER_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID"),
        ("character_id" = Uuid, Path, description = "Character sheet ID")
    ),
    responses(
        (status = 204, description = "Character sheet deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is neither owner nor admin", body = ErrorDto),
        (status = 404, description = "Character sheet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_character(
    State(state): State<AppState>,
    user: AuthUser,
    Path((game_id, character_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::Subscribed(game_id)])
        .await?;

    let storage = StorageService::new(&state.http_client, &state.config);

    let service = CharacterSheetService::new(&state.db);
    service
        .delete(&storage, user.id, game_id, character_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Upload a character photo. Owner only.
#[utoipa::path(
    post,
    path = "/games/{game_id}/characters/{character_id}/photo",
    tag = CHARACTER_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID"),
        ("character_id" = Uuid, Path, description = "Character sheet ID")
    ),
    responses(
        (status = 200, description = "Sheet with the new photo URL", body = CharacterSheetDto),
        (status = 400, description = "Missing file or non-image upload", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller does not own the character", body = ErrorDto),
        (status = 404, description = "Character sheet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_character_photo(
    State(state): State<AppState>,
    user: AuthUser,
    Path((game_id, character_id)): Path<(Uuid, Uuid)>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::Subscribed(game_id)])
        .await?;

    let upload = read_image_upload(&mut multipart).await?;
    let storage = StorageService::new(&state.http_client, &state.config);

    let service = CharacterSheetService::new(&state.db);
    let sheet = service
        .upload_photo(
            &storage,
            user.id,
            game_id,
            character_id,
            &upload.content_type,
            upload.data,
        )
        .await?;

    Ok((StatusCode::OK, Json(sheet)))
}

/// Delete a character photo. Owner only.
#[utoipa::path(
    delete,
    path = "/games/{game_id}/characters/{character_id}/photo",
    tag = CHARACTER_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID"),
        ("character_id" = Uuid, Path, description = "Character sheet ID")
    ),
    responses(
        (status = 204, description = "Photo deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller does not own the character", body = ErrorDto),
        (status = 404, description = "Character sheet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_character_photo(
    State(state): State<AppState>,
    user: AuthUser,
    Path((game_id, character_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::Subscribed(game_id)])
        .await?;

    let storage = StorageService::new(&state.http_client, &state.config);

    let service = CharacterSheetService::new(&state.db);
    service
        .delete_photo(&storage, user.id, game_id, character_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
