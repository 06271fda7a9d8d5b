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
        api::ErrorDto,
        game::{CreateGameDto, GameDetailDto, GameDto, GameMemberDto, GameSearchParam, UpdateGameDto},
    },
    service::{game::GameService, storage::StorageService},
    state::AppState,
};

/// Tag for grouping game endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

/// Create a game. The creator becomes its OWNER with admin rights.
///
/// # Returns
/// - `201 Created` - Game created
/// - `404 Not Found` - Referenced theme does not exist
#[utoipa::path(
    post,
    path = "/games",
    tag = GAME_TAG,
    request_body = CreateGameDto,
    responses(
        (status = 201, description = "Game created", body = GameDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Theme not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_game(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db).require(user.id, &[]).await?;

    let storage = StorageService::new(&state.http_client, &state.config);

    let service = GameService::new(&state.db);
    let game = service.create(&storage, user.id, payload).await?;

    Ok((StatusCode::CREATED, Json(game)))
}

/// Search public, non-deleted games by name.
#[utoipa::path(
    get,
    path = "/games",
    tag = GAME_TAG,
    params(GameSearchParam),
    responses(
        (status = 200, description = "Matching public games", body = Vec<GameDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_games(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<GameSearchParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db).require(user.id, &[]).await?;

    let storage = StorageService::new(&state.http_client, &state.config);

    let service = GameService::new(&state.db);
    let games = service.search_public(&storage, params.name.as_deref()).await?;

    Ok((StatusCode::OK, Json(games)))
}

/// List the games the caller is actively subscribed to.
#[utoipa::path(
    get,
    path = "/games/me",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "Caller's games", body = Vec<GameDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn my_games(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db).require(user.id, &[]).await?;

    let storage = StorageService::new(&state.http_client, &state.config);

    let service = GameService::new(&state.db);
    let games = service.my_games(&storage, user.id).await?;

    Ok((StatusCode::OK, Json(games)))
}

/// Get the detail view of a game: theme name, master, player list.
#[utoipa::path(
    get,
    path = "/games/{game_id}",
    tag = GAME_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Game detail", body = GameDetailDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game(
    State(state): State<AppState>,
    user: AuthUser,
    Path(game_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db).require(user.id, &[]).await?;

    let storage = StorageService::new(&state.http_client, &state.config);

    let service = GameService::new(&state.db);
    let game = service.detail(&storage, game_id).await?;

    Ok((StatusCode::OK, Json(game)))
}

/// Partially update a game. Game admins only.
#[utoipa::path(
    put,
    path = "/games/{game_id}",
    tag = GAME_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    request_body = UpdateGameDto,
    responses(
        (status = 200, description = "Updated game", body = GameDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a game admin", body = ErrorDto),
        (status = 404, description = "Game or theme not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_game(
    State(state): State<AppState>,
    user: AuthUser,
    Path(game_id): Path<Uuid>,
    Json(payload): Json<UpdateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::GameAdmin(game_id)])
        .await?;

    let storage = StorageService::new(&state.http_client, &state.config);

    let service = GameService::new(&state.db);
    let game = service.update(&storage, game_id, payload).await?;

    Ok((StatusCode::OK, Json(game)))
}

/// Soft delete a game. Owner only.
#[utoipa::path(
    delete,
    path = "/games/{game_id}",
    tag = GAME_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    responses(
        (status = 204, description = "Game deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not the game owner", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_game(
    State(state): State<AppState>,
    user: AuthUser,
    Path(game_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::GameOwner(game_id)])
        .await?;

    let service = GameService::new(&state.db);
    service.delete(game_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Upload a game photo. Game admins only.
#[utoipa::path(
    post,
    path = "/games/{game_id}/photo",
    tag = GAME_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Game with the new photo URL", body = GameDto),
        (status = 400, description = "Missing file or non-image upload", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a game admin", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_game_photo(
    State(state): State<AppState>,
    user: AuthUser,
    Path(game_id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::GameAdmin(game_id)])
        .await?;

    let upload = read_image_upload(&mut multipart).await?;
    let storage = StorageService::new(&state.http_client, &state.config);

    let service = GameService::new(&state.db);
    let game = service
        .upload_photo(&storage, game_id, &upload.content_type, upload.data)
        .await?;

    Ok((StatusCode::OK, Json(game)))
}

/// Delete a game photo. Game admins only.
#[utoipa::path(
    delete,
    path = "/games/{game_id}/photo",
    tag = GAME_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    responses(
        (status = 204, description = "Photo deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a game admin", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_game_photo(
    State(state): State<AppState>,
    user: AuthUser,
    Path(game_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::GameAdmin(game_id)])
        .await?;

    let storage = StorageService::new(&state.http_client, &state.config);

    let service = GameService::new(&state.db);
    service.delete_photo(&storage, game_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List a game's active members. Subscribers only.
#[utoipa::path(
    get,
    path = "/games/{game_id}/members",
    tag = GAME_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Active members", body = Vec<GameMemberDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_members(
    State(state): State<AppState>,
    user: AuthUser,
    Path(game_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::Subscribed(game_id)])
        .await?;

    let storage = StorageService::new(&state.http_client, &state.config);

    let service = GameService::new(&state.db);
    let members = service.members(&storage, game_id).await?;

    Ok((StatusCode::OK, Json(members)))
}

/// Leave a game by deactivating the caller's subscription.
///
/// # Returns
/// - `400 Bad Request` - Caller is not an active member
/// - `403 Forbidden` - The owner cannot leave their own game
#[utoipa::path(
    post,
    path = "/games/{game_id}/leave",
    tag = GAME_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    responses(
        (status = 204, description = "Left the game"),
        (status = 400, description = "Not an active member", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "The owner cannot leave", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leave_game(
    State(state): State<AppState>,
    user: AuthUser,
    Path(game_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db).require(user.id, &[]).await?;

    let service = GameService::new(&state.db);
    service.leave(user.id, game_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Rejoin a game by reactivating a previous subscription.
///
/// # Returns
/// - `400 Bad Request` - Caller never subscribed to the game
/// - `409 Conflict` - Membership already active, or the game is full
#[utoipa::path(
    post,
    path = "/games/{game_id}/rejoin",
    tag = GAME_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    responses(
        (status = 204, description = "Rejoined the game"),
        (status = 400, description = "Never subscribed", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 409, description = "Already a member or game full", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn rejoin_game(
    State(state): State<AppState>,
    user: AuthUser,
    Path(game_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db).require(user.id, &[]).await?;

    let service = GameService::new(&state.db);
    service.rejoin(user.id, game_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
