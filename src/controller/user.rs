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
    middleware::auth::AuthUser,
    model::{
        api::ErrorDto,
        user::{RegisterUserDto, UpdateUserDto, UserDto},
    },
    service::{auth_admin::AuthAdminService, storage::StorageService, user::UserService},
    state::AppState,
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a local profile for the authenticated auth account.
///
/// Identity comes from the bearer token; the body only carries profile
/// fields. On any registration failure the auth-provider account is deleted
/// best effort so no orphaned account survives.
///
/// # Returns
/// - `201 Created` - Profile created
/// - `409 Conflict` - Email already registered or nickname taken
#[utoipa::path(
    post,
    path = "/users/register",
    tag = USER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "Profile created", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 409, description = "Email already registered or nickname taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_admin = AuthAdminService::new(&state.http_client, &state.config);
    let storage = StorageService::new(&state.http_client, &state.config);

    let service = UserService::new(&state.db);
    let profile = service.register(&auth_admin, &storage, &user, payload).await?;

    Ok((StatusCode::CREATED, Json(profile)))
}

/// Get-or-create login: returns the caller's profile, creating one with the
/// email local part as nickname on first login.
#[utoipa::path(
    get,
    path = "/users/login",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Caller's profile", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let storage = StorageService::new(&state.http_client, &state.config);

    let service = UserService::new(&state.db);
    let profile = service.login(&storage, &user).await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// Get the caller's own profile.
#[utoipa::path(
    get,
    path = "/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Caller's profile", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "No profile registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let storage = StorageService::new(&state.http_client, &state.config);

    let service = UserService::new(&state.db);
    let profile = service.get_profile(&storage, user.id).await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// Get another user's profile by id.
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let storage = StorageService::new(&state.http_client, &state.config);

    let service = UserService::new(&state.db);
    let profile = service.get_profile(&storage, user_id).await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// Partially update the caller's profile.
///
/// # Returns
/// - `200 OK` - Updated profile
/// - `409 Conflict` - Requested nickname belongs to someone else
#[utoipa::path(
    put,
    path = "/users/me",
    tag = USER_TAG,
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated profile", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "No profile registered", body = ErrorDto),
        (status = 409, description = "Nickname already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_me(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let storage = StorageService::new(&state.http_client, &state.config);

    let service = UserService::new(&state.db);
    let profile = service.update_profile(&storage, user.id, payload).await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// Upload the caller's profile photo (multipart, image/* only).
#[utoipa::path(
    post,
    path = "/users/me/photo",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Profile with the new photo URL", body = UserDto),
        (status = 400, description = "Missing file or non-image upload", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "No profile registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_my_photo(
    State(state): State<AppState>,
    user: AuthUser,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let upload = read_image_upload(&mut multipart).await?;
    let storage = StorageService::new(&state.http_client, &state.config);

    let service = UserService::new(&state.db);
    let profile = service
        .upload_photo(&storage, user.id, &upload.content_type, upload.data)
        .await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// Delete the caller's profile photo.
#[utoipa::path(
    delete,
    path = "/users/me/photo",
    tag = USER_TAG,
    responses(
        (status = 204, description = "Photo deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "No profile registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_my_photo(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let storage = StorageService::new(&state.http_client, &state.config);

    let service = UserService::new(&state.db);
    service.delete_photo(&storage, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete the caller's profile and, best effort, the auth-provider account.
#[utoipa::path(
    delete,
    path = "/users/me",
    tag = USER_TAG,
    responses(
        (status = 204, description = "Account deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "No profile registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_me(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let auth_admin = AuthAdminService::new(&state.http_client, &state.config);
    let storage = StorageService::new(&state.http_client, &state.config);

    let service = UserService::new(&state.db);
    service.delete_account(&auth_admin, &storage, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
