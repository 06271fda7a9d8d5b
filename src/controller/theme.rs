use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    controller::read_image_upload,
    error::AppError,
    middleware::auth::{AuthGuard, AuthUser},
    model::{api::ErrorDto, theme::ThemeDto},
    service::{storage::StorageService, theme::ThemeService},
    state::AppState,
};

/// Tag for grouping theme endpoints in OpenAPI documentation
pub static THEME_TAG: &str = "theme";

#[derive(Deserialize, utoipa::IntoParams)]
pub struct ThemeSearchParam {
    /// Case-insensitive contains filter on the theme name.
    pub name: Option<String>,
}

/// List themes, optionally filtered by name.
#[utoipa::path(
    get,
    path = "/themes",
    tag = THEME_TAG,
    params(ThemeSearchParam),
    responses(
        (status = 200, description = "Matching themes", body = Vec<ThemeDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_themes(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<ThemeSearchParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db).require(user.id, &[]).await?;

    let storage = StorageService::new(&state.http_client, &state.config);

    let service = ThemeService::new(&state.db);
    let themes = service.list(&storage, params.name.as_deref()).await?;

    Ok((StatusCode::OK, Json(themes)))
}

/// Upload a theme photo (multipart, image/* only).
#[utoipa::path(
    post,
    path = "/themes/{theme_id}/photo",
    tag = THEME_TAG,
    params(
        ("theme_id" = Uuid, Path, description = "Theme ID")
    ),
    responses(
        (status = 200, description = "Theme with the new photo URL", body = ThemeDto),
        (status = 400, description = "Missing file or non-image upload", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Theme not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_theme_photo(
    State(state): State<AppState>,
    user: AuthUser,
    Path(theme_id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db).require(user.id, &[]).await?;

    let upload = read_image_upload(&mut multipart).await?;
    let storage = StorageService::new(&state.http_client, &state.config);

    let service = ThemeService::new(&state.db);
    let theme = service
        .upload_photo(&storage, theme_id, &upload.content_type, upload.data)
        .await?;

    Ok((StatusCode::OK, Json(theme)))
}

/// Delete a theme photo.
#[utoipa::path(
    delete,
    path = "/themes/{theme_id}/photo",
    tag = THEME_TAG,
    params(
        ("theme_id" = Uuid, Path, description = "Theme ID")
    ),
    responses(
        (status = 204, description = "Photo deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Theme not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_theme_photo(
    State(state): State<AppState>,
    user: AuthUser,
    Path(theme_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db).require(user.id, &[]).await?;

    let storage = StorageService::new(&state.http_client, &state.config);

    let service = ThemeService::new(&state.db);
    service.delete_photo(&storage, theme_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
