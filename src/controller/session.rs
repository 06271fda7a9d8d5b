use axum::{
    extract::{Path, Query, State},
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
        session::{AttendeeDto, CreateSessionDto, MonthParam, SessionDto, UpdateSessionDto},
    },
    service::session::SessionService,
    state::AppState,
};

/// Tag for grouping session endpoints in OpenAPI documentation
pub static SESSION_TAG: &str = "session";

/// POST /games/{game_id}/sessions
/// Schedule a session; every other active member is notified. Admins only.
#[utoipa::path(
    post,
    path = "/games/{game_id}/sessions",
    tag = SESSION_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    request_body = CreateSessionDto,
    responses(
        (status = 201, description = "Session created", body = SessionDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a game admin", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_session(
    State(state): State<AppState>,
    user: AuthUser,
    Path(game_id): Path<Uuid>,
    Json(payload): Json<CreateSessionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::GameAdmin(game_id)])
        .await?;

    let service = SessionService::new(&state.db);
    let session = service.create(user.id, game_id, payload).await?;

    Ok((StatusCode::CREATED, Json(session)))
}

/// GET /games/{game_id}/sessions
/// List a game's sessions chronologically. Subscribers only.
#[utoipa::path(
    get,
    path = "/games/{game_id}/sessions",
    tag = SESSION_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Game sessions", body = Vec<SessionDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sessions(
    State(state): State<AppState>,
    user: AuthUser,
    Path(game_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::Subscribed(game_id)])
        .await?;

    let service = SessionService::new(&state.db);
    let sessions = service.list(game_id).await?;

    Ok((StatusCode::OK, Json(sessions)))
}

/// GET /games/{game_id}/sessions/{session_id}
#[utoipa::path(
    get,
    path = "/games/{game_id}/sessions/{session_id}",
    tag = SESSION_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID"),
        ("session_id" = Uuid, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Session", body = SessionDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a member", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_session(
    State(state): State<AppState>,
    user: AuthUser,
    Path((game_id, session_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::Subscribed(game_id)])
        .await?;

    let service = SessionService::new(&state.db);
    let session = service.get(game_id, session_id).await?;

    Ok((StatusCode::OK, Json(session)))
}

/// PUT /games/{game_id}/sessions/{session_id}
/// Partial update. Admins only.
#[utoipa::path(
    put,
    path = "/games/{game_id}/sessions/{session_id}",
    tag = SESSION_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID"),
        ("session_id" = Uuid, Path, description = "Session ID")
    ),
    request_body = UpdateSessionDto,
    responses(
        (status = 200, description = "Updated session", body = SessionDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a game admin", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_session(
    State(state): State<AppState>,
    user: AuthUser,
    Path((game_id, session_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<UpdateSessionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::GameAdmin(game_id)])
        .await?;

    let service = SessionService::new(&state.db);
    let session = service.update(game_id, session_id, payload).await?;

    Ok((StatusCode::OK, Json(session)))
}

/// DELETE /games/{game_id}/sessions/{session_id}
/// Admins only.
#[utoipa::path(
    delete,
    path = "/games/{game_id}/sessions/{session_id}",
    tag = SESSION_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID"),
        ("session_id" = Uuid, Path, description = "Session ID")
    ),
    responses(
        (status = 204, description = "Session deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a game admin", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_session(
    State(state): State<AppState>,
    user: AuthUser,
    Path((game_id, session_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::GameAdmin(game_id)])
        .await?;

    let service = SessionService::new(&state.db);
    service.delete(game_id, session_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /games/{game_id}/sessions/{session_id}/attendance
/// Confirm attendance, creating the response row if missing.
#[utoipa::path(
    post,
    path = "/games/{game_id}/sessions/{session_id}/attendance",
    tag = SESSION_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID"),
        ("session_id" = Uuid, Path, description = "Session ID")
    ),
    responses(
        (status = 204, description = "Attendance confirmed"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a member", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_attendance(
    State(state): State<AppState>,
    user: AuthUser,
    Path((game_id, session_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::Subscribed(game_id)])
        .await?;

    let service = SessionService::new(&state.db);
    service.confirm_attendance(user.id, game_id, session_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /games/{game_id}/sessions/{session_id}/attendance
/// Decline attendance. 404 if the caller never responded.
#[utoipa::path(
    delete,
    path = "/games/{game_id}/sessions/{session_id}/attendance",
    tag = SESSION_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID"),
        ("session_id" = Uuid, Path, description = "Session ID")
    ),
    responses(
        (status = 204, description = "Attendance declined"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a member", body = ErrorDto),
        (status = 404, description = "Session or response not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn decline_attendance(
    State(state): State<AppState>,
    user: AuthUser,
    Path((game_id, session_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::Subscribed(game_id)])
        .await?;

    let service = SessionService::new(&state.db);
    service.decline_attendance(user.id, game_id, session_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /games/{game_id}/sessions/{session_id}/attendance
/// Reset the caller's response back to pending. 404 if never responded.
#[utoipa::path(
    put,
    path = "/games/{game_id}/sessions/{session_id}/attendance",
    tag = SESSION_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID"),
        ("session_id" = Uuid, Path, description = "Session ID")
    ),
    responses(
        (status = 204, description = "Attendance reset to pending"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a member", body = ErrorDto),
        (status = 404, description = "Session or response not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_attendance(
    State(state): State<AppState>,
    user: AuthUser,
    Path((game_id, session_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::Subscribed(game_id)])
        .await?;

    let service = SessionService::new(&state.db);
    service.reset_attendance(user.id, game_id, session_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /games/{game_id}/sessions/{session_id}/attendance
/// List everyone who responded with their current mark.
#[utoipa::path(
    get,
    path = "/games/{game_id}/sessions/{session_id}/attendance",
    tag = SESSION_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID"),
        ("session_id" = Uuid, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Attendees with marks", body = Vec<AttendeeDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a member", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attendees(
    State(state): State<AppState>,
    user: AuthUser,
    Path((game_id, session_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::Subscribed(game_id)])
        .await?;

    let service = SessionService::new(&state.db);
    let attendees = service.attendees(game_id, session_id).await?;

    Ok((StatusCode::OK, Json(attendees)))
}

/// GET /sessions/me?year=&month=
/// The caller's agenda for a calendar month across all their active games.
#[utoipa::path(
    get,
    path = "/sessions/me",
    tag = SESSION_TAG,
    params(MonthParam),
    responses(
        (status = 200, description = "Sessions in the month", body = Vec<SessionDto>),
        (status = 400, description = "Month outside 1-12", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn my_sessions(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<MonthParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db).require(user.id, &[]).await?;

    let service = SessionService::new(&state.db);
    let sessions = service.my_month(user.id, params.year, params.month).await?;

    Ok((StatusCode::OK, Json(sessions)))
}
