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
        event::{CreateEventDto, EventDto, UpdateEventDto},
        session::AttendeeDto,
    },
    service::event::EventService,
    state::AppState,
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

/// POST /games/{game_id}/events
/// Schedule an event. Admins only. No notifications are sent.
#[utoipa::path(
    post,
    path = "/games/{game_id}/events",
    tag = EVENT_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event created", body = EventDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a game admin", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    user: AuthUser,
    Path(game_id): Path<Uuid>,
    Json(payload): Json<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::GameAdmin(game_id)])
        .await?;

    let service = EventService::new(&state.db);
    let event = service.create(game_id, payload).await?;

    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /games/{game_id}/events
#[utoipa::path(
    get,
    path = "/games/{game_id}/events",
    tag = EVENT_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Game events", body = Vec<EventDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(
    State(state): State<AppState>,
    user: AuthUser,
    Path(game_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::Subscribed(game_id)])
        .await?;

    let service = EventService::new(&state.db);
    let events = service.list(game_id).await?;

    Ok((StatusCode::OK, Json(events)))
}

/// GET /games/{game_id}/events/{event_id}
#[utoipa::path(
    get,
    path = "/games/{game_id}/events/{event_id}",
    tag = EVENT_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID"),
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event", body = EventDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a member", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    user: AuthUser,
    Path((game_id, event_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::Subscribed(game_id)])
        .await?;

    let service = EventService::new(&state.db);
    let event = service.get(game_id, event_id).await?;

    Ok((StatusCode::OK, Json(event)))
}

/// PUT /games/{game_id}/events/{event_id}
/// Partial update. Admins only.
#[utoipa::path(
    put,
    path = "/games/{game_id}/events/{event_id}",
    tag = EVENT_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID"),
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "Updated event", body = EventDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a game admin", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    user: AuthUser,
    Path((game_id, event_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<UpdateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::GameAdmin(game_id)])
        .await?;

    let service = EventService::new(&state.db);
    let event = service.update(game_id, event_id, payload).await?;

    Ok((StatusCode::OK, Json(event)))
}

/// DELETE /games/{game_id}/events/{event_id}
/// Admins only.
#[utoipa::path(
    delete,
    path = "/games/{game_id}/events/{event_id}",
    tag = EVENT_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID"),
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a game admin", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    user: AuthUser,
    Path((game_id, event_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::GameAdmin(game_id)])
        .await?;

    let service = EventService::new(&state.db);
    service.delete(game_id, event_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /games/{game_id}/events/{event_id}/attendance
#[utoipa::path(
    post,
    path = "/games/{game_id}/events/{event_id}/attendance",
    tag = EVENT_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID"),
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Attendance confirmed"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a member", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_attendance(
    State(state): State<AppState>,
    user: AuthUser,
    Path((game_id, event_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::Subscribed(game_id)])
        .await?;

    let service = EventService::new(&state.db);
    service.confirm_attendance(user.id, game_id, event_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /games/{game_id}/events/{event_id}/attendance
/// 404 if the caller never responded.
#[utoipa::path(
    delete,
    path = "/games/{game_id}/events/{event_id}/attendance",
    tag = EVENT_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID"),
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Attendance declined"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a member", body = ErrorDto),
        (status = 404, description = "Event or response not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn decline_attendance(
    State(state): State<AppState>,
    user: AuthUser,
    Path((game_id, event_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::Subscribed(game_id)])
        .await?;

    let service = EventService::new(&state.db);
    service.decline_attendance(user.id, game_id, event_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /games/{game_id}/events/{event_id}/attendance
#[utoipa::path(
    get,
    path = "/games/{game_id}/events/{event_id}/attendance",
    tag = EVENT_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID"),
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Attendees with marks", body = Vec<AttendeeDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a member", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attendees(
    State(state): State<AppState>,
    user: AuthUser,
    Path((game_id, event_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db)
        .require(user.id, &[Permission::Subscribed(game_id)])
        .await?;

    let service = EventService::new(&state.db);
    let attendees = service.attendees(game_id, event_id).await?;

    Ok((StatusCode::OK, Json(attendees)))
}
