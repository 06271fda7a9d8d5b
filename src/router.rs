//! Route table, OpenAPI document, and the CORS layer.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{
        character_sheet, event, friend_request, game, hello, join_request, message, notification,
        private_message, session, theme, user,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(
    hello::hello,
    user::register,
    user::login,
    user::get_me,
    user::get_user,
    user::update_me,
    user::upload_my_photo,
    user::delete_my_photo,
    user::delete_me,
    theme::get_themes,
    theme::upload_theme_photo,
    theme::delete_theme_photo,
    game::create_game,
    game::search_games,
    game::my_games,
    game::get_game,
    game::update_game,
    game::delete_game,
    game::upload_game_photo,
    game::delete_game_photo,
    game::get_members,
    game::leave_game,
    game::rejoin_game,
    session::create_session,
    session::get_sessions,
    session::get_session,
    session::update_session,
    session::delete_session,
    session::confirm_attendance,
    session::decline_attendance,
    session::reset_attendance,
    session::get_attendees,
    session::my_sessions,
    event::create_event,
    event::get_events,
    event::get_event,
    event::update_event,
    event::delete_event,
    event::confirm_attendance,
    event::decline_attendance,
    event::get_attendees,
    message::send_message,
    message::send_image_message,
    message::get_messages,
    private_message::send_private_message,
    private_message::send_private_image_message,
    private_message::get_conversation,
    private_message::get_conversations,
    friend_request::send_friend_request,
    friend_request::get_pending_requests,
    friend_request::accept_friend_request,
    friend_request::reject_friend_request,
    friend_request::get_friends,
    friend_request::remove_friend,
    join_request::create_join_request,
    join_request::join_request_exists,
    join_request::get_pending_join_requests,
    join_request::accept_join_request,
    join_request::reject_join_request,
    notification::get_notifications,
    notification::get_unread_notifications,
    notification::get_unread_count,
    notification::read_notification,
    notification::read_game_message_notifications,
    notification::read_private_message_notifications,
    notification::read_all_notifications,
    character_sheet::create_character,
    character_sheet::get_characters,
    character_sheet::get_my_characters,
    character_sheet::get_character,
    character_sheet::update_character,
    character_sheet::delete_character,
    character_sheet::upload_character_photo,
    character_sheet::delete_character_photo,
))]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/hello", get(hello::hello))
        .route("/users/register", post(user::register))
        .route("/users/login", get(user::login))
        .route(
            "/users/me",
            get(user::get_me).put(user::update_me).delete(user::delete_me),
        )
        .route(
            "/users/me/photo",
            post(user::upload_my_photo).delete(user::delete_my_photo),
        )
        .route("/users/{user_id}", get(user::get_user))
        .route("/themes", get(theme::get_themes))
        .route(
            "/themes/{theme_id}/photo",
            post(theme::upload_theme_photo).delete(theme::delete_theme_photo),
        )
        .route("/games", post(game::create_game).get(game::search_games))
        .route("/games/me", get(game::my_games))
        .route(
            "/games/{game_id}",
            get(game::get_game)
                .put(game::update_game)
                .delete(game::delete_game),
        )
        .route(
            "/games/{game_id}/photo",
            post(game::upload_game_photo).delete(game::delete_game_photo),
        )
        .route("/games/{game_id}/members", get(game::get_members))
        .route("/games/{game_id}/leave", post(game::leave_game))
        .route("/games/{game_id}/rejoin", post(game::rejoin_game))
        .route(
            "/games/{game_id}/sessions",
            post(session::create_session).get(session::get_sessions),
        )
        .route(
            "/games/{game_id}/sessions/{session_id}",
            get(session::get_session)
                .put(session::update_session)
                .delete(session::delete_session),
        )
        .route(
            "/games/{game_id}/sessions/{session_id}/attendance",
            post(session::confirm_attendance)
                .delete(session::decline_attendance)
                .put(session::reset_attendance)
                .get(session::get_attendees),
        )
        .route("/sessions/me", get(session::my_sessions))
        .route(
            "/games/{game_id}/events",
            post(event::create_event).get(event::get_events),
        )
        .route(
            "/games/{game_id}/events/{event_id}",
            get(event::get_event)
                .put(event::update_event)
                .delete(event::delete_event),
        )
        .route(
            "/games/{game_id}/events/{event_id}/attendance",
            post(event::confirm_attendance)
                .delete(event::decline_attendance)
                .get(event::get_attendees),
        )
        .route(
            "/games/{game_id}/messages",
            post(message::send_message).get(message::get_messages),
        )
        .route(
            "/games/{game_id}/messages/image",
            post(message::send_image_message),
        )
        .route(
            "/friends/{friend_user_id}/messages",
            post(private_message::send_private_message).get(private_message::get_conversation),
        )
        .route(
            "/friends/{friend_user_id}/messages/image",
            post(private_message::send_private_image_message),
        )
        .route(
            "/friends/conversations",
            get(private_message::get_conversations),
        )
        .route(
            "/friends/requests",
            post(friend_request::send_friend_request),
        )
        .route(
            "/friends/requests/pending",
            get(friend_request::get_pending_requests),
        )
        .route(
            "/friends/requests/{request_id}/accept",
            post(friend_request::accept_friend_request),
        )
        .route(
            "/friends/requests/{request_id}/reject",
            post(friend_request::reject_friend_request),
        )
        .route("/friends", get(friend_request::get_friends))
        .route(
            "/friends/{friend_user_id}",
            delete(friend_request::remove_friend),
        )
        .route(
            "/games/{game_id}/join-requests",
            post(join_request::create_join_request).get(join_request::get_pending_join_requests),
        )
        .route(
            "/games/{game_id}/join-requests/me",
            get(join_request::join_request_exists),
        )
        .route(
            "/games/{game_id}/join-requests/{request_id}/accept",
            post(join_request::accept_join_request),
        )
        .route(
            "/games/{game_id}/join-requests/{request_id}/reject",
            post(join_request::reject_join_request),
        )
        .route("/notifications", get(notification::get_notifications))
        .route(
            "/notifications/unread",
            get(notification::get_unread_notifications),
        )
        .route(
            "/notifications/unread/count",
            get(notification::get_unread_count),
        )
        .route(
            "/notifications/{notification_id}/read",
            post(notification::read_notification),
        )
        .route(
            "/notifications/messages/{game_id}/read",
            post(notification::read_game_message_notifications),
        )
        .route(
            "/notifications/private-messages/{friend_user_id}/read",
            post(notification::read_private_message_notifications),
        )
        .route(
            "/notifications/read-all",
            post(notification::read_all_notifications),
        )
        .route(
            "/games/{game_id}/characters",
            post(character_sheet::create_character).get(character_sheet::get_characters),
        )
        .route(
            "/games/{game_id}/characters/mine",
            get(character_sheet::get_my_characters),
        )
        .route(
            "/games/{game_id}/characters/{character_id}",
            get(character_sheet::get_character)
                .put(character_sheet::update_character)
                .delete(character_sheet::delete_character),
        )
        .route(
            "/games/{game_id}/characters/{character_id}/photo",
            post(character_sheet::upload_character_photo)
                .delete(character_sheet::delete_character_photo),
        )
        .layer(CorsLayer::permissive())
}
