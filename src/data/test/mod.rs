mod character_sheet;
mod friend_request;
mod game;
mod join_request;
mod message;
mod notification;
mod private_message;
mod session;
mod session_attendance;
mod subscription;
mod theme;
mod user;
