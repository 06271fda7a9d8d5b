//! SeaORM entity models for the questlog database schema.
//!
//! One module per table. Handlers and services never touch these types
//! directly; the data layer converts them to DTOs at its boundary.

pub mod character_sheet;
pub mod event;
pub mod event_attendance;
pub mod friend_request;
pub mod game;
pub mod join_request;
pub mod message;
pub mod notification;
pub mod private_message;
pub mod session;
pub mod session_attendance;
pub mod subscription;
pub mod theme;
pub mod user;

pub mod prelude;
