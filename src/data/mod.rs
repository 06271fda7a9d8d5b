//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models and return them to the
//! service layer, which converts them to DTOs at the API boundary. All database queries,
//! inserts, updates, and deletes are performed through these repositories.

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

#[cfg(test)]
mod test;
