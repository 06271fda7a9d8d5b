//! API data transfer objects.
//!
//! DTOs are the only types that cross the HTTP boundary. Each module pairs
//! response DTOs with the request payloads for its resource; conversion from
//! entity models happens in the service layer, which also resolves stored
//! photo paths to public storage URLs.

pub mod api;
pub mod character_sheet;
pub mod event;
pub mod friend_request;
pub mod game;
pub mod join_request;
pub mod message;
pub mod notification;
pub mod private_message;
pub mod session;
pub mod subscription;
pub mod theme;
pub mod user;
